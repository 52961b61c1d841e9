// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The slider follows the Elm-style "state down, messages up" pattern.
//!
//! - [`slider`] - The slider component: settings, update loop and track view
//! - [`state`] - Offset controller and the wheel, hover, button and resize adapters
//! - [`widgets`] - Custom Iced widgets (track sensor)

pub mod slider;
pub mod state;
pub mod widgets;
