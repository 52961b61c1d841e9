// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core value types for the reel.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` derives for settings files it has no dependencies beyond `std`,
//! keeping geometry and scroll rules testable without a windowing system.
//!
//! # Modules
//!
//! - [`slider`]: Reel value objects ([`SliderImage`](slider::SliderImage),
//!   [`LayoutMode`](slider::LayoutMode), [`Align`](slider::Align),
//!   [`ScrollStep`](slider::ScrollStep), [`WheelSensitivity`](slider::WheelSensitivity))

pub mod slider;
