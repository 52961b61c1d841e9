// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a horizontally scrolling image slider for the Iced GUI
//! framework.
//!
//! Slides are laid out end to end or at explicit coordinates, and the track is
//! moved by the mouse wheel, by hovering near either edge, or by host-supplied
//! left/right triggers. All three channels funnel through one clamped offset.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod layout;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
