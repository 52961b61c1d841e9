// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Offsets and widths are `f32`, so comparisons go through the `approx`
//! assertion macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
