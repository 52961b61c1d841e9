// SPDX-License-Identifier: MPL-2.0
//! Resolving natural image sizes for the reel.
//!
//! [`DimensionSource`] is the seam between the reel and whatever fetches and
//! decodes images. [`ImageDimensionSource`] is the default adapter; tests and
//! hosts with their own caches can supply another.

pub mod dimensions;
pub mod loader;

pub use dimensions::{is_remote, local_path, DimensionSource, ImageDimensionSource, ProbedImage};
pub use loader::{resolve_dimensions, DimensionLoader, LoadOutcome, LoadTicket};
