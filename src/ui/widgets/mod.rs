// SPDX-License-Identifier: MPL-2.0
pub mod track_sensor;

pub use track_sensor::{track_sensor, TrackEvent, TrackSensor};
