//! Data Models Module
//!
//! Raw provider payload shapes and the normalized report stored in the cache.

mod raw;
mod report;

pub use raw::{RawCondition, RawMain, RawObservation, RawSys, RawWind};
pub use report::{Condition, SunTimes, Temperature, WeatherReport, Wind};
