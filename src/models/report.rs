//! Weather Report Module
//!
//! The normalized value shape produced by the client and stored in the cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RawObservation;

// == Weather Report ==
/// Normalized weather observation for a single location.
///
/// This is the cached value: it is always returned by clone, never by
/// reference into the cache. Fields absent from the raw payload come through
/// as zero/empty rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Primary weather condition
    pub condition: Condition,
    /// Temperature readings
    pub temperature: Temperature,
    /// Visibility in meters
    pub visibility: i64,
    /// Wind readings
    pub wind: Wind,
    /// Observation time, epoch seconds
    pub observed_at: i64,
    /// Sunrise/sunset times
    pub sun: SunTimes,
    /// UTC offset in seconds
    pub utc_offset: i64,
    /// Location display name
    pub name: String,
}

/// Weather condition category and description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Main category, e.g. "Clouds"
    pub main: String,
    /// Human description, e.g. "scattered clouds"
    pub description: String,
}

/// Current and perceived temperature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub temp: f64,
    pub feels_like: f64,
}

/// Wind speed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Sunrise and sunset, epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

impl WeatherReport {
    /// Observation time as a UTC datetime, if the epoch value is in range.
    pub fn observed_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.observed_at, 0)
    }
}

// == Normalization ==
impl From<RawObservation> for WeatherReport {
    fn from(raw: RawObservation) -> Self {
        let condition = raw.weather.into_iter().next().unwrap_or_default();

        Self {
            condition: Condition {
                main: condition.main,
                description: condition.description,
            },
            temperature: Temperature {
                temp: raw.main.temp,
                feels_like: raw.main.feels_like,
            },
            visibility: raw.visibility,
            wind: Wind { speed: raw.wind.speed },
            observed_at: raw.dt,
            sun: SunTimes {
                sunrise: raw.sys.sunrise,
                sunset: raw.sys.sunset,
            },
            utc_offset: raw.timezone,
            name: raw.name,
        }
    }
}
