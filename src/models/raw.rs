//! Raw Payload Module
//!
//! Wire-shape structs mirroring the provider's JSON response. Every field is
//! `#[serde(default)]` so a partial payload decodes instead of failing; the
//! normalization step fills the gaps with zero/empty values.

use serde::Deserialize;

// == Raw Observation ==
/// Top-level provider payload for a single observation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawObservation {
    /// Weather condition list; the first element is the primary condition
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    /// Temperature readings
    #[serde(default)]
    pub main: RawMain,
    /// Visibility in meters
    #[serde(default)]
    pub visibility: i64,
    /// Wind readings
    #[serde(default)]
    pub wind: RawWind,
    /// Observation time, epoch seconds
    #[serde(default)]
    pub dt: i64,
    /// Sunrise/sunset block
    #[serde(default)]
    pub sys: RawSys,
    /// UTC offset in seconds
    #[serde(default)]
    pub timezone: i64,
    /// Location display name
    #[serde(default)]
    pub name: String,
}

/// One weather condition, e.g. "Clouds" / "scattered clouds".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

/// Temperature block of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMain {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
}

/// Wind block of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWind {
    #[serde(default)]
    pub speed: f64,
}

/// Sunrise/sunset block of the payload, epoch seconds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_decodes_full_payload() {
        let json = r#"{
            "weather": [{"main": "Clouds", "description": "scattered clouds"}],
            "main": {"temp": 269.6, "feels_like": 267.57},
            "visibility": 10000,
            "wind": {"speed": 1.38},
            "dt": 1675744800,
            "sys": {"sunrise": 1675751262, "sunset": 1675787560},
            "timezone": 3600,
            "name": "Zocca"
        }"#;

        let raw: RawObservation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.weather[0].main, "Clouds");
        assert_eq!(raw.main.temp, 269.6);
        assert_eq!(raw.visibility, 10000);
        assert_eq!(raw.sys.sunset, 1675787560);
        assert_eq!(raw.name, "Zocca");
    }

    #[test]
    fn test_raw_decodes_partial_payload() {
        // Only a name: everything else defaults instead of failing
        let raw: RawObservation = serde_json::from_str(r#"{"name": "Nowhere"}"#).unwrap();

        assert_eq!(raw.name, "Nowhere");
        assert!(raw.weather.is_empty());
        assert_eq!(raw.main.temp, 0.0);
        assert_eq!(raw.dt, 0);
    }

    #[test]
    fn test_raw_decodes_empty_object() {
        let raw: RawObservation = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.name, "");
        assert_eq!(raw.timezone, 0);
    }
}
