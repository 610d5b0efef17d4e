use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::temperature::Temperature;

/// One published measurement. Built fresh every cycle and discarded once it
/// has been handed to the messaging ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sensor_id: String,
    pub temperature: Temperature,
}

impl Reading {
    pub fn new(sensor_id: impl Into<String>, temperature: Temperature) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            temperature,
        }
    }

    /// True when the reading carries the "sensor unavailable" marker.
    pub fn is_sentinel(&self) -> bool {
        self.temperature.is_sentinel()
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.sensor_id, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_two_keys() {
        let reading = Reading::new("28-00000001e2d1", Temperature::from_millidegrees(23562));
        let json = serde_json::to_string(&reading).expect("Failed to serialize reading");
        assert_eq!(json, r#"{"sensor_id":"28-00000001e2d1","temperature":23.562}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let reading = Reading::new("28-00000001e2d1", Temperature::from_millidegrees(23562));
        let bytes = serde_json::to_vec(&reading).expect("Failed to serialize reading");
        let parsed: Reading = serde_json::from_slice(&bytes).expect("Failed to parse reading");

        assert_eq!(parsed.sensor_id, reading.sensor_id);
        assert!((parsed.temperature.value - reading.temperature.value).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let reading = Reading::new("28-00000001e2d1", Temperature::from_millidegrees(23562));
        assert_eq!(reading.to_string(), "28-00000001e2d1: 23.562 degC");
    }
}
