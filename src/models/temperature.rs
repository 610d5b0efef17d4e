use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Raw value reported when the sensor could not be read. Downstream it shows
/// up as 99.999 degC, well outside any plausible tank or room temperature.
pub const SENTINEL_MILLIDEGREES: i64 = 99999;

/// A temperature in degrees Celsius. Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature {
    pub value: f64,
}

impl Temperature {
    /// Convert a raw sensor value in milli-degrees Celsius.
    pub fn from_millidegrees(raw: i64) -> Self {
        Self {
            value: raw as f64 / 1000f64,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::from_millidegrees(SENTINEL_MILLIDEGREES)
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} degC", self.value)
    }
}
