use tracing::error;

use crate::{internals::core::ports::SensorPort, models::temperature::SENTINEL_MILLIDEGREES};

use super::services::{W1SlaveService, W1SlaveServiceActual};

pub struct PollW1SensorAdapter<T: W1SlaveService> {
    pub service: T,
    sensor_id: String,
    base_path: String,
}

impl<T: W1SlaveService> PollW1SensorAdapter<T> {
    pub fn new(service: T, sensor_id: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            service,
            sensor_id: sensor_id.into(),
            base_path: base_path.into(),
        }
    }
}

impl<T: W1SlaveService> SensorPort for PollW1SensorAdapter<T> {
    fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    /// Any failure is logged and turned into the sentinel value.
    fn poll_raw_temperature(&self) -> i64 {
        match self
            .service
            .read_millidegrees(&self.sensor_id, &self.base_path)
        {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    "Failed to read sensor '{}'. Reporting {}. Error: {}",
                    self.sensor_id, SENTINEL_MILLIDEGREES, e
                );
                SENTINEL_MILLIDEGREES
            }
        }
    }
}

/// Read `sensor_id` under `base_path` from the kernel's w1 device tree,
/// returning milli-degrees Celsius or `SENTINEL_MILLIDEGREES`.
pub fn read_temperature(sensor_id: &str, base_path: &str) -> i64 {
    PollW1SensorAdapter::new(W1SlaveServiceActual, sensor_id, base_path).poll_raw_temperature()
}
