use crate::config::Config;

use self::{adapters::PollW1SensorAdapter, services::W1SlaveServiceActual};

pub mod adapters;
pub mod services;

pub struct W1SensorModule {
    pub sensor_adapter: PollW1SensorAdapter<W1SlaveServiceActual>,
}

impl W1SensorModule {
    pub fn initialize(config: &Config) -> Self {
        Self {
            sensor_adapter: PollW1SensorAdapter::new(
                W1SlaveServiceActual,
                config.sensor_id.as_str(),
                config.base_path.as_str(),
            ),
        }
    }
}
