use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, trace};

use crate::models::{reading::Reading, temperature::Temperature};

use super::ports::{PublishError, PublishPort, SensorPort};

/// Topic every reading is published to.
pub const TOPIC: &str = "fishcam/temperature";

pub type MultiPort = Vec<Arc<dyn PublishPort + Send + Sync>>;

pub struct CoreSystem<S: SensorPort> {
    pub sensor_port: S,
    pub publish_ports: MultiPort,
}

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Failed to encode reading. Error: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Publish(#[from] PublishError),

    /// The blocking task running the cycle panicked or was cancelled.
    #[error("Cycle did not complete. Error: {0}")]
    Aborted(JoinError),
}

impl<S: SensorPort> CoreSystem<S> {
    pub fn new(sensor_port: S, publish_ports: MultiPort) -> Self {
        CoreSystem {
            sensor_port,
            publish_ports,
        }
    }

    /// Run one read and publish cycle.
    pub fn tick(&self) -> Result<Reading, CycleError> {
        run_cycle(&self.sensor_port, &self.publish_ports)
    }
}

/// Read the sensor once, convert to Celsius and publish the JSON encoded
/// reading to every port in order. A sentinel reading is published like any
/// other. The first publish error aborts the cycle.
pub fn run_cycle(
    sensor_port: &impl SensorPort,
    publish_ports: &[Arc<dyn PublishPort + Send + Sync>],
) -> Result<Reading, CycleError> {
    let raw = sensor_port.poll_raw_temperature();
    trace!("Polled raw temperature: {}", raw);

    let reading = Reading::new(sensor_port.sensor_id(), Temperature::from_millidegrees(raw));
    let payload = serde_json::to_vec(&reading).map_err(CycleError::Encode)?;

    for port in publish_ports.iter() {
        port.publish(TOPIC, &payload)?;
    }
    debug!(
        "Published reading to {} port(s). Reading: {}",
        publish_ports.len(),
        reading
    );

    Ok(reading)
}
