//! Fakes shared by the unit tests.

use std::sync::Mutex;

use crate::internals::core::ports::{PublishError, PublishPort, SensorPort};

/// Base path holding the `w1_slave` fixture files, with trailing separator.
pub fn fixtures_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/").to_string()
}

pub struct FixedSensor {
    sensor_id: String,
    raw: i64,
}

impl FixedSensor {
    pub fn new(sensor_id: &str, raw: i64) -> Self {
        Self {
            sensor_id: sensor_id.to_string(),
            raw,
        }
    }
}

impl SensorPort for FixedSensor {
    fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    fn poll_raw_temperature(&self) -> i64 {
        self.raw
    }
}

/// Records every published `(topic, payload)` pair.
#[derive(Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingPublisher {
    pub fn messages(&self) -> Vec<(String, Vec<u8>)> {
        self.messages.lock().unwrap().clone()
    }
}

impl PublishPort for RecordingPublisher {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.messages
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_vec()));
        Ok(())
    }
}

pub struct FailingPublisher;

impl PublishPort for FailingPublisher {
    fn publish(&self, topic: &str, _payload: &[u8]) -> Result<(), PublishError> {
        Err(PublishError::Rejected {
            topic: topic.to_string(),
            error: "queue closed".into(),
        })
    }
}
