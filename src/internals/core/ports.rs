use std::error::Error as StdError;

use thiserror::Error;

/// Source of raw temperature samples for a single sensor.
pub trait SensorPort {
    fn sensor_id(&self) -> &str;

    /// Raw reading in milli-degrees Celsius. Never fails: an unreadable sensor
    /// yields `SENTINEL_MILLIDEGREES`.
    fn poll_raw_temperature(&self) -> i64;
}

/// Fire and forget delivery of an encoded message to a topic.
pub trait PublishPort {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError>;
}

#[derive(Error, Debug)]
pub enum PublishError {
    /// The messaging client refused to queue the message. The client error
    /// is part of the message, not a separate source.
    #[error("Messaging client rejected message for '{topic}'. Error: {error}")]
    Rejected {
        topic: String,
        error: Box<dyn StdError + Send + Sync>,
    },
}
