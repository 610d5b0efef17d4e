pub mod event_logging;
pub mod mqtt;
pub mod shutdown;
pub mod w1_sensor;
