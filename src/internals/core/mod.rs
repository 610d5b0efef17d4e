pub mod ports;
pub mod system;
pub mod task;
