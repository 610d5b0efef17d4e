pub mod raw_sample;
pub mod reading;
pub mod temperature;
