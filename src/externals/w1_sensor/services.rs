use std::{fs::File, io, io::BufReader};

use thiserror::Error;
use tracing::trace;

use crate::models::raw_sample::{RawSample, RawSampleError};

/// File name the w1 driver exposes under each device directory.
pub const W1_SLAVE_FILE: &str = "w1_slave";

/// This service separates reading the kernel's w1 device file from the
/// sensor port, so the port can be tested without a device attached.
pub trait W1SlaveService {
    /// Read the sample of `sensor_id` under `base_path` and return the raw
    /// value in milli-degrees Celsius.
    fn read_millidegrees(&self, sensor_id: &str, base_path: &str) -> Result<i64, SensorReadError>;
}

pub struct W1SlaveServiceActual;

#[derive(Error, Debug)]
pub enum SensorReadError {
    /// The device file is missing or not readable.
    #[error("Failed to open '{path}'. Error: {error}")]
    FailedToOpen { path: String, error: io::Error },

    /// The device file was read but its content was not a trusted sample.
    #[error("Failed to parse '{path}'. Error: {error}")]
    FailedToParse { path: String, error: RawSampleError },
}

/// `base_path` is used as a prefix, so it normally ends with a separator.
pub fn w1_slave_path(sensor_id: &str, base_path: &str) -> String {
    format!("{}{}/{}", base_path, sensor_id, W1_SLAVE_FILE)
}

impl W1SlaveService for W1SlaveServiceActual {
    /// The file handle is dropped, and so closed, on every return path.
    fn read_millidegrees(&self, sensor_id: &str, base_path: &str) -> Result<i64, SensorReadError> {
        let path = w1_slave_path(sensor_id, base_path);
        trace!("Reading '{}'.", path);

        let file = File::open(&path).map_err(|error| SensorReadError::FailedToOpen {
            path: path.clone(),
            error,
        })?;

        RawSample::read_from(BufReader::new(file))
            .and_then(|sample| {
                trace!("CRC line: {}", sample.crc_line().trim_end());
                sample.millidegrees()
            })
            .map_err(|error| SensorReadError::FailedToParse { path, error })
    }
}
