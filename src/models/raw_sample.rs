use std::io::{self, BufRead};

use thiserror::Error;

/// Status token the w1 driver writes when the scratchpad CRC matched.
const CRC_OK: &str = "YES";

/// Marker preceding the milli-degree value on the temperature line.
const TEMPERATURE_MARKER: &str = "t=";

/// The two lines of a `w1_slave` file:
///
/// ```text
/// 72 01 4b 46 7f ff 0e 10 57 : crc=57 YES
/// 72 01 4b 46 7f ff 0e 10 57 t=23562
/// ```
///
/// A `RawSample` only exists for reads whose CRC status was `YES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSample {
    crc_line: String,
    temperature_line: String,
}

#[derive(Error, Debug)]
pub enum RawSampleError {
    #[error("Failed to read sample. Error: {0}")]
    Io(io::Error),

    #[error("Sample is empty.")]
    Empty,

    /// The driver flagged the read as corrupt, or the status line is malformed.
    #[error("CRC check failed. Status token: '{0}'")]
    CrcFailed(String),

    #[error("Sample has no temperature line.")]
    MissingTemperatureLine,

    #[error("Temperature line has no 't=' marker.")]
    MissingTemperatureMarker,

    #[error("Temperature value '{0}' is not an integer.")]
    InvalidTemperature(String),
}

impl RawSample {
    /// Read a sample line by line. The temperature line is only read once the
    /// status line reports a good CRC.
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self, RawSampleError> {
        let mut crc_line = String::new();
        if reader.read_line(&mut crc_line).map_err(RawSampleError::Io)? == 0 {
            return Err(RawSampleError::Empty);
        }

        match crc_token(&crc_line) {
            Some(CRC_OK) => {}
            token => {
                return Err(RawSampleError::CrcFailed(
                    token.unwrap_or_default().to_string(),
                ))
            }
        }

        let mut temperature_line = String::new();
        if reader
            .read_line(&mut temperature_line)
            .map_err(RawSampleError::Io)?
            == 0
        {
            return Err(RawSampleError::MissingTemperatureLine);
        }

        Ok(Self {
            crc_line,
            temperature_line,
        })
    }

    pub fn crc_line(&self) -> &str {
        &self.crc_line
    }

    /// Parse everything after the last `t=` as milli-degrees Celsius.
    pub fn millidegrees(&self) -> Result<i64, RawSampleError> {
        let (_, value) = self
            .temperature_line
            .rsplit_once(TEMPERATURE_MARKER)
            .ok_or(RawSampleError::MissingTemperatureMarker)?;
        let value = value.trim();

        value
            .parse::<i64>()
            .map_err(|_| RawSampleError::InvalidTemperature(value.to_string()))
    }
}

/// Last space separated token of the status line, newline stripped.
/// `None` when the line has a single token.
fn crc_token(line: &str) -> Option<&str> {
    line.trim_end_matches(&['\r', '\n'][..])
        .rsplit_once(' ')
        .map(|(_, token)| token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str =
        "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t=23562\n";

    #[test]
    fn test_reads_good_sample() {
        let sample = RawSample::read_from(GOOD.as_bytes()).expect("Failed to read sample");
        assert_eq!(sample.crc_line(), "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n");
        assert_eq!(sample.millidegrees().expect("Failed to parse"), 23562);
    }

    #[test]
    fn test_negative_and_unterminated_values() {
        let sample = RawSample::read_from("a crc=01 YES\nb t=-1250".as_bytes())
            .expect("Failed to read sample");
        assert_eq!(sample.millidegrees().expect("Failed to parse"), -1250);
    }

    #[test]
    fn test_crc_no_is_rejected() {
        let content = "72 01 4b 46 7f ff 0e 10 57 : crc=57 NO\n72 01 t=23562\n";
        match RawSample::read_from(content.as_bytes()) {
            Err(RawSampleError::CrcFailed(token)) => assert_eq!(token, "NO"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_status_token_must_match_exactly() {
        for line in ["crc=57 yes\n", "crc=57 YESS\n", "crc=57 YES \n", "YES\n"] {
            let content = format!("{}t=23562\n", line);
            assert!(
                matches!(
                    RawSample::read_from(content.as_bytes()),
                    Err(RawSampleError::CrcFailed(_))
                ),
                "Accepted status line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_crlf_status_line() {
        let sample = RawSample::read_from("crc=57 YES\r\nt=18000\r\n".as_bytes())
            .expect("Failed to read sample");
        assert_eq!(sample.millidegrees().expect("Failed to parse"), 18000);
    }

    #[test]
    fn test_empty_and_short_samples() {
        assert!(matches!(
            RawSample::read_from("".as_bytes()),
            Err(RawSampleError::Empty)
        ));
        assert!(matches!(
            RawSample::read_from("crc=57 YES\n".as_bytes()),
            Err(RawSampleError::MissingTemperatureLine)
        ));
    }

    #[test]
    fn test_malformed_temperature_line() {
        let sample = RawSample::read_from("crc=57 YES\n72 01 4b 46\n".as_bytes())
            .expect("Failed to read sample");
        assert!(matches!(
            sample.millidegrees(),
            Err(RawSampleError::MissingTemperatureMarker)
        ));

        let sample = RawSample::read_from("crc=57 YES\n72 01 t=2x562\n".as_bytes())
            .expect("Failed to read sample");
        match sample.millidegrees() {
            Err(RawSampleError::InvalidTemperature(value)) => assert_eq!(value, "2x562"),
            other => panic!("Unexpected result: {:?}", other),
        }

        let sample = RawSample::read_from("crc=57 YES\n72 01 t=\n".as_bytes())
            .expect("Failed to read sample");
        assert!(matches!(
            sample.millidegrees(),
            Err(RawSampleError::InvalidTemperature(_))
        ));
    }
}
