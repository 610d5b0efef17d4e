use tracing::debug;

use crate::internals::core::ports::{PublishError, PublishPort};

/// Logs every published message instead of sending it anywhere.
pub struct EmitToLoggingAdapter;

impl PublishPort for EmitToLoggingAdapter {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        debug!(
            "[EVENT LOGGING] Published to '{}': {}",
            topic,
            String::from_utf8_lossy(payload)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_fails() {
        assert!(EmitToLoggingAdapter.publish("fishcam/temperature", b"{}").is_ok());
        assert!(EmitToLoggingAdapter
            .publish("fishcam/temperature", &[0xff, 0xfe])
            .is_ok());
    }
}
