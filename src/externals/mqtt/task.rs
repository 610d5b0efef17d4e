use std::time::Duration;

use rumqttc::{Event, EventLoop, Outgoing};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Pause before polling again after a connection error.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Task: Drives the MQTT event loop so queued messages reach the broker.
/// Connection errors are logged and the loop keeps polling; the client library
/// reconnects on the next poll. Stops once the disconnect request has been
/// sent, or when cancelled.
#[tracing::instrument(skip_all)]
pub async fn task_drive_mqtt_event_loop(token: CancellationToken, mut event_loop: EventLoop) {
    info!("Started.");
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            event = event_loop.poll() => {
                match event {
                    Ok(Event::Outgoing(Outgoing::Disconnect)) => {
                        info!("Disconnected from broker.");
                        break;
                    },
                    Ok(Event::Outgoing(Outgoing::Publish(_))) => {
                        debug!("Sent a publish packet.");
                    },
                    Ok(event) => {
                        trace!("MQTT event: {:?}", event);
                    },
                    Err(e) => {
                        warn!("MQTT connection error. Error: {}", e);
                        tokio::select! {
                            _ = token.cancelled() => {
                                warn!("Cancelled.");
                                break;
                            },
                            _ = tokio::time::sleep(RECONNECT_DELAY) => {}
                        }
                    }
                }
            }
        }
    }
}
