use rumqttc::{AsyncClient, ClientError, QoS};

use crate::internals::core::ports::{PublishError, PublishPort};

/// Readings are at-most-once: a lost sample is replaced by the next cycle.
const QOS: QoS = QoS::AtMostOnce;

/// Queues messages on an MQTT client. Transmission happens on the event loop
/// driven by `task_drive_mqtt_event_loop`.
pub struct MqttPublishAdapter {
    client: AsyncClient,
}

impl MqttPublishAdapter {
    pub fn new(client: AsyncClient) -> Self {
        Self { client }
    }

    /// Queue a disconnect behind any pending publishes.
    pub fn disconnect(&self) -> Result<(), ClientError> {
        self.client.try_disconnect()
    }
}

impl PublishPort for MqttPublishAdapter {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.client
            .try_publish(topic, QOS, false, payload.to_vec())
            .map_err(|e| PublishError::Rejected {
                topic: topic.to_string(),
                error: Box::new(e),
            })
    }
}
