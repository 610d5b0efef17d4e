use std::time::Duration;

use rumqttc::{AsyncClient, EventLoop, MqttOptions};

use crate::config::Config;

use self::adapters::MqttPublishAdapter;

pub mod adapters;
pub mod task;

const KEEP_ALIVE: Duration = Duration::from_secs(30);

/// Pending requests the client may queue before publishes are rejected.
/// Readings still queued when the broker returns are sent late, in order.
const REQUEST_CAPACITY: usize = 10;

pub struct MqttModule {
    pub publish_adapter: MqttPublishAdapter,
    pub event_loop: EventLoop,
}

impl MqttModule {
    /// Nothing connects until the event loop is polled.
    pub fn initialize(config: &Config) -> Self {
        let mut options = MqttOptions::new(
            config.mqtt_client_id.as_str(),
            config.mqtt_host.as_str(),
            config.mqtt_port,
        );
        options.set_keep_alive(KEEP_ALIVE);

        let (client, event_loop) = AsyncClient::new(options, REQUEST_CAPACITY);
        Self {
            publish_adapter: MqttPublishAdapter::new(client),
            event_loop,
        }
    }
}
