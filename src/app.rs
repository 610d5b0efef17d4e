use std::{sync::Arc, time::Duration};

use anyhow::Result;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{error, info, warn};

use crate::{
    config::Config,
    externals::{
        event_logging::EventLoggingModule,
        mqtt::{task::task_drive_mqtt_event_loop, MqttModule},
        shutdown::task::task_watch_shutdown_signals,
        w1_sensor::W1SensorModule,
    },
    internals::core::{
        system::{CoreSystem, CycleError},
        task::{business_logic, task_poll_and_publish},
    },
};

/// How long the MQTT event loop gets to flush queued messages on exit.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Wire the modules from `config` and run until a shutdown signal, a fatal
/// cycle error, or the end of the single cycle in `run_once` mode. The MQTT
/// client is disconnected and drained on every exit path.
pub async fn run(config: Config) -> Result<()> {
    let W1SensorModule { sensor_adapter } = W1SensorModule::initialize(&config);

    let MqttModule {
        publish_adapter: emit_to_mqtt_adapter,
        event_loop,
    } = MqttModule::initialize(&config);

    let EventLoggingModule {
        publish_adapter: emit_to_logging_adapter,
    } = EventLoggingModule::initialize();

    let emit_to_mqtt_adapter = Arc::new(emit_to_mqtt_adapter);
    let core = CoreSystem::new(
        sensor_adapter,
        vec![emit_to_mqtt_adapter.clone(), Arc::new(emit_to_logging_adapter)],
    );

    let tracker = TaskTracker::new();
    let token = CancellationToken::new();
    let mqtt_token = CancellationToken::new();

    let event_loop_handle =
        tracker.spawn(task_drive_mqtt_event_loop(mqtt_token.clone(), event_loop));

    let outcome: Result<()> = if config.run_once {
        match tokio::task::spawn_blocking(move || business_logic(&core)).await {
            Ok(res) => res.map_err(Into::into),
            Err(e) => Err(CycleError::Aborted(e).into()),
        }
    } else {
        tracker.spawn(task_watch_shutdown_signals(token.clone()));
        let poll_handle = tracker.spawn(task_poll_and_publish(
            token.clone(),
            core,
            config.poll_interval,
        ));

        let res = match poll_handle.await {
            Ok(res) => res.map_err(Into::into),
            Err(e) => Err(CycleError::Aborted(e).into()),
        };
        token.cancel();
        res
    };

    if let Err(e) = emit_to_mqtt_adapter.disconnect() {
        warn!("Failed to queue MQTT disconnect. Error: {}", e);
    }
    if tokio::time::timeout(DRAIN_TIMEOUT, event_loop_handle)
        .await
        .is_err()
    {
        warn!("MQTT event loop did not drain in time.");
    }
    mqtt_token.cancel();

    tracker.close();
    tracker.wait().await;

    match outcome {
        Ok(()) => {
            info!("Completed.");
            Ok(())
        }
        Err(e) => {
            error!("Exiting on fatal error. Error: {:#}", e);
            Err(e)
        }
    }
}
