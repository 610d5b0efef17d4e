use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace, warn};

use super::{
    ports::SensorPort,
    system::{CoreSystem, CycleError},
};

/// Task: Runs a read and publish cycle, then waits `interval` before the next.
/// Cycles run on the blocking pool since a w1 read can take most of a second.
/// The token is only checked between cycles, so a started cycle always
/// completes. Returns the first cycle error; `Ok` after cancellation.
#[tracing::instrument(skip_all)]
pub async fn task_poll_and_publish<S: SensorPort + Send + Sync + 'static>(
    token: CancellationToken,
    system: CoreSystem<S>,
    interval: Duration,
) -> Result<(), CycleError> {
    info!("Started. Polling every {:?}.", interval);
    let system = Arc::new(system);
    loop {
        let cycle_system = system.clone();
        tokio::task::spawn_blocking(move || business_logic(&cycle_system))
            .await
            .map_err(CycleError::Aborted)??;

        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            _ = tokio::time::sleep(interval) => {}
        };
    }

    Ok(())
}

/// Perform task business logic.
/// Run one cycle and log the reading it produced.
#[tracing::instrument(skip_all)]
pub fn business_logic<S: SensorPort>(system: &CoreSystem<S>) -> Result<(), CycleError> {
    trace!("Executing business logic.");
    match system.tick() {
        Ok(reading) if reading.is_sentinel() => {
            warn!("Published sentinel reading. Sensor unavailable. Reading: {}", reading);
            Ok(())
        }
        Ok(reading) => {
            info!("Published reading: {}", reading);
            Ok(())
        }
        Err(e) => {
            error!("Failed to run read and publish cycle. Error: {}", e);
            Err(e)
        }
    }
}
