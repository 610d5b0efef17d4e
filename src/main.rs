use anyhow::Result;
use fishcam_temperature::{app, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_max_level(config.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!(
        "Starting. Sensor: {}, path: {}, broker: {}:{}",
        config.sensor_id, config.base_path, config.mqtt_host, config.mqtt_port
    );

    app::run(config).await
}
