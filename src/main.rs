use anyhow::Context;
use subscriptions_service::{
    configuration::get_configuration, startup::Application,
    telemetry::setup_tracing,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    setup_tracing("subscriptions_service", "info", std::io::stdout);
    let configuration =
        get_configuration().context("Could not read configuration file")?;

    let app = Application::build(configuration).await?;
    app.run_until_stopped().await?;
    Ok(())
}
