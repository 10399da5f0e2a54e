use signup_form::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("signup_form".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let application = Application::build(config).await?;
    tracing::info!(port = application.get_port(), "Listening for signups");

    match application.run_until_stopped().await {
        Ok(()) => tracing::info!("API has exited"),
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "API failed"
            );
            return Err(e.into());
        }
    }

    Ok(())
}
