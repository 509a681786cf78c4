//! Garrison API server binary.

use anyhow::anyhow;
use garrison_server::{
    config::{load_from_env, validate_config, LoggingConfig},
    seed, Server,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;
    init_tracing(&config.logging);

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            eprintln!("config error: {error}");
        }
        return Err(anyhow!("invalid configuration"));
    }

    let server = Server::new(config).await?;

    // Baseline data the rest of the system assumes pre-exists.
    let seeded = seed::baseline(&server.state().store, &server.state().directory);
    info!(
        alpha = %seeded.alpha.id,
        bravo = %seeded.bravo.id,
        "Dev fixtures installed"
    );

    server.run().await
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
