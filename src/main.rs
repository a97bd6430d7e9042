use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::config::Config;
use portfolio_backend::infrastructure::{AppState, SmtpMailRelay};
use portfolio_backend::{db, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to the document store. An unreachable server is logged but
    // does not stop startup; requests then fail with 500 until it is back.
    let database = db::connect(&config.mongo_uri, config.mongo_db.as_deref())
        .await
        .context("Invalid MongoDB connection string")?;
    match db::ping(&database).await {
        Ok(()) => tracing::info!("Connected to MongoDB database '{}'", database.name()),
        Err(e) => tracing::error!("MongoDB connection error: {}", e),
    }

    let mail_relay =
        Arc::new(SmtpMailRelay::new(&config.mail).context("Failed to configure mail relay")?);

    if !config.policy.empty_list_not_found {
        tracing::info!("Empty collections are listed as 200 []");
    }

    let state = AppState::with_mongo(&database, mail_relay, &config);
    let app = server::build_router(state, &config.cors_allowed_origins);

    server::serve(app, config.port)
        .await
        .with_context(|| format!("Failed to serve on port {}", config.port))?;

    Ok(())
}
