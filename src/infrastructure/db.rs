//! MongoDB connection setup

use std::time::Duration;

use bson::doc;
use mongodb::{Client, Database, options::ClientOptions};
use tracing::info;

use crate::domain::DomainError;

/// Database used when neither the URI nor `MONGO_DB` names one
pub const DEFAULT_DATABASE: &str = "test";

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Parse the connection string and select the database.
///
/// The driver connects lazily, so this only fails on a malformed URI.
/// Use [`ping`] to check that the server is actually reachable.
pub async fn connect(uri: &str, db_name: Option<&str>) -> Result<Database, DomainError> {
    let mut options = ClientOptions::parse(uri).await?;
    options
        .server_selection_timeout
        .get_or_insert(SERVER_SELECTION_TIMEOUT);
    options
        .app_name
        .get_or_insert_with(|| env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;

    let database = match db_name {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    info!("Using MongoDB database '{}'", database.name());
    Ok(database)
}

/// Round-trip a `ping` command to verify the server is reachable.
pub async fn ping(database: &Database) -> Result<(), DomainError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
