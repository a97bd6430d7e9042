//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - MongoDB connection setup (db)
//! - SMTP mail relay (mailer)
//! - Repository implementations (repositories)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod db;
pub mod mailer;
pub mod repositories;
pub mod server;
pub mod state;

pub use mailer::SmtpMailRelay;
pub use repositories::*;
pub use state::AppState;
