use std::env;
use std::fmt;

use thiserror::Error;

use crate::services::contact_service::ContactRouting;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// How handlers shape responses in the two debatable cases:
/// an empty collection on list, and store failures on any operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// Answer `GET` on an empty collection with 404 instead of `200 []`
    pub empty_list_not_found: bool,
    /// Embed the store's error text in 500 bodies
    pub expose_store_errors: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            empty_list_not_found: true,
            expose_store_errors: true,
        }
    }
}

/// SMTP relay settings
#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    /// Login for the relay, also used as the sender address
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl MailConfig {
    pub fn routing(&self) -> ContactRouting {
        ContactRouting {
            sender: self.username.clone(),
            recipient: self.recipient.clone(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_uri: String,
    /// Overrides the database named in the connection string
    pub mongo_db: Option<String>,
    pub port: u16,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
    pub mail: MailConfig,
    pub policy: ResponsePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                reason: format!("'{}' is not a valid port number", raw),
            })?,
            None => DEFAULT_PORT,
        };

        let defaults = ResponsePolicy::default();
        let policy = ResponsePolicy {
            empty_list_not_found: parse_flag(
                "EMPTY_LIST_NOT_FOUND",
                var("EMPTY_LIST_NOT_FOUND"),
                defaults.empty_list_not_found,
            )?,
            expose_store_errors: parse_flag(
                "EXPOSE_STORE_ERRORS",
                var("EXPOSE_STORE_ERRORS"),
                defaults.expose_store_errors,
            )?,
        };

        Ok(Self {
            mongo_uri: required("MONGO_URI")?,
            mongo_db: var("MONGO_DB"),
            port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            mail: MailConfig {
                smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                username: required("EMAIL_USER")?,
                password: required("EMAIL_PASS")?,
                recipient: required("RECIPIENT_EMAIL")?,
            },
            policy,
        })
    }
}

fn parse_flag(
    name: &'static str,
    raw: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var: name,
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}
