//! Application state containing repositories and shared resources

use mongodb::Database;
use std::sync::Arc;

use crate::domain::{MailRelay, RecordRepository};
use crate::infrastructure::MongoRecordRepository;
use crate::infrastructure::config::{Config, ResponsePolicy};
use crate::models::{Project, Skill};
use crate::services::ContactRouting;

/// Application state shared across all handlers.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Project repository
    pub projects: Arc<dyn RecordRepository<Project>>,
    /// Skill repository
    pub skills: Arc<dyn RecordRepository<Skill>>,
    /// Outbound mail for the contact form
    pub mail_relay: Arc<dyn MailRelay>,
    pub contact_routing: ContactRouting,
    pub policy: ResponsePolicy,
}

impl AppState {
    pub fn new(
        projects: Arc<dyn RecordRepository<Project>>,
        skills: Arc<dyn RecordRepository<Skill>>,
        mail_relay: Arc<dyn MailRelay>,
        contact_routing: ContactRouting,
        policy: ResponsePolicy,
    ) -> Self {
        Self {
            projects,
            skills,
            mail_relay,
            contact_routing,
            policy,
        }
    }

    /// Create an AppState with MongoDB-backed repositories
    pub fn with_mongo(database: &Database, mail_relay: Arc<dyn MailRelay>, config: &Config) -> Self {
        Self::new(
            Arc::new(MongoRecordRepository::<Project>::new(database)),
            Arc::new(MongoRecordRepository::<Skill>::new(database)),
            mail_relay,
            config.mail.routing(),
            config.policy,
        )
    }
}
