use async_trait::async_trait;
use portfolio_backend::domain::{DomainError, MailRelay, OutgoingEmail};
use std::sync::{Arc, Mutex};

/// Mail relay that records every message instead of delivering it.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailRelay {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    attempts: Arc<Mutex<usize>>,
    failing: bool,
}

#[allow(dead_code)]
impl MockMailRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose every send fails, as if the SMTP server were down.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MailRelay for MockMailRelay {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DomainError> {
        *self.attempts.lock().unwrap() += 1;

        if self.failing {
            return Err(DomainError::Relay(
                "Connection refused (os error 111)".to_string(),
            ));
        }

        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
