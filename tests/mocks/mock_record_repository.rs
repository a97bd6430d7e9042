use async_trait::async_trait;
use portfolio_backend::domain::{DomainError, RecordRepository};
use portfolio_backend::infrastructure::repositories::parse_record_id;
use portfolio_backend::models::Record;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

struct Inner<F> {
    rows: Vec<(String, F)>,
    next_id: u64,
    unavailable: bool,
    call_counts: HashMap<String, usize>,
}

/// In-memory record repository for testing.
///
/// Keeps insertion order, hands out 24-char hex identifiers and can be
/// switched into a failing state to simulate an unreachable store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordRepository<R: Record> {
    inner: Arc<Mutex<Inner<R::Fields>>>,
}

#[allow(dead_code)]
impl<R: Record> MockRecordRepository<R> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
                unavailable: false,
                call_counts: HashMap::new(),
            })),
        }
    }

    /// Seed a record directly, bypassing call tracking. Returns its id.
    pub fn insert(&self, fields: R::Fields) -> String {
        let mut inner = self.inner.lock().unwrap();
        let id = format!("{:024x}", inner.next_id);
        inner.next_id += 1;
        inner.rows.push((id.clone(), fields));
        id
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        *inner.call_counts.get(method).unwrap_or(&0)
    }

    /// Record the call and fail if the store is marked unavailable.
    fn track_call(&self, method: &str) -> Result<(), DomainError> {
        let mut inner = self.inner.lock().unwrap();
        *inner.call_counts.entry(method.to_string()).or_insert(0) += 1;
        if inner.unavailable {
            return Err(DomainError::Store(
                "Server selection timeout: No available servers".to_string(),
            ));
        }
        Ok(())
    }
}

impl<R: Record> Default for MockRecordRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for MockRecordRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, DomainError> {
        self.track_call("find_all")?;

        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .map(|(id, fields)| R::from_parts(id.clone(), fields.clone()))
            .collect())
    }

    async fn create(&self, fields: R::Fields) -> Result<R, DomainError> {
        self.track_call("create")?;

        let id = self.insert(fields.clone());
        Ok(R::from_parts(id, fields))
    }

    async fn update_by_id(&self, id: &str, fields: R::Fields) -> Result<Option<R>, DomainError> {
        self.track_call("update_by_id")?;
        parse_record_id::<R>(id)?;

        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|(row_id, _)| row_id == id) {
            Some((_, stored)) => {
                *stored = fields.clone();
                Ok(Some(R::from_parts(id.to_string(), fields)))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<R>, DomainError> {
        self.track_call("delete_by_id")?;
        parse_record_id::<R>(id)?;

        let mut inner = self.inner.lock().unwrap();
        let position = inner.rows.iter().position(|(row_id, _)| row_id == id);
        Ok(position.map(|pos| {
            let (id, fields) = inner.rows.remove(pos);
            R::from_parts(id, fields)
        }))
    }
}
