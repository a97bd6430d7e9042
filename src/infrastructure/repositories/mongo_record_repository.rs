//! MongoDB implementation of RecordRepository
//!
//! One generic repository serves every record kind; the collection name
//! comes from `Record::COLLECTION`.

use std::marker::PhantomData;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DomainError, RecordRepository};
use crate::models::Record;

/// Document layout in the store: the ObjectId plus the record's fields
/// at the top level.
#[derive(Serialize, Deserialize)]
struct StoredRecord<F> {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    fields: F,
}

impl<F> StoredRecord<F> {
    fn into_record<R>(self) -> R
    where
        R: Record<Fields = F>,
    {
        R::from_parts(self.id.to_hex(), self.fields)
    }
}

/// MongoDB-based implementation of RecordRepository
pub struct MongoRecordRepository<R: Record> {
    collection: Collection<StoredRecord<R::Fields>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> MongoRecordRepository<R> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(R::COLLECTION),
            _record: PhantomData,
        }
    }
}

/// Parse a client-supplied identifier. Anything that is not a 24-char hex
/// ObjectId is a store error, reported like any other failed query.
pub fn parse_record_id<R: Record>(id: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id).map_err(|_| {
        DomainError::Store(format!(
            "Cast to ObjectId failed for value \"{}\" (type string) at path \"_id\" for model \"{}\"",
            id,
            R::SINGULAR
        ))
    })
}

#[async_trait]
impl<R: Record> RecordRepository<R> for MongoRecordRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, DomainError> {
        let cursor = self.collection.find(doc! {}).await?;
        let stored: Vec<StoredRecord<R::Fields>> = cursor.try_collect().await?;

        Ok(stored.into_iter().map(StoredRecord::into_record).collect())
    }

    async fn create(&self, fields: R::Fields) -> Result<R, DomainError> {
        let stored = StoredRecord {
            id: ObjectId::new(),
            fields,
        };

        self.collection.insert_one(&stored).await?;
        debug!(collection = R::COLLECTION, id = %stored.id, "Inserted record");

        Ok(stored.into_record())
    }

    async fn update_by_id(&self, id: &str, fields: R::Fields) -> Result<Option<R>, DomainError> {
        let oid = parse_record_id::<R>(id)?;

        let replacement = StoredRecord { id: oid, fields };
        let updated = self
            .collection
            .find_one_and_replace(doc! { "_id": oid }, &replacement)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(StoredRecord::into_record))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<R>, DomainError> {
        let oid = parse_record_id::<R>(id)?;

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?;

        Ok(deleted.map(StoredRecord::into_record))
    }
}
