//! Repository implementations using MongoDB

pub mod mongo_record_repository;

pub use mongo_record_repository::{MongoRecordRepository, parse_record_id};
