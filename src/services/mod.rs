pub mod contact_service;

pub use contact_service::{ContactRouting, relay_contact_message};
