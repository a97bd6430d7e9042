pub mod contact;
pub mod project;
pub mod skill;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use contact::{ContactMessage, ContactRequest, ContactValidationError};
pub use project::{Project, ProjectInput};
pub use skill::{Skill, SkillInput};

/// A record kind kept in its own document collection.
///
/// `Fields` is everything except the identifier: what a client sends on
/// create and update, and what the store keeps alongside `_id`.
pub trait Record: Serialize + Clone + Send + Sync + Unpin + 'static {
    type Fields: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static;

    /// Collection name in the document store
    const COLLECTION: &'static str;
    /// Capitalized singular, used in response messages ("Project not found")
    const SINGULAR: &'static str;
    /// Lowercase plural, used in response messages ("No projects found")
    const PLURAL: &'static str;

    fn from_parts(id: String, fields: Self::Fields) -> Self;
}

/// Read an optional text field from a loosely typed body.
///
/// Numbers and booleans are kept as their JSON text, `null` counts as absent,
/// and arrays or objects are stored as compact JSON.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
