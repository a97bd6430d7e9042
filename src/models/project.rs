use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Portfolio project as stored and returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Store-assigned identifier (24-char hex ObjectId)
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Body of `POST /projects` and `PUT /projects/:id`, taken verbatim.
/// Fields left out of a PUT are removed from the stored record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectInput {
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Record for Project {
    type Fields = ProjectInput;

    const COLLECTION: &'static str = "projects";
    const SINGULAR: &'static str = "Project";
    const PLURAL: &'static str = "projects";

    fn from_parts(id: String, fields: ProjectInput) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            link: fields.link,
        }
    }
}
