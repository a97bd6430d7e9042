use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkillInput {
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,
    #[serde(
        deserialize_with = "super::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Record for Skill {
    type Fields = SkillInput;

    const COLLECTION: &'static str = "skills";
    const SINGULAR: &'static str = "Skill";
    const PLURAL: &'static str = "skills";

    fn from_parts(id: String, fields: SkillInput) -> Self {
        Self {
            id,
            name: fields.name,
            level: fields.level,
            description: fields.description,
        }
    }
}
