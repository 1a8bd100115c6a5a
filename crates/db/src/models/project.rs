//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{passthrough, text_field, Extra, Record};

/// A portfolio project stored in the `projects` collection.
///
/// Only `id` and `date` are owned by the server. The documented fields
/// (`name`, `description`, `image`, `category`, `location`) live in `fields`
/// together with anything else the creating body carried, stored as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    /// Set on creation. Seed projects have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(flatten)]
    pub fields: Extra,
}

impl Project {
    pub fn name(&self) -> Option<&str> {
        text_field(&self.fields, "name")
    }
}

/// DTO for creating a new project. Only `name` is required; every other
/// field is kept verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(flatten)]
    pub fields: Extra,
}

impl CreateProject {
    pub(crate) fn into_project(self, id: DbId, date: Timestamp) -> Project {
        let mut fields = passthrough(self.fields);
        fields.insert("name".into(), Value::String(self.name));
        Project {
            id,
            date: Some(date),
            fields,
        }
    }
}

impl Record for Project {
    fn id(&self) -> DbId {
        self.id
    }
}
