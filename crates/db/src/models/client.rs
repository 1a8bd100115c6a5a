//! Client testimonial model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{passthrough, text_field, Extra, Record};

/// A happy-client testimonial stored in the `clients` collection.
///
/// `name`, `designation`, `description` and `image` are kept in `fields`
/// as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(flatten)]
    pub fields: Extra,
}

impl Client {
    pub fn name(&self) -> Option<&str> {
        text_field(&self.fields, "name")
    }
}

/// DTO for creating a new client. Only `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    #[serde(flatten)]
    pub fields: Extra,
}

impl CreateClient {
    pub(crate) fn into_client(self, id: DbId, date: Timestamp) -> Client {
        let mut fields = passthrough(self.fields);
        fields.insert("name".into(), Value::String(self.name));
        Client {
            id,
            date: Some(date),
            fields,
        }
    }
}

impl Record for Client {
    fn id(&self) -> DbId {
        self.id
    }
}
