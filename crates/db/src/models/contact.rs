//! Contact form submission model.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{passthrough, text_field, Extra, Record};

/// A contact form submission. Everything but `id` and `date` is free-form,
/// `fullname` included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: DbId,
    pub date: Timestamp,
    #[serde(flatten)]
    pub fields: Extra,
}

impl Contact {
    pub fn fullname(&self) -> Option<&str> {
        text_field(&self.fields, "fullname")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub fullname: String,
    #[serde(flatten)]
    pub fields: Extra,
}

impl CreateContact {
    pub(crate) fn into_contact(self, id: DbId, date: Timestamp) -> Contact {
        let mut fields = passthrough(self.fields);
        fields.insert("fullname".into(), Value::String(self.fullname));
        Contact { id, date, fields }
    }
}

impl Record for Contact {
    fn id(&self) -> DbId {
        self.id
    }
}
