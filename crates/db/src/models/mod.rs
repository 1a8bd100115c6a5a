//! Entity models and DTOs for every collection in the document.
//!
//! Projects, clients and contacts are open records. The server owns `id` and
//! `date`; every other field is stored exactly as the creating body sent it,
//! so any document on disk parses whatever shapes those fields take. The
//! create DTOs require a single key field (`name` or `fullname`).

pub mod activity;
pub mod client;
pub mod contact;
pub mod document;
pub mod newsletter;
pub mod project;

use folio_core::ids::next_id;
use folio_core::types::DbId;
use serde_json::{Map, Value};

/// Passthrough fields carried by open records.
pub type Extra = Map<String, Value>;

/// Keys owned by the server; a body can never set them through passthrough.
const RESERVED_KEYS: [&str; 2] = ["id", "date"];

/// A record with a per-collection integer id.
pub trait Record {
    fn id(&self) -> DbId;
}

/// Next id for `items`, see [`next_id`].
pub fn next_id_in<T: Record>(items: &[T]) -> DbId {
    next_id(items.iter().map(Record::id))
}

/// A string field of an open record. Missing, null and non-string values
/// read as `None`.
pub(crate) fn text_field<'a>(fields: &'a Extra, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// Drop server-owned keys from a body's passthrough fields.
pub(crate) fn passthrough(mut extra: Extra) -> Extra {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
    extra
}
