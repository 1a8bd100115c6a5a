//! Activity feed entry model.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: DbId,
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Display string such as `"Just now"`, not a timestamp.
    pub time: String,
}

impl Record for ActivityEntry {
    fn id(&self) -> DbId {
        self.id
    }
}
