//! Newsletter subscriber model.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: DbId,
    pub email: String,
    pub date: Timestamp,
}

/// DTO for a newsletter signup. Other body fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscribe {
    pub email: String,
}

impl Record for NewsletterSubscriber {
    fn id(&self) -> DbId {
        self.id
    }
}
