//! Repository for the `activity` collection.

use folio_core::activity::{ActivityEvent, JUST_NOW, RECENT_ACTIVITY_LIMIT};

use crate::models::activity::ActivityEntry;
use crate::models::document::Document;
use crate::models::next_id_in;

/// Appends and reads activity feed entries.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Prepend an entry for `event` about `subject`, returning a copy of it.
    ///
    /// Must run inside the same read-modify-write cycle as the mutation it
    /// describes.
    pub fn record(doc: &mut Document, event: ActivityEvent, subject: &str) -> ActivityEntry {
        let entry = ActivityEntry {
            id: next_id_in(&doc.activity),
            icon: event.icon().to_string(),
            title: event.title().to_string(),
            description: event.describe(subject),
            time: JUST_NOW.to_string(),
        };
        doc.activity.insert(0, entry.clone());
        entry
    }

    /// The most recently recorded entries, newest first.
    pub fn recent(doc: &Document) -> &[ActivityEntry] {
        let end = doc.activity.len().min(RECENT_ACTIVITY_LIMIT);
        &doc.activity[..end]
    }
}
