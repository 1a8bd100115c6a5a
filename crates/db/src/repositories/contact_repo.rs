//! Repository for the `contacts` collection. Append-only.

use chrono::Utc;
use folio_core::activity::ActivityEvent;

use crate::models::contact::{Contact, CreateContact};
use crate::models::document::Document;
use crate::models::next_id_in;
use crate::repositories::ActivityRepo;

pub struct ContactRepo;

impl ContactRepo {
    /// All submissions, newest first.
    pub fn list(doc: &Document) -> &[Contact] {
        &doc.contacts
    }

    /// Store a submission at the front of the collection.
    pub fn submit(doc: &mut Document, input: CreateContact) -> Contact {
        let contact = input.into_contact(next_id_in(&doc.contacts), Utc::now());
        doc.contacts.insert(0, contact.clone());
        ActivityRepo::record(
            doc,
            ActivityEvent::ContactSubmitted,
            contact.fullname().unwrap_or_default(),
        );
        contact
    }
}
