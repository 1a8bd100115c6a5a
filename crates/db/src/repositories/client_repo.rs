//! Repository for the `clients` collection.

use chrono::Utc;
use folio_core::activity::ActivityEvent;
use folio_core::types::DbId;

use crate::models::client::{Client, CreateClient};
use crate::models::document::Document;
use crate::models::next_id_in;
use crate::repositories::ActivityRepo;

/// Provides list/create/delete for client testimonials.
pub struct ClientRepo;

impl ClientRepo {
    pub fn list(doc: &Document) -> &[Client] {
        &doc.clients
    }

    pub fn create(doc: &mut Document, input: CreateClient) -> Client {
        let client = input.into_client(next_id_in(&doc.clients), Utc::now());
        doc.clients.push(client.clone());
        ActivityRepo::record(doc, ActivityEvent::ClientAdded, client.name().unwrap_or_default());
        client
    }

    /// Returns `None` if no client has the given `id`.
    pub fn delete(doc: &mut Document, id: DbId) -> Option<Client> {
        let index = doc.clients.iter().position(|c| c.id == id)?;
        let removed = doc.clients.remove(index);
        ActivityRepo::record(
            doc,
            ActivityEvent::ClientDeleted,
            removed.name().unwrap_or_default(),
        );
        Some(removed)
    }
}
