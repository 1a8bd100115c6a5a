//! Repository for the `projects` collection.

use chrono::Utc;
use folio_core::activity::ActivityEvent;
use folio_core::types::DbId;

use crate::models::document::Document;
use crate::models::next_id_in;
use crate::models::project::{CreateProject, Project};
use crate::repositories::ActivityRepo;

/// Provides list/create/delete for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in insertion order.
    pub fn list(doc: &Document) -> &[Project] {
        &doc.projects
    }

    /// Append a new project and record a "New Project Added" entry.
    pub fn create(doc: &mut Document, input: CreateProject) -> Project {
        let project = input.into_project(next_id_in(&doc.projects), Utc::now());
        doc.projects.push(project.clone());
        ActivityRepo::record(doc, ActivityEvent::ProjectAdded, project.name().unwrap_or_default());
        project
    }

    /// Remove a project, recording a "Project Deleted" entry.
    ///
    /// Returns `None` (and leaves the document untouched) if no project has
    /// the given `id`.
    pub fn delete(doc: &mut Document, id: DbId) -> Option<Project> {
        let index = doc.projects.iter().position(|p| p.id == id)?;
        let removed = doc.projects.remove(index);
        ActivityRepo::record(
            doc,
            ActivityEvent::ProjectDeleted,
            removed.name().unwrap_or_default(),
        );
        Some(removed)
    }
}
