//! Repositories: pure mutations of an in-memory [`Document`].
//!
//! Repositories never touch storage. Callers load the document, call one or
//! more repository methods and persist the result, normally through
//! [`Database::transact`](crate::Database::transact). Every mutation also
//! records its activity feed entry.
//!
//! [`Document`]: crate::models::document::Document

pub mod activity_repo;
pub mod client_repo;
pub mod contact_repo;
pub mod newsletter_repo;
pub mod project_repo;

pub use activity_repo::ActivityRepo;
pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;
pub use newsletter_repo::NewsletterRepo;
pub use project_repo::ProjectRepo;
