//! The persisted document: every collection of the site in one value.

use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::client::Client;
use super::contact::Contact;
use super::newsletter::NewsletterSubscriber;
use super::project::Project;

/// Root of the JSON file. Field order here is the key order on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Newest first.
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Newest first.
    #[serde(default)]
    pub newsletter: Vec<NewsletterSubscriber>,
    /// Newest first.
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
}
