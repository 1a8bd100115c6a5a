//! Activity feed event catalogue.
//!
//! Every successful mutation appends one entry to the activity feed. The
//! icon, title and description wording for each kind of mutation is fixed
//! here so the admin dashboard renders a consistent feed.

/// Display string stored in `time` for freshly recorded entries.
pub const JUST_NOW: &str = "Just now";

/// Number of entries returned by the activity feed endpoint.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Icon identifiers understood by the frontend (Font Awesome class names).
pub mod icons {
    pub const PROJECT: &str = "fa-project-diagram";
    pub const CLIENT: &str = "fa-users";
    pub const CONTACT: &str = "fa-envelope";
    pub const NEWSLETTER: &str = "fa-newspaper";
}

/// The kinds of mutation that produce an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    ProjectAdded,
    ProjectDeleted,
    ClientAdded,
    ClientDeleted,
    ContactSubmitted,
    NewsletterSubscribed,
}

impl ActivityEvent {
    pub fn icon(self) -> &'static str {
        match self {
            Self::ProjectAdded | Self::ProjectDeleted => icons::PROJECT,
            Self::ClientAdded | Self::ClientDeleted => icons::CLIENT,
            Self::ContactSubmitted => icons::CONTACT,
            Self::NewsletterSubscribed => icons::NEWSLETTER,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ProjectAdded => "New Project Added",
            Self::ProjectDeleted => "Project Deleted",
            Self::ClientAdded => "New Client Added",
            Self::ClientDeleted => "Client Deleted",
            Self::ContactSubmitted => "New Contact Form Submission",
            Self::NewsletterSubscribed => "New Newsletter Subscriber",
        }
    }

    /// Human-readable description naming the affected record.
    ///
    /// `subject` is the project/client name, the contact's full name or the
    /// subscriber's email, depending on the event.
    pub fn describe(self, subject: &str) -> String {
        match self {
            Self::ProjectAdded => format!("{subject} was added to the portfolio"),
            Self::ProjectDeleted => format!("{subject} was removed from the portfolio"),
            Self::ClientAdded => format!("{subject} was added to happy clients"),
            Self::ClientDeleted => format!("{subject} was removed from happy clients"),
            Self::ContactSubmitted => format!("{subject} submitted a contact form"),
            Self::NewsletterSubscribed => format!("{subject} subscribed to the newsletter"),
        }
    }
}
