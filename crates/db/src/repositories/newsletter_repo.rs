//! Repository for the `newsletter` collection. Append-only, unique emails.

use chrono::Utc;
use folio_core::activity::ActivityEvent;
use folio_core::error::CoreError;

use crate::models::document::Document;
use crate::models::newsletter::{NewsletterSubscriber, Subscribe};
use crate::models::next_id_in;
use crate::repositories::ActivityRepo;

pub const ALREADY_SUBSCRIBED: &str = "Email already subscribed";

pub struct NewsletterRepo;

impl NewsletterRepo {
    /// All subscribers, newest first.
    pub fn list(doc: &Document) -> &[NewsletterSubscriber] {
        &doc.newsletter
    }

    /// Add a subscriber at the front of the collection.
    ///
    /// Emails are compared exactly (case-sensitive). A duplicate yields
    /// [`CoreError::Conflict`] and leaves the document untouched.
    pub fn subscribe(
        doc: &mut Document,
        input: Subscribe,
    ) -> Result<NewsletterSubscriber, CoreError> {
        if doc.newsletter.iter().any(|s| s.email == input.email) {
            return Err(CoreError::Conflict(ALREADY_SUBSCRIBED.into()));
        }

        let subscriber = NewsletterSubscriber {
            id: next_id_in(&doc.newsletter),
            email: input.email,
            date: Utc::now(),
        };
        doc.newsletter.insert(0, subscriber.clone());
        ActivityRepo::record(doc, ActivityEvent::NewsletterSubscribed, &subscriber.email);
        Ok(subscriber)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn email(addr: &str) -> Subscribe {
        Subscribe { email: addr.into() }
    }

    #[test]
    fn duplicate_is_rejected_without_mutation() {
        let mut doc = Document::default();
        NewsletterRepo::subscribe(&mut doc, email("a@x.com")).unwrap();
        let before = doc.clone();

        let err = NewsletterRepo::subscribe(&mut doc, email("a@x.com")).unwrap_err();
        assert_matches!(err, CoreError::Conflict(msg) if msg == "Email already subscribed");
        assert_eq!(doc, before);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut doc = Document::default();
        NewsletterRepo::subscribe(&mut doc, email("a@x.com")).unwrap();
        let second = NewsletterRepo::subscribe(&mut doc, email("A@x.com")).unwrap();

        assert_eq!(second.id, 2);
        assert_eq!(NewsletterRepo::list(&doc)[0].email, "A@x.com");
        assert_eq!(
            doc.activity[0].description,
            "A@x.com subscribed to the newsletter"
        );
    }
}
