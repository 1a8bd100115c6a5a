//! Sample content written on first startup when no document exists.

use folio_core::types::DbId;
use serde_json::Value;

use crate::models::activity::ActivityEntry;
use crate::models::client::Client;
use crate::models::document::Document;
use crate::models::project::Project;
use crate::models::Extra;

fn text_fields<const N: usize>(pairs: [(&str, &str); N]) -> Extra {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::from(value)))
        .collect()
}

fn project(
    id: DbId,
    name: &str,
    description: &str,
    image: &str,
    category: &str,
    location: &str,
) -> Project {
    Project {
        id,
        date: None,
        fields: text_fields([
            ("name", name),
            ("description", description),
            ("image", image),
            ("category", category),
            ("location", location),
        ]),
    }
}

fn client(id: DbId, name: &str, designation: &str, description: &str, image: &str) -> Client {
    Client {
        id,
        date: None,
        fields: text_fields([
            ("name", name),
            ("designation", designation),
            ("description", description),
            ("image", image),
        ]),
    }
}

fn activity(id: DbId, icon: &str, title: &str, description: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        id,
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
        time: time.into(),
    }
}

/// Three sample projects, three sample clients, empty contacts and
/// newsletter, three sample activity entries.
pub fn seed_document() -> Document {
    Document {
        projects: vec![
            project(
                1,
                "E-commerce Platform",
                "A full-featured e-commerce platform with payment integration and inventory management.",
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Design & Development",
                "Remote",
            ),
            project(
                2,
                "Healthcare App",
                "Mobile application for healthcare providers to manage patient records and appointments.",
                "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Mobile Development",
                "New York",
            ),
            project(
                3,
                "Corporate Website",
                "A responsive corporate website with CMS integration and SEO optimization.",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Web Design",
                "San Francisco",
            ),
        ],
        clients: vec![
            client(
                1,
                "Rowhan Smith",
                "CEO, Feverbearer",
                "Working with Flipr Digital was a game-changer for our business. Their team delivered exceptional results.",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ),
            client(
                2,
                "Shijpa Kayak",
                "Brand Designer",
                "The design team at Flipr Digital is incredibly talented. They understood our vision perfectly.",
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ),
            client(
                3,
                "John Lepore",
                "CEO, TechSolutions",
                "Their marketing strategies increased our conversion rate by 40% in just three months.",
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ),
        ],
        contacts: Vec::new(),
        newsletter: Vec::new(),
        activity: vec![
            activity(
                1,
                "fa-project-diagram",
                "New Project Added",
                "E-commerce Platform project was added to the portfolio",
                "2 hours ago",
            ),
            activity(
                2,
                "fa-users",
                "New Client Added",
                "Rowhan Smith was added to happy clients",
                "1 day ago",
            ),
            activity(
                3,
                "fa-envelope",
                "New Contact Form Submission",
                "John Doe submitted a contact form",
                "2 days ago",
            ),
        ],
    }
}
