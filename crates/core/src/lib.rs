//! Domain primitives for the portfolio content backend.
//!
//! Nothing in this crate touches the filesystem or the network; it holds the
//! shared id/timestamp types, the domain error, the id allocator and the
//! catalogue of activity feed events.

pub mod activity;
pub mod error;
pub mod ids;
pub mod types;
