//! Access to the remote exam-generator API.
//!
//! The API owns every record; this module holds the transport, the
//! generic CRUD surface, and the translation of failure responses into
//! the crate's error taxonomy.

mod client;
pub use client::Client;

mod error;
pub use error::{Error, Result};

/// Entity descriptors for the generic CRUD client.
pub mod resource;
pub use resource::{NamedResource, Resource, WritableResource};
