//! User CRUD service library.
//!
//! A minimal HTTP service managing a single user resource over an in-memory
//! store, arranged hexagonally: the [`domain`] core is transport agnostic,
//! [`inbound`] adapts HTTP onto it, and [`outbound`] implements its
//! persistence port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
