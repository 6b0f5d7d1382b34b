//! Graph database access for platform verification.
//!
//! This crate wraps the Bolt connection to the platform's Neo4j instance,
//! defines the schema constants and the `Organisation` record model, and
//! exposes the smoke checks run against a freshly seeded database.

pub mod checks;
pub mod models;
pub mod schema;
pub mod store;
