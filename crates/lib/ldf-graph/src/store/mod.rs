//! Store interface over the Bolt driver.
//!
//! The store layer owns the connection pool and the Cypher queries; the
//! checks layer interprets what comes back.

pub mod neo4j;

pub use neo4j::{GraphStore, StoreError, StoreResult};
