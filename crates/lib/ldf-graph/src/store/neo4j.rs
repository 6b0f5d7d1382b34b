use std::{error::Error, fmt, sync::Arc};

use neo4rs::{Graph, Node, query};
use tracing::debug;

use crate::models::Organisation;
use crate::schema::{LABEL_ORGANISATION, PROP_ID};

#[derive(Debug)]
pub enum StoreError {
    Neo4j(Box<neo4rs::Error>),
    InvalidRecord(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neo4j(err) => write!(f, "Neo4j error: {err}"),
            Self::InvalidRecord(message) => write!(f, "Invalid record: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        Self::Neo4j(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle on the Bolt connection pool.
///
/// The pool is closed when the last clone drops, so callers get the
/// released-on-every-exit-path guarantee without explicit teardown.
pub struct GraphStore {
    graph: Arc<Graph>,
}

impl Clone for GraphStore {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl GraphStore {
    /// Opens a connection pool against the given Bolt endpoint.
    ///
    /// # Errors
    /// Returns `StoreError` if the endpoint is unreachable or the
    /// credentials are rejected.
    pub async fn connect(uri: &str, user: &str, password: &str) -> StoreResult<Self> {
        debug!("connecting to {uri}");
        let graph = Graph::new(uri, user, password).await?;
        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Round-trips a trivial query to prove the endpoint is reachable and
    /// the session authenticated.
    ///
    /// # Errors
    /// Returns `StoreError` if the round-trip fails.
    pub async fn ping(&self) -> StoreResult<()> {
        self.graph.run(query("RETURN 1")).await?;
        Ok(())
    }

    /// Counts every node in the database.
    ///
    /// # Errors
    /// Returns `StoreError` if the query fails or yields no scalar.
    pub async fn count_nodes(&self) -> StoreResult<i64> {
        let mut rows = self
            .graph
            .execute(query("MATCH (n) RETURN count(n) AS count"))
            .await?;
        let Some(row) = rows.next().await? else {
            return Err(StoreError::InvalidRecord(
                "count query returned no row".to_string(),
            ));
        };
        row.get("count")
            .map_err(|err| StoreError::InvalidRecord(err.to_string()))
    }

    /// Fetches one organisation by its stable identifier.
    ///
    /// # Errors
    /// Returns `StoreError` if the query fails or the node's attributes
    /// cannot be deserialized.
    pub async fn get_organisation(&self, org_id: &str) -> StoreResult<Option<Organisation>> {
        let cypher = format!("MATCH (n:{LABEL_ORGANISATION} {{{PROP_ID}: $org_id}}) RETURN n LIMIT 1");
        debug!("running query: {cypher}");
        let mut rows = self
            .graph
            .execute(query(&cypher).param("org_id", org_id))
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let node: Node = row
            .get("n")
            .map_err(|err| StoreError::InvalidRecord(err.to_string()))?;
        let organisation = node
            .to::<Organisation>()
            .map_err(|err| StoreError::InvalidRecord(err.to_string()))?;
        Ok(Some(organisation))
    }
}
