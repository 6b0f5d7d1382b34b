//! Smoke checks run against a seeded platform graph.

use std::{error::Error, fmt};

use crate::models::Organisation;
use crate::store::{GraphStore, StoreError};

/// Identifier of the organisation every seeded deployment carries.
pub const REFERENCE_ORG_ID: &str = "2153-12_dep_129";

/// Display name the reference organisation is seeded with.
pub const REFERENCE_ORG_NAME: &str = "Council of Legal Education";

#[derive(Debug)]
pub enum CheckError {
    Store(StoreError),
    NodeNotFound { org_id: String },
    NameMismatch { expected: &'static str, actual: String },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NodeNotFound { org_id } => {
                write!(f, "no node found with Id '{org_id}'")
            }
            Self::NameMismatch { expected, actual } => {
                write!(f, "node found but Name mismatch: expected '{expected}', got '{actual}'")
            }
        }
    }
}

impl Error for CheckError {}

impl From<StoreError> for CheckError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Looks up the reference organisation and validates its display name.
///
/// An unset `Name` attribute counts as a mismatch.
///
/// # Errors
/// Returns `CheckError::NodeNotFound` when the organisation is absent,
/// `CheckError::NameMismatch` when its `Name` differs from the seeded
/// value, and `CheckError::Store` when the lookup itself fails.
pub async fn verify_reference_organisation(store: &GraphStore) -> Result<Organisation, CheckError> {
    let Some(organisation) = store.get_organisation(REFERENCE_ORG_ID).await? else {
        return Err(CheckError::NodeNotFound {
            org_id: REFERENCE_ORG_ID.to_string(),
        });
    };
    match organisation.name.as_deref() {
        Some(REFERENCE_ORG_NAME) => Ok(organisation),
        Some(actual) => Err(CheckError::NameMismatch {
            expected: REFERENCE_ORG_NAME,
            actual: actual.to_string(),
        }),
        None => Err(CheckError::NameMismatch {
            expected: REFERENCE_ORG_NAME,
            actual: "<unset>".to_string(),
        }),
    }
}
