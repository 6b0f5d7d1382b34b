use serde::Deserialize;

/// Organisation node as stored in the platform graph.
///
/// Only the attributes the verification checks care about are mapped;
/// anything else on the node is ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Organisation {
    #[serde(rename = "Id")]
    pub org_id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}
