//! Response-shape types for the credential store API
//!
//! The server's JSON views are returned to callers verbatim as
//! `serde_json::Value`; these structs only validate the shape where an
//! operation depends on it.

use serde::Deserialize;
use serde_json::Value;

/// Minimal projection of a credential, used to confirm a lookup resolved
/// the id that was asked for.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSummary {
    pub id: String,
}

/// Tree-filtered listing returned by the store's `api/json` view.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialListing {
    #[serde(default)]
    pub credentials: Vec<Value>,
}
