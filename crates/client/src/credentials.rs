//! System credential store operations
//!
//! CRUD surface over `credentials/store/system/domain/_`. Credentials are
//! identified by a string id, stored remotely as XML configuration documents,
//! and projected to JSON for read operations. All ids are percent-encoded
//! before they are placed in a URL.
//!
//! The server is the only source of truth: every operation issues its own
//! lookups, and mutations are verified with a follow-up lookup rather than
//! trusting the mutation response.

use jenkins_domain::constants::{SYSTEM_DOMAIN, SYSTEM_STORE_ROOT};
use jenkins_domain::{CredentialListing, CredentialSummary, JenkinsError, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::client::Jenkins;

fn credential_info_path(id: &str) -> String {
    format!(
        "{SYSTEM_STORE_ROOT}/domain/{SYSTEM_DOMAIN}/credential/{}/api/json?depth=0",
        urlencoding::encode(id)
    )
}

fn credential_config_path(id: &str) -> String {
    format!(
        "{SYSTEM_STORE_ROOT}/domain/{SYSTEM_DOMAIN}/credential/{}/config.xml",
        urlencoding::encode(id)
    )
}

fn create_credentials_path() -> String {
    format!("{SYSTEM_STORE_ROOT}/domain/{SYSTEM_DOMAIN}/createCredentials")
}

fn list_credentials_path() -> String {
    format!("{SYSTEM_STORE_ROOT}/domain/{SYSTEM_DOMAIN}/api/json?tree=credentials[id]")
}

fn missing_credential(id: &str) -> String {
    format!("credential[{id}] does not exist in domain[{SYSTEM_DOMAIN}] of the system store")
}

/// Extract the trimmed text content of `tag` from an XML configuration
/// document.
///
/// # Errors
/// Returns `JenkinsError::InvalidTag` if the document is malformed, the tag
/// is absent, or its text is empty or whitespace-only.
pub fn get_tag_text(tag: &str, config_xml: &str) -> Result<String> {
    let document = roxmltree::Document::parse(config_xml)
        .map_err(|err| JenkinsError::InvalidTag(format!("tag[{tag}] is invalidated: {err}")))?;

    document
        .descendants()
        .find(|node| node.has_tag_name(tag))
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| JenkinsError::InvalidTag(format!("tag[{tag}] is invalidated")))
}

impl Jenkins {
    /// Fetch the JSON projection of a system credential.
    ///
    /// # Errors
    /// - `JenkinsError::NotFound` if the credential does not exist or the
    ///   server returned an empty body
    /// - `JenkinsError::Parse` if the body is not valid JSON
    pub async fn get_system_credential_info(&self, id: &str) -> Result<Value> {
        match self.get_text(&credential_info_path(id)).await {
            Ok(body) => {
                if body.trim().is_empty() {
                    return Err(JenkinsError::NotFound(missing_credential(id)));
                }
                serde_json::from_str(&body).map_err(|_| {
                    JenkinsError::Parse(format!(
                        "could not parse JSON info for credential[{id}] \
                         in domain[{SYSTEM_DOMAIN}] of the system store"
                    ))
                })
            }
            Err(JenkinsError::NotFound(_)) => Err(JenkinsError::NotFound(missing_credential(id))),
            Err(err) => Err(err),
        }
    }

    /// Fail with the "does not exist" error unless the credential resolves.
    pub async fn assert_system_credential_exists(&self, id: &str) -> Result<()> {
        self.get_system_credential_info(id).await.map(|_| ())
    }

    /// Check whether a system credential exists.
    ///
    /// A not-found lookup is `Ok(false)`; a successful lookup that resolves
    /// the requested id is `Ok(true)`. Other failures propagate.
    pub async fn system_credential_exists(&self, id: &str) -> Result<bool> {
        match self.get_system_credential_info(id).await {
            Ok(info) => {
                let summary: CredentialSummary = serde_json::from_value(info).map_err(|_| {
                    JenkinsError::Parse(format!(
                        "could not parse JSON info for credential[{id}] \
                         in domain[{SYSTEM_DOMAIN}] of the system store"
                    ))
                })?;
                Ok(summary.id == id)
            }
            Err(JenkinsError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Fetch the raw XML configuration of a system credential.
    pub async fn get_system_credential_config(&self, id: &str) -> Result<String> {
        self.get_text(&credential_config_path(id)).await
    }

    /// Create a system credential from its XML configuration document.
    ///
    /// The credential id is taken from the `<id>` tag of the document. The
    /// create is refused before any mutation if the id already exists, and
    /// verified with a follow-up lookup afterwards.
    ///
    /// # Errors
    /// - `JenkinsError::InvalidTag` if the document carries no usable id
    /// - `JenkinsError::AlreadyExists` if the id is already taken
    /// - `JenkinsError::CreateFailed` if the credential does not resolve
    ///   after the create request
    pub async fn create_system_credential(&self, config_xml: &str) -> Result<()> {
        let id = get_tag_text("id", config_xml)?;
        debug!(credential = %id, "creating system credential");

        if self.system_credential_exists(&id).await? {
            return Err(JenkinsError::AlreadyExists(format!(
                "credential[{id}] already exists in domain[{SYSTEM_DOMAIN}] of the system store"
            )));
        }

        self.post_xml(&create_credentials_path(), config_xml).await?;

        match self.assert_system_credential_exists(&id).await {
            Ok(()) => {
                info!(credential = %id, "created system credential");
                Ok(())
            }
            Err(_) => Err(JenkinsError::CreateFailed(format!(
                "create[{id}] failed in domain[{SYSTEM_DOMAIN}] of the system store"
            ))),
        }
    }

    /// Delete a system credential and verify it is gone.
    ///
    /// # Errors
    /// Returns `JenkinsError::DeleteFailed` if the credential still resolves
    /// after the delete request.
    pub async fn delete_system_credential(&self, id: &str) -> Result<()> {
        debug!(credential = %id, "deleting system credential");
        self.delete(&credential_config_path(id)).await?;

        if self.system_credential_exists(id).await? {
            return Err(JenkinsError::DeleteFailed(format!(
                "delete of credential[{id}] from domain[{SYSTEM_DOMAIN}] \
                 of the system store failed"
            )));
        }

        info!(credential = %id, "deleted system credential");
        Ok(())
    }

    /// Replace the XML configuration of an existing system credential.
    ///
    /// The credential id is taken from the `<id>` tag of the document; the
    /// credential must already exist.
    pub async fn reconfig_system_credential(&self, config_xml: &str) -> Result<()> {
        let id = get_tag_text("id", config_xml)?;
        debug!(credential = %id, "reconfiguring system credential");

        self.assert_system_credential_exists(&id).await?;
        self.post_xml(&credential_config_path(&id), config_xml).await?;

        info!(credential = %id, "reconfigured system credential");
        Ok(())
    }

    /// List the system credentials in the domain.
    ///
    /// Returns the server's `credentials` array verbatim.
    pub async fn list_system_credentials(&self) -> Result<Vec<Value>> {
        let body = self.get_text(&list_credentials_path()).await?;
        let listing: CredentialListing = serde_json::from_str(&body).map_err(|_| {
            JenkinsError::Parse(format!(
                "could not parse credential listing for domain[{SYSTEM_DOMAIN}] \
                 of the system store"
            ))
        })?;
        Ok(listing.credentials)
    }
}
