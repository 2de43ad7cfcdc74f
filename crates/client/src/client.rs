//! Jenkins API client plumbing
//!
//! Owns the base URL, authentication, and the translation of HTTP response
//! statuses into [`JenkinsError`] values. The credential store operations in
//! [`crate::credentials`] are built on the helpers here.

use std::time::Duration;

use jenkins_domain::{JenkinsConfig, JenkinsError, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::http::HttpClient;

const USER_AGENT: &str = concat!("jenkins-client/", env!("CARGO_PKG_VERSION"));

/// Client for the Jenkins management API.
pub struct Jenkins {
    config: JenkinsConfig,
    http: HttpClient,
}

impl Jenkins {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns `JenkinsError::Config` if the base URL is not a valid
    /// absolute URL or the HTTP transport cannot be constructed.
    pub fn new(config: JenkinsConfig) -> Result<Self> {
        let base = url::Url::parse(&config.base_url).map_err(|err| {
            JenkinsError::Config(format!("invalid base URL {}: {}", config.base_url, err))
        })?;
        if base.cannot_be_a_base() {
            return Err(JenkinsError::Config(format!(
                "base URL {} cannot carry request paths",
                config.base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, http })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> JenkinsBuilder {
        JenkinsBuilder::default()
    }

    /// Create a client from the environment/file configuration sources.
    ///
    /// See [`crate::config::loader`] for the loading strategy.
    pub fn from_env() -> Result<Self> {
        Self::new(crate::config::load()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &JenkinsConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.username {
            Some(user) => builder.basic_auth(user, self.config.api_token.as_deref()),
            None => builder,
        }
    }

    /// Issue a request and fail unless the response status is a success.
    async fn open(&self, method: Method, path: &str, body: Option<String>) -> Result<Response> {
        let url = self.url(path);
        debug!(%method, %url, "opening Jenkins endpoint");

        let mut request = self.apply_auth(self.http.request(method, &url));
        if let Some(body) = body {
            request = request.header("Content-Type", "text/xml; charset=utf-8").body(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &url, body))
    }

    /// GET a path and return the response body as text.
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.open(Method::GET, path, None).await?;
        response
            .text()
            .await
            .map_err(|err| JenkinsError::Network(format!("failed to read response body: {err}")))
    }

    /// POST an XML document to a path, discarding the response body.
    pub(crate) async fn post_xml(&self, path: &str, body: &str) -> Result<()> {
        self.open(Method::POST, path, Some(body.to_string())).await.map(|_| ())
    }

    /// DELETE a path, discarding the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.open(Method::DELETE, path, None).await.map(|_| ())
    }
}

fn map_status_error(status: StatusCode, url: &str, body: String) -> JenkinsError {
    let message = if body.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {body}")
    };

    if status == StatusCode::NOT_FOUND {
        JenkinsError::NotFound(message)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        JenkinsError::Auth(message)
    } else if status.is_server_error() {
        JenkinsError::Server(message)
    } else {
        JenkinsError::Network(message)
    }
}

/// Builder for [`Jenkins`]
#[derive(Default)]
pub struct JenkinsBuilder {
    config: JenkinsConfig,
}

impl JenkinsBuilder {
    /// Set the server base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the username for HTTP basic auth.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self
    }

    /// Set the API token paired with the username.
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.config.api_token = Some(api_token.into());
        self
    }

    /// Set the request timeout.
    ///
    /// The configuration stores whole seconds; sub-second values round up
    /// so a short timeout never collapses to zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs =
            timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `JenkinsError::Config` if the configuration is invalid.
    pub fn build(self) -> Result<Jenkins> {
        Jenkins::new(self.config)
    }
}
