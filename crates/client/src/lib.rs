//! # Jenkins Client
//!
//! Client library for the Jenkins HTTP management API, covering the system
//! credential store: a thin CRUD surface over the server's REST/XML
//! endpoints.
//!
//! Every operation is a single or short fixed sequence of HTTP requests:
//! build URL, issue request, inspect response, return or fail. There is no
//! retry, caching, or concurrency coordination; the only state is the
//! underlying HTTP connection pool.
//!
//! ```no_run
//! use jenkins_client::Jenkins;
//!
//! # async fn run() -> jenkins_client::Result<()> {
//! let jenkins = Jenkins::builder()
//!     .base_url("https://ci.example.com")
//!     .username("admin")
//!     .api_token("api-token")
//!     .build()?;
//!
//! let credentials = jenkins.list_system_credentials().await?;
//! # let _ = credentials;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod http;

pub use client::{Jenkins, JenkinsBuilder};
pub use credentials::get_tag_text;
pub use jenkins_domain::{JenkinsConfig, JenkinsError, Result};
