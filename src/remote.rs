use anyhow::{Context, Result};

use crate::model::{Message, Session};

mod completion;
mod execution;
mod http_client;
mod types;

pub use self::completion::CompletionOutcome;
pub use self::execution::Execution;
pub use self::types::*;

/// Client for the shell service's `complete` and `execute` endpoints.
///
/// Requests are never retried or cancelled; a caller that needs
/// single-flight behaviour has to enforce it itself.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jcrsh/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
