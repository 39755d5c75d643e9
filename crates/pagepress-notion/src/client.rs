//! Notion REST API client.
//!
//! Sync HTTP client for the Notion API with bearer-token authentication
//! and the fixed API version header.

use std::time::Duration;

use tracing::info;
use ureq::Agent;

use crate::error::NotionError;
use crate::types::{AppendChildrenRequest, BlockObject};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Notion API version header value.
const NOTION_VERSION: &str = "2022-06-28";

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client for the given API base URL and integration token.
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        }
    }

    /// Append block children to a page.
    ///
    /// Issues one `PATCH /v1/blocks/{page_id}/children` request carrying
    /// the given blocks. Exactly HTTP 200 is success; any other status is
    /// surfaced as [`NotionError::HttpResponse`] with the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::HttpRequest`] on transport failure and
    /// [`NotionError::HttpResponse`] on a non-200 status.
    pub fn append_block_children(
        &self,
        page_id: &str,
        children: &[BlockObject],
    ) -> Result<(), NotionError> {
        let url = format!("{}/v1/blocks/{}/children", self.base_url, page_id);

        info!("Appending {} blocks to page {}", children.len(), page_id);

        let response = self
            .agent
            .patch(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .header("Content-Type", "application/json")
            .send_json(AppendChildrenRequest { children })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(NotionError::HttpResponse { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = NotionClient::new("https://api.notion.com/", "secret");
        assert_eq!(client.base_url, "https://api.notion.com");
    }
}
