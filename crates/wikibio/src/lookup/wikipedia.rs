use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::WikipediaConfig;

use super::source::{ArticleSource, SourceError};

/// HTTP implementation of [`ArticleSource`] over the MediaWiki action API.
/// One GET per lookup; only format version 2 (the flattened `query.pages`
/// array) is understood by the response model.
pub struct WikipediaClient {
    http: reqwest::Client,
    config: WikipediaConfig,
}

impl WikipediaClient {
    const USER_AGENT: &'static str = concat!("wikibio/", env!("CARGO_PKG_VERSION"));
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(config: WikipediaConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(Self::USER_AGENT)
            .build()
            .map_err(map_error)?;

        Ok(Self { http, config })
    }
}

impl std::fmt::Debug for WikipediaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikipediaClient")
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn fetch_by_title(&self, title: &str) -> Result<Option<String>, SourceError> {
        let rvlimit = self.config.revision_limit.to_string();
        let formatversion = self.config.format_version.to_string();

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "revisions"),
                ("titles", title),
                ("rvprop", "content"),
                ("rvlimit", rvlimit.as_str()),
                ("formatversion", formatversion.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(map_error)?;

        if !response.status().is_success() {
            return Err(SourceError::Request(format!(
                "unexpected status {} from content source",
                response.status()
            )));
        }

        let body = response.json::<QueryResponse>().await.map_err(map_error)?;
        Ok(body.newest_content())
    }
}

fn map_error(err: reqwest::Error) -> SourceError {
    if err.is_decode() {
        SourceError::Payload(err.to_string())
    } else {
        SourceError::Request(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<PageRevisions>,
}

#[derive(Debug, Deserialize)]
struct PageRevisions {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    content: Option<String>,
}

impl QueryResponse {
    /// Newest revision content of the first returned page. A missing query
    /// block, empty page list, `missing` page, empty revision list, or
    /// revision without content all collapse to "no article".
    fn newest_content(self) -> Option<String> {
        self.query?
            .pages
            .into_iter()
            .next()
            .filter(|page| !page.missing)
            .and_then(|page| page.revisions.into_iter().next())
            .and_then(|revision| revision.content)
    }
}
