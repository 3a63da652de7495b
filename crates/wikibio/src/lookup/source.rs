use async_trait::async_trait;

/// Content-source abstraction so the lookup pipeline can run against test
/// doubles instead of a live encyclopedia endpoint.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the raw wikitext of the newest revision stored under a
    /// canonical title. `Ok(None)` means no article (or no revision
    /// content) exists under that title.
    async fn fetch_by_title(&self, title: &str) -> Result<Option<String>, SourceError>;
}

/// Content-source failures. Both variants surface to callers as a
/// service-unavailable outcome, never as a missing article.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("content source request failed: {0}")]
    Request(String),
    #[error("content source returned an unreadable payload: {0}")]
    Payload(String),
}
