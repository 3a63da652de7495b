use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wikibio::lookup::{ArticleSource, SourceError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory article source backing the offline demo and handler tests.
#[derive(Default, Clone)]
pub(crate) struct FixtureArticleSource {
    pages: HashMap<String, String>,
}

impl FixtureArticleSource {
    pub(crate) fn with_pages<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            pages: pages
                .into_iter()
                .map(|(title, content)| (title.to_string(), content.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl ArticleSource for FixtureArticleSource {
    async fn fetch_by_title(&self, title: &str) -> Result<Option<String>, SourceError> {
        Ok(self.pages.get(title).cloned())
    }
}
