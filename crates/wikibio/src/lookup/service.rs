use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::error;

use super::markup;
use super::normalizer;
use super::source::{ArticleSource, SourceError};
use super::suggest::{self, NameSuggestions};

/// Successful lookup payload: the one-line biographical summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDescription {
    pub description: String,
}

/// Walks a raw name through normalization, content fetch, description
/// extraction, and suggestion matching.
pub struct BiographyService<S> {
    source: Arc<S>,
}

impl<S> BiographyService<S>
where
    S: ArticleSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Resolve a raw name to the short description of its article.
    pub async fn short_description(&self, name: &str) -> Result<ShortDescription, LookupError> {
        let title = normalizer::canonical_title(name);

        let content = match self.source.fetch_by_title(&title).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                error!(%title, "no page found for name");
                return Err(LookupError::PersonNotFound { title });
            }
            Err(err) => {
                error!(%title, source_error = %err, "content source failed");
                return Err(LookupError::Source(err));
            }
        };

        match markup::short_description(&content) {
            Some(description) => Ok(ShortDescription {
                description: description.to_string(),
            }),
            None => {
                let suggestions = suggest::similar_names(&content, &title);
                error!(%title, "page carries no short description marker");
                Err(LookupError::NoDescription { title, suggestions })
            }
        }
    }
}

/// Terminal lookup outcomes; nothing is retried and nothing collapses into
/// a catch-all.
#[derive(Debug)]
pub enum LookupError {
    /// No article, or an article without revision content, under the title.
    PersonNotFound { title: String },
    /// Article carries no short-description marker; suggestions are always
    /// computed, possibly empty.
    NoDescription {
        title: String,
        suggestions: NameSuggestions,
    },
    /// The content source itself failed.
    Source(SourceError),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::PersonNotFound { .. } => {
                write!(f, "Person not found on English Wikipedia")
            }
            LookupError::NoDescription { title, suggestions } => {
                write!(
                    f,
                    "No exact short description was found for the person on English Wikipedia. {}",
                    suggestions.summary(title)
                )
            }
            LookupError::Source(_) => {
                write!(f, "Service not available. Kindly try again another time")
            }
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for LookupError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}
