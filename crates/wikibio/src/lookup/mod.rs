//! Person-name lookup over encyclopedia article content.
//!
//! The pipeline normalizes a free-form name into a canonical article title,
//! fetches the article's wikitext through the [`ArticleSource`] capability,
//! extracts the `{{Short description|...}}` payload, and falls back to
//! suggestion matching over the page's cross-references when no description
//! exists. Every stage except the fetch is pure and synchronous.

pub(crate) mod markup;
pub(crate) mod normalizer;
pub mod router;
pub mod service;
pub mod source;
pub mod suggest;
pub mod wikipedia;

pub use router::lookup_router;
pub use service::{BiographyService, LookupError, ShortDescription};
pub use source::{ArticleSource, SourceError};
pub use suggest::NameSuggestions;
pub use wikipedia::WikipediaClient;
