use crate::infra::FixtureArticleSource;
use clap::Args;
use std::sync::Arc;
use wikibio::config::AppConfig;
use wikibio::error::AppError;
use wikibio::lookup::{ArticleSource, BiographyService, LookupError, WikipediaClient};

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Person name to resolve (free form: spaces, underscores, camelCase)
    pub(crate) name: String,
    /// Override the configured MediaWiki endpoint
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Additional name to resolve against the fixture articles
    #[arg(long)]
    pub(crate) name: Option<String>,
}

/// One-shot lookup against the configured live endpoint. Not-found and
/// no-description outcomes print as answers; a source outage exits nonzero.
pub(crate) async fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(endpoint) = args.endpoint {
        config.wikipedia.endpoint = endpoint;
    }

    let source = Arc::new(WikipediaClient::new(config.wikipedia)?);
    let service = BiographyService::new(source);

    match service.short_description(&args.name).await {
        Ok(resolved) => {
            println!("{}", resolved.description);
            Ok(())
        }
        Err(err @ LookupError::Source(_)) => Err(AppError::Lookup(err)),
        Err(err) => {
            println!("{err}");
            Ok(())
        }
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = BiographyService::new(Arc::new(fixture_source()));

    println!("Wikimedia name search demo (offline fixtures)");
    let queries = [
        "Ada Lovelace",
        "adaLovelace",
        "Barak Obama",
        "Tommy",
        "Hedy Lamarr",
    ];
    for query in queries {
        render_outcome(&service, query).await;
    }

    if let Some(name) = args.name.as_deref() {
        render_outcome(&service, name).await;
    }

    Ok(())
}

async fn render_outcome<S>(service: &BiographyService<S>, query: &str)
where
    S: ArticleSource + 'static,
{
    println!("\n- Query: {query:?}");
    match service.short_description(query).await {
        Ok(resolved) => println!("  Description: {}", resolved.description),
        Err(err) => println!("  {err}"),
    }
}

fn fixture_source() -> FixtureArticleSource {
    FixtureArticleSource::with_pages([
        (
            "Ada_Lovelace",
            "{{Short description|English mathematician and writer (1815-1852)}}\n\
             '''Augusta Ada King, Countess of Lovelace''' was an English mathematician chiefly \
             known for her work on [[Charles Babbage]]'s proposed mechanical general-purpose \
             computer, the [[Analytical Engine]].",
        ),
        (
            "Barak_Obama",
            "#REDIRECT [[Barack Obama]] {{R from misspelling}}",
        ),
        (
            "Tommy",
            "'''Tommy''' most often refers to [[Tom Hanks]] or [[Tom Jones (singer)]]. \
             See also [[Category:Given names]].",
        ),
    ])
}
