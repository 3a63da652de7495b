use regex::Regex;
use std::sync::OnceLock;

static SHORT_DESCRIPTION: OnceLock<Regex> = OnceLock::new();
static WIKILINK: OnceLock<Regex> = OnceLock::new();
static REDIRECT: OnceLock<Regex> = OnceLock::new();

/// Payload of the first `{{Short description|...}}` marker, taken verbatim.
/// The template name match is case-sensitive, the capture stops at the first
/// closing braces and does not span line breaks.
pub(crate) fn short_description(markup: &str) -> Option<&str> {
    short_description_re()
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|payload| payload.as_str())
}

/// Every `[[...]]` cross-reference in the content, brackets stripped, in
/// scan order.
pub(crate) fn wikilinks(markup: &str) -> Vec<&str> {
    wikilink_re()
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .map(|link| link.as_str())
        .collect()
}

/// Target of a redirect stub. MediaWiki spells the directive in either case
/// and it must open the page.
pub(crate) fn redirect_target(markup: &str) -> Option<&str> {
    redirect_re()
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|target| target.as_str())
}

fn short_description_re() -> &'static Regex {
    SHORT_DESCRIPTION
        .get_or_init(|| Regex::new(r"\{\{Short description\|(.+?)\}\}").expect("pattern compiles"))
}

fn wikilink_re() -> &'static Regex {
    WIKILINK.get_or_init(|| Regex::new(r"\[\[(.*?)\]\]").expect("pattern compiles"))
}

fn redirect_re() -> &'static Regex {
    REDIRECT
        .get_or_init(|| Regex::new(r"(?i)^\s*#redirect\s*\[\[(.*?)\]\]").expect("pattern compiles"))
}
