use super::markup;

/// Candidate alternate titles pulled from a page's cross-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestions {
    /// Surviving candidates in original scan order.
    pub matches: Vec<String>,
    /// Whether the content carried any wikilink at all. Both empty outcomes
    /// look the same as a sequence; this flag keeps their messages apart.
    pub scanned_links: bool,
}

impl NameSuggestions {
    /// Human-readable suggestion line embedded in no-description failures.
    pub fn summary(&self, canonical_title: &str) -> String {
        if !self.matches.is_empty() {
            format!("Did you mean: {}?", self.matches.join(", "))
        } else if self.scanned_links {
            format!("No similar names found for \"{canonical_title}\"")
        } else {
            "No similar names found".to_string()
        }
    }
}

/// Keep the `[[...]]` cross-references plausibly naming the queried person:
/// no `Category` links, no echo of the queried title, candidate must contain
/// the canonical title as a case-sensitive substring. A redirect target is
/// exempt from containment, being the source's own correction of the title.
pub(crate) fn similar_names(markup: &str, canonical_title: &str) -> NameSuggestions {
    let links = markup::wikilinks(markup);
    let scanned_links = !links.is_empty();
    let redirect = markup::redirect_target(markup);

    let matches = links
        .into_iter()
        .filter(|candidate| !candidate.contains("Category"))
        .filter(|candidate| *candidate != canonical_title)
        .filter(|candidate| candidate.contains(canonical_title) || Some(*candidate) == redirect)
        .map(str::to_string)
        .collect();

    NameSuggestions {
        matches,
        scanned_links,
    }
}

#[cfg(test)]
mod tests {
    use super::similar_names;

    #[test]
    fn keeps_containing_candidates_in_scan_order() {
        let suggestions = similar_names(
            "text [[Category:Actors]] [[Tom Holland]] [[Tom Cruise]]",
            "Tom",
        );
        assert_eq!(suggestions.matches, vec!["Tom Holland", "Tom Cruise"]);
        assert!(suggestions.scanned_links);
        assert_eq!(
            suggestions.summary("Tom"),
            "Did you mean: Tom Holland, Tom Cruise?"
        );
    }

    #[test]
    fn no_brackets_is_its_own_signal() {
        let suggestions = similar_names("no brackets here", "John");
        assert!(suggestions.matches.is_empty());
        assert!(!suggestions.scanned_links);
        assert_eq!(suggestions.summary("John"), "No similar names found");
    }

    #[test]
    fn filtered_out_candidates_keep_the_scanned_flag() {
        let suggestions = similar_names("[[Tom Hanks]]", "Tommy");
        assert!(suggestions.matches.is_empty());
        assert!(suggestions.scanned_links);
        assert_eq!(
            suggestions.summary("Tommy"),
            "No similar names found for \"Tommy\""
        );
    }

    #[test]
    fn drops_the_queried_title_itself() {
        let suggestions = similar_names("[[Tom]] and [[Tom Holland]]", "Tom");
        assert_eq!(suggestions.matches, vec!["Tom Holland"]);
    }

    #[test]
    fn containment_is_case_sensitive() {
        let suggestions = similar_names("[[tom holland]]", "Tom");
        assert!(suggestions.matches.is_empty());
        assert!(suggestions.scanned_links);
    }

    #[test]
    fn redirect_targets_survive_the_containment_filter() {
        let suggestions = similar_names(
            "#REDIRECT [[Barack Obama]] {{R from misspelling}}",
            "Barak_Obama",
        );
        assert_eq!(suggestions.matches, vec!["Barack Obama"]);
        assert_eq!(
            suggestions.summary("Barak_Obama"),
            "Did you mean: Barack Obama?"
        );
    }
}
