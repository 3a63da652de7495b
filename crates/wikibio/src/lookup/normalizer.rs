/// Convert a free-form person name into the canonical article title form:
/// underscore-separated words, each starting with a capital letter.
/// Underscores count as spaces, camelCase compounds split at ASCII
/// lowercase/uppercase boundaries, and empty tokens from repeated
/// separators are dropped. Never fails.
pub(crate) fn canonical_title(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev_lower = ch.is_ascii_lowercase();
    }

    spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
