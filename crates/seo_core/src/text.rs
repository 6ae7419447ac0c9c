use std::collections::HashSet;

/// Removes repeated strings, keeping the first occurrence and the original order.
pub fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// `dedup` followed by truncation to `cap` entries.
pub fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut items = dedup(items);
    items.truncate(cap);
    items
}

/// Truncates to at most `max_chars` characters, appending an ellipsis when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Splits prose into sentences on `.`, `!` and `?`, keeping the terminator.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                out.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        out.push(rest.to_string());
    }
    out
}

/// Uppercases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(dedup(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedup_capped() {
        let items = (0..20).map(|i| format!("q{}", i % 12)).collect();
        let capped = dedup_capped(items, 10);
        assert_eq!(capped.len(), 10);
        assert_eq!(capped[0], "q0");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("a longer sentence here", 8), "a longer...");
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            sentences("Zinc is essential. It helps immunity! Why? Trailing"),
            vec!["Zinc is essential.", "It helps immunity!", "Why?", "Trailing"]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("zinc"), "Zinc");
        assert_eq!(capitalize(""), "");
    }
}
