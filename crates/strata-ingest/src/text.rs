//! Small text helpers shared by the extractors and the aggregator.

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn collapse_ws(input: &str) -> String {
    input
        .split_whitespace()
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-collapsed, lowercased form used for matching keys.
pub fn fold_key(input: &str) -> String {
    collapse_ws(input).to_lowercase()
}

/// Split on whitespace, `-`, `_` and camelCase boundaries.
/// `"AlternativeTitle"` → `["Alternative", "Title"]`.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in input.split(|c: char| c.is_whitespace() || c == '-' || c == '_') {
        if chunk.is_empty() {
            continue;
        }
        let chars: Vec<char> = chunk.chars().collect();
        let mut word = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if !word.is_empty() && c.is_uppercase() {
                let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_numeric();
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                    words.push(std::mem::take(&mut word));
                }
            }
            word.push(c);
        }
        if !word.is_empty() {
            words.push(word);
        }
    }
    words
}

/// `"AlternativeTitle"` → `"alternative-title"`.
pub fn kebab_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"dataCollector"` → `"Data Collector"`. Words keep their tail casing so
/// acronyms survive.
pub fn title_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_ws_squeezes_runs() {
        assert_eq!(collapse_ws("  EARTH   SCIENCE \n"), "EARTH SCIENCE");
        assert_eq!(collapse_ws(""), "");
    }

    #[test]
    fn fold_key_lowercases() {
        assert_eq!(fold_key(" Smith  Jane "), "smith jane");
    }

    #[test]
    fn split_words_handles_camel_and_separators() {
        assert_eq!(split_words("AlternativeTitle"), vec!["Alternative", "Title"]);
        assert_eq!(split_words("dataCollector"), vec!["data", "Collector"]);
        assert_eq!(split_words("work package_leader"), vec!["work", "package", "leader"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
    }

    #[test]
    fn kebab_case_slugs() {
        assert_eq!(kebab_case("AlternativeTitle"), "alternative-title");
        assert_eq!(kebab_case("Coverage"), "coverage");
        assert_eq!(kebab_case("Other"), "other");
        assert_eq!(kebab_case("Translated Title"), "translated-title");
    }

    #[test]
    fn title_case_labels() {
        assert_eq!(title_case("dataCollector"), "Data Collector");
        assert_eq!(title_case("curation support"), "Curation Support");
    }
}
