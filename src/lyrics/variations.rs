//! Alternate spellings of a song title
//!
//! lyrics.ovh only matches exact titles, and users rarely type the trailing
//! punctuation some titles carry ("Help!", "Where Is My Mind?"). A search
//! walks these candidates in order until one hits.

const STRIPPED_PUNCTUATION: &[char] = &['!', '?', '.', ',', ';', ':'];

/// Ordered, duplicate-free title candidates. The trimmed original is always first.
pub fn title_variations(title: &str) -> Vec<String> {
    let original = title.trim();
    let mut variations = vec![original.to_string()];

    if !original.ends_with('!') {
        variations.push(format!("{original}!"));
    }

    let stripped = strip_punctuation(original);
    if stripped != original {
        push_unique(&mut variations, stripped);
    }

    if !original.ends_with('?') {
        variations.push(format!("{original}?"));
    }

    let capitalized = capitalize(original);
    if capitalized != original {
        push_unique(&mut variations, capitalized);
    }

    variations
}

fn push_unique(variations: &mut Vec<String>, candidate: String) {
    if !variations.contains(&candidate) {
        variations.push(candidate);
    }
}

fn strip_punctuation(s: &str) -> String {
    s.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// First character upper-cased, everything after it lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_title() {
        assert_eq!(
            title_variations("don't stop"),
            vec!["don't stop", "don't stop!", "don't stop?", "Don't stop"]
        );
    }

    #[test]
    fn test_title_with_punctuation() {
        assert_eq!(title_variations("Help!"), vec!["Help!", "Help", "Help!?"]);
        assert_eq!(
            title_variations("where is my mind?"),
            vec![
                "where is my mind?",
                "where is my mind?!",
                "where is my mind",
                "Where is my mind?",
            ]
        );
    }

    #[test]
    fn test_already_capitalized() {
        assert_eq!(title_variations("  Hello  "), vec!["Hello", "Hello!", "Hello?"]);
    }

    #[test]
    fn test_capitalize_lowers_the_rest() {
        assert_eq!(
            title_variations("SHAKE IT OFF"),
            vec!["SHAKE IT OFF", "SHAKE IT OFF!", "SHAKE IT OFF?", "Shake it off"]
        );
    }

    #[test]
    fn test_only_punctuation_keeps_empty_variant() {
        assert_eq!(title_variations("?!"), vec!["?!", "", "?!?"]);
    }

    proptest! {
        #[test]
        fn original_comes_first(title in "[A-Za-z '!?.,;:]{1,24}") {
            let variations = title_variations(&title);
            prop_assert_eq!(variations[0].as_str(), title.trim());
        }

        #[test]
        fn no_duplicates(title in "[A-Za-z '!?.,;:]{1,24}") {
            let variations = title_variations(&title);
            for (i, v) in variations.iter().enumerate() {
                prop_assert!(!variations[i + 1..].contains(v), "duplicate {:?} in {:?}", v, variations);
            }
        }

        #[test]
        fn at_most_five(title in "\\PC{0,32}") {
            let variations = title_variations(&title);
            prop_assert!(!variations.is_empty() && variations.len() <= 5);
        }
    }
}
