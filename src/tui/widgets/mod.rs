pub mod favorites;
pub mod help;
pub mod lyrics;
pub mod root;
pub mod search_form;

/// Cut `s` to `max_len` characters, ending in "..." when shortened.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_str;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Bohemian Rhapsody", 8), "Bohem...");
        assert_eq!(truncate_str("Hello", 5), "Hello");
        assert_eq!(truncate_str("Hello", 2), "He");
        assert_eq!(truncate_str("Hello", 0), "");
        assert_eq!(truncate_str("Beyoncé Knowles", 7), "Beyo...");
    }
}
