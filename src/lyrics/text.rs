//! Text helpers for lyrics requests and display
//!
//! Request side: artist/title strings are normalized and percent-encoded
//! before they become URL path segments.
//!
//! Display side: raw lyrics from the API come with mixed line endings,
//! indentation and blank runs; they are cleaned into one line per verse line.

/// Collapse whitespace runs, trim, and replace typographic quotes with ASCII ones.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Normalize then percent-encode a single path segment.
pub fn encode_param(param: &str) -> String {
    urlencoding::encode(&normalize_text(param)).into_owned()
}

/// Clean raw lyrics: unify line endings, trim every line, drop empty ones.
pub fn clean_lyrics(lyrics: &str) -> String {
    lyrics
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Split cleaned lyrics into the lines shown in the lyrics pane.
pub fn display_lines(lyrics: &str) -> Vec<&str> {
    lyrics.lines().filter(|l| !l.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  the   beatles \t"), "the beatles");
        assert_eq!(normalize_text("don\u{2019}t stop"), "don't stop");
        assert_eq!(normalize_text("\u{201C}Heroes\u{201D}"), "\"Heroes\"");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_encode_param() {
        assert_eq!(encode_param("Guns N' Roses"), "Guns%20N%27%20Roses");
        assert_eq!(encode_param("  AC/DC "), "AC%2FDC");
        assert_eq!(encode_param("Beyonc\u{e9}"), "Beyonc%C3%A9");
        assert_eq!(encode_param("Hello?"), "Hello%3F");
    }

    #[test]
    fn test_clean_lyrics() {
        let raw = "  First line\r\n\r\n  Second line  \rThird line\n\n\n";
        assert_eq!(clean_lyrics(raw), "First line\nSecond line\nThird line");
        assert_eq!(clean_lyrics(""), "");
        assert_eq!(clean_lyrics(" \r\n \n\t"), "");
    }

    #[test]
    fn test_display_lines() {
        let cleaned = clean_lyrics("a\n\nb\r\nc");
        assert_eq!(display_lines(&cleaned), vec!["a", "b", "c"]);
        assert!(display_lines("").is_empty());
    }
}
