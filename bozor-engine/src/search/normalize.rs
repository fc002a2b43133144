//! Text normalization shared by queries and haystacks

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lower-case, then strip diacritics (NFD, drop combining marks)
///
/// "Café Éxpress" → "cafe express", "Ko'k Saroy" stays "ko'k saroy".
/// Marks produced by lower-casing ('İ' → "i\u{307}") are stripped too.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalized, whitespace-separated, non-empty tokens
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Café Éxpress"), "cafe express");
        assert_eq!(normalize("Śamarqand"), "samarqand");
        assert_eq!(normalize("ZARA"), "zara");
    }

    #[test]
    fn test_lowercase_marks_are_stripped() {
        assert_eq!(normalize("İstanbul"), "istanbul");
        assert_eq!(tokenize("İPAK YO'LI"), vec!["ipak", "yo'li"]);
    }

    #[test]
    fn test_tokenize_drops_blank_fragments() {
        assert_eq!(tokenize("  Zara   store "), vec!["zara", "store"]);
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("").is_empty());
    }
}
