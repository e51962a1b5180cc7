//! Title tokenization for fuzzy matching.
//!
//! The same normalization is applied to scraped page titles and catalog
//! names so overlap counts compare like with like.

/// Normalize raw title text into matchable word tokens.
///
/// Lowercases, strips every character that is not an ASCII lowercase
/// letter, digit, or whitespace, splits on whitespace runs, and drops
/// tokens of length <= 1. Pure and deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|word| word.len() > 1)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(
            tokenize("The Macallan 18 Year Old"),
            vec!["the", "macallan", "18", "year", "old"]
        );
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            tokenize("Glenfiddich-12, Single Malt (70cl)"),
            vec!["glenfiddich12", "single", "malt", "70cl"]
        );
    }

    #[test]
    fn test_drops_short_tokens() {
        // Single-character tokens carry no matching signal
        assert_eq!(tokenize("A 5 cl of X"), vec!["cl", "of"]);
    }

    #[test]
    fn test_non_ascii_stripped() {
        assert_eq!(tokenize("Château Lafite"), vec!["chteau", "lafite"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("! @ # $").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "The Macallan 18 Year Old Sherry Oak",
            "  Pappy Van Winkle's Family Reserve 15yr!  ",
            "Hibiki 21 — Suntory",
        ];
        for input in inputs {
            let once = tokenize(input);
            let twice = tokenize(&once.join(" "));
            assert_eq!(once, twice, "tokenize not idempotent for {:?}", input);
        }
    }
}
