//! Fuzzy candidate-to-catalog title matching.

use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::tokenize::tokenize;

/// Overlap threshold for short catalog names (at most five tokens);
/// fewer confirming tokens avoid false negatives on terse names.
const SHORT_NAME_THRESHOLD: usize = 3;
/// Longer names accumulate generic-word overlap, so they need
/// proportionally more confirming tokens.
const LONG_NAME_THRESHOLD: usize = 5;
/// Token count at or below which a catalog name counts as short.
const SHORT_NAME_TOKENS: usize = 5;

/// Number of catalog-name tokens present in the candidate title's
/// token set. Asymmetric on purpose: the catalog name is the scored
/// side, not the union.
pub fn match_score(candidate_title: &str, catalog_name: &str) -> usize {
    let title_tokens: HashSet<String> = tokenize(candidate_title).into_iter().collect();
    tokenize(catalog_name)
        .iter()
        .filter(|token| title_tokens.contains(*token))
        .count()
}

/// Minimum overlap required for the given catalog name.
pub fn match_threshold(catalog_name: &str) -> usize {
    threshold_for_len(tokenize(catalog_name).len())
}

fn threshold_for_len(token_count: usize) -> usize {
    if token_count <= SHORT_NAME_TOKENS {
        SHORT_NAME_THRESHOLD
    } else {
        LONG_NAME_THRESHOLD
    }
}

/// Whether the candidate title clears the entry name's own threshold.
pub fn is_match(candidate_title: &str, catalog_name: &str) -> bool {
    match_score(candidate_title, catalog_name) >= match_threshold(catalog_name)
}

/// First catalog entry, in catalog order, whose threshold the title
/// clears. Scanning stops at the first hit; ties go to catalog order,
/// not to the best score.
pub fn first_match<'a>(
    candidate_title: &str,
    catalog: &'a [CatalogEntry],
) -> Option<&'a CatalogEntry> {
    let title_tokens: HashSet<String> = tokenize(candidate_title).into_iter().collect();
    catalog.iter().find(|entry| {
        let name_tokens = tokenize(&entry.name);
        let score = name_tokens
            .iter()
            .filter(|token| title_tokens.contains(*token))
            .count();
        score >= threshold_for_len(name_tokens.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            price_usd: 100.0,
            image_url: None,
            animation_url: None,
        }
    }

    #[test]
    fn test_adaptive_threshold() {
        // Two tokens -> short name rule
        assert_eq!(match_threshold("Macallan 18"), 3);
        // Seven tokens -> long name rule
        assert_eq!(match_threshold("The Macallan Double Cask 18 Year Old"), 5);
        assert_eq!(match_threshold(""), 3);
    }

    #[test]
    fn test_score_is_asymmetric() {
        // Scoring counts catalog-name tokens, duplicates included, so
        // swapping the sides changes the score.
        assert_eq!(match_score("old pulteney", "Old Pulteney Old Reserve"), 3);
        assert_eq!(match_score("Old Pulteney Old Reserve", "old pulteney"), 2);
    }

    #[test]
    fn test_short_name_cannot_outscore_its_tokens() {
        // "Macallan 18" tokenizes to two tokens, so even a perfect
        // overlap stays below the short-name threshold of three.
        assert!(!is_match("Macallan 18 Year Old", "Macallan 18"));
    }

    #[test]
    fn test_full_phrase_match() {
        let title = "The Macallan 18 Year Old Sherry Oak";
        assert_eq!(match_score(title, "The Macallan 18 Year Old Sherry Oak"), 7);
        assert!(is_match(title, "The Macallan 18 Year Old Sherry Oak"));
    }

    #[test]
    fn test_generic_overlap_rejected_for_long_names() {
        // Shares only generic tokens with the long catalog name
        let title = "Glenlivet 12 Year Old Single Malt";
        assert!(!is_match(title, "The Macallan 18 Year Old Sherry Oak Cask"));
    }

    #[test]
    fn test_first_match_takes_catalog_order() {
        let catalog = vec![
            entry("c1", "The Macallan 18 Year Old"),
            entry("c2", "The Macallan 18 Year Old Sherry Oak"),
        ];
        let title = "The Macallan 18 Year Old Sherry Oak";
        // Both entries clear their thresholds; the earlier one wins
        let matched = first_match(title, &catalog).unwrap();
        assert_eq!(matched.id, "c1");
    }

    #[test]
    fn test_first_match_none() {
        let catalog = vec![entry("c1", "The Macallan 18 Year Old")];
        assert!(first_match("Completely unrelated gin", &catalog).is_none());
        assert!(first_match("anything", &[]).is_none());
    }
}
