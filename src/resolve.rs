//! Match resolution: candidates against the catalog, in scan order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::currency;
use crate::matching;
use crate::scan::{self, CandidateListing};
use crate::tree::PageTree;

/// Multiplier applied to the catalog price of a sold-out match. With no
/// real site price available, the full catalog price is the saving.
const SOLD_OUT_PRICE_FACTOR: f64 = 2.0;

/// One resolved candidate-to-catalog match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub catalog_entry_id: String,
    pub candidate_title: String,
    pub candidate_price: f64,
    pub candidate_currency: String,
    pub converted_price_usd: f64,
    pub is_sold_out: bool,
    pub cheaper: bool,
}

/// Resolve candidates against the catalog in scan-discovery order.
///
/// Each candidate title contributes at most one result; once a title is
/// resolved it is locked for the rest of the pass. The output is keyed
/// by catalog entry id: a later candidate claiming an already-claimed
/// entry overwrites the earlier result in place, keeping its position.
pub fn resolve(candidates: &[CandidateListing], catalog: &[CatalogEntry]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = Vec::new();
    let mut index_by_entry: HashMap<String, usize> = HashMap::new();
    let mut locked_titles: HashSet<&str> = HashSet::new();

    for candidate in candidates {
        if locked_titles.contains(candidate.title.as_str()) {
            continue;
        }

        let result = if candidate.is_sold_out {
            resolve_sold_out(candidate, catalog)
        } else {
            resolve_listed(candidate, catalog)
        };

        if let Some(result) = result {
            locked_titles.insert(candidate.title.as_str());
            match index_by_entry.get(&result.catalog_entry_id) {
                Some(&index) => results[index] = result,
                None => {
                    index_by_entry.insert(result.catalog_entry_id.clone(), results.len());
                    results.push(result);
                }
            }
        }
    }
    results
}

/// Sold-out branch: the first matching entry (in catalog order) wins
/// and the recommendation is unconditional; unavailability elsewhere is
/// treated as the maximal saving. Conversion is bypassed entirely.
fn resolve_sold_out(
    candidate: &CandidateListing,
    catalog: &[CatalogEntry],
) -> Option<MatchResult> {
    let entry = matching::first_match(&candidate.title, catalog)?;
    Some(MatchResult {
        catalog_entry_id: entry.id.clone(),
        candidate_title: candidate.title.clone(),
        candidate_price: candidate.price,
        candidate_currency: candidate.currency.clone(),
        converted_price_usd: entry.price_usd * SOLD_OUT_PRICE_FACTOR,
        is_sold_out: true,
        cheaper: true,
    })
}

/// Normal branch: a blank or zero-price candidate always scores zero
/// and is skipped; otherwise the first matching entry wins and the
/// candidate price is normalized before the comparison.
fn resolve_listed(candidate: &CandidateListing, catalog: &[CatalogEntry]) -> Option<MatchResult> {
    if candidate.title.is_empty()
        || candidate.currency.trim().is_empty()
        || candidate.price <= 0.0
    {
        return None;
    }
    let entry = matching::first_match(&candidate.title, catalog)?;
    let converted_price_usd = currency::to_usd(candidate.price, &candidate.currency);
    Some(MatchResult {
        catalog_entry_id: entry.id.clone(),
        candidate_title: candidate.title.clone(),
        candidate_price: candidate.price,
        candidate_currency: candidate.currency.clone(),
        converted_price_usd,
        is_sold_out: false,
        cheaper: entry.price_usd < converted_price_usd,
    })
}

/// Run the full engine over raw HTML: snapshot the tree, scan for
/// candidates, resolve them against the catalog.
pub fn compare_page(html: &str, catalog: &[CatalogEntry]) -> Vec<MatchResult> {
    let tree = PageTree::from_html(html);
    let candidates = scan::scan(&tree);
    resolve(&candidates, catalog)
}
