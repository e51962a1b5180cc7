//! Page scanning: harvest candidate listings from an element tree.
//!
//! Selection is heuristic by design. Retail pages rarely share markup,
//! so the scanner casts a wide net (headings, price-tagged elements,
//! spans under divs) and relies on price validation to discard noise.

use std::collections::HashSet;

use serde::Serialize;

use crate::price::{self, Neighborhood};
use crate::tree::{NodeId, PageTree};

/// Phrases that mark a listing as unavailable (case-insensitive).
const SOLD_OUT_PHRASES: &[&str] = &["sold out", "out of stock"];

/// A title/price/availability tuple harvested from the page, not yet
/// matched against the catalog. Every materialized candidate carries a
/// validated positive price or `is_sold_out == true`.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateListing {
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub is_sold_out: bool,
}

/// Walk the tree and collect candidate listings in first-discovery
/// order, deduplicated by title (first occurrence wins).
pub fn scan(tree: &PageTree) -> Vec<CandidateListing> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for id in tree.node_ids() {
        if !is_title_candidate(tree, id) {
            continue;
        }
        let title = tree.text(id);
        if title.is_empty() || seen_titles.contains(&title) {
            continue;
        }
        if let Some(candidate) = extract_candidate(tree, id, &title) {
            seen_titles.insert(title);
            candidates.push(candidate);
        }
    }
    candidates
}

/// Selection heuristics for title-bearing elements: headings at any
/// depth, elements attribute-tagged as prices, and spans directly under
/// divs.
fn is_title_candidate(tree: &PageTree, id: NodeId) -> bool {
    if matches!(tree.tag(id), "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
        return true;
    }
    if tree.attr_marked(id, "price") {
        return true;
    }
    if tree.tag(id) == "span" {
        if let Some(parent) = tree.parent(id) {
            return tree.tag(parent) == "div";
        }
    }
    false
}

/// Build a candidate from a title element, or drop it silently when no
/// price signal and no sold-out marker is found.
fn extract_candidate(tree: &PageTree, id: NodeId, title: &str) -> Option<CandidateListing> {
    let parent = tree.parent(id)?;
    let is_sold_out = detect_sold_out(tree, parent);
    let neighborhood = build_neighborhood(tree, parent);

    match price::extract_price(&neighborhood) {
        Some(signal) => Some(CandidateListing {
            title: title.to_string(),
            price: signal.amount,
            currency: signal.currency,
            is_sold_out,
        }),
        None if is_sold_out => Some(CandidateListing {
            title: title.to_string(),
            price: 0.0,
            currency: String::new(),
            is_sold_out: true,
        }),
        None => None,
    }
}

/// Assemble the text neighborhood the extraction strategies run over.
fn build_neighborhood(tree: &PageTree, parent: NodeId) -> Neighborhood {
    let price_text = find_price_element(tree, parent)
        .map(|element| tree.text(element))
        .unwrap_or_default();
    let context_text = tree.text(parent);
    let nested_texts = tree
        .children(parent)
        .iter()
        .filter(|child| tree.tag(**child) == "div")
        .flat_map(|child| tree.descendants(*child))
        .map(|descendant| tree.text(descendant))
        .collect();
    Neighborhood {
        price_text,
        context_text,
        nested_texts,
    }
}

/// Expanding-radius search for the nearest plausible price-bearing
/// element. Priority order, stopping at first success: parent subtree,
/// grandparent subtree, each parent-sibling subtree, then any span or
/// paragraph under the parent as a last resort.
fn find_price_element(tree: &PageTree, parent: NodeId) -> Option<NodeId> {
    if let Some(found) = find_price_marked(tree, parent) {
        return Some(found);
    }
    if let Some(grandparent) = tree.parent(parent) {
        if let Some(found) = find_price_marked(tree, grandparent) {
            return Some(found);
        }
        for sibling in tree.children(grandparent) {
            if *sibling == parent {
                continue;
            }
            if let Some(found) = find_price_marked(tree, *sibling) {
                return Some(found);
            }
        }
    }
    tree.descendants(parent)
        .into_iter()
        .find(|descendant| matches!(tree.tag(*descendant), "span" | "p"))
}

/// First strict descendant whose class or id attribute marks it as a
/// price element. Accepts both `price` and `Price` spellings.
fn find_price_marked(tree: &PageTree, root: NodeId) -> Option<NodeId> {
    tree.descendants(root)
        .into_iter()
        .find(|descendant| {
            tree.attr_marked(*descendant, "price") || tree.attr_marked(*descendant, "Price")
        })
}

/// Sold-out detection over the candidate's neighborhood: parent text,
/// then parent-sibling texts, then parent-children texts. First hit
/// wins; no further scanning.
fn detect_sold_out(tree: &PageTree, parent: NodeId) -> bool {
    if has_sold_out_text(&tree.text(parent)) {
        return true;
    }
    if let Some(grandparent) = tree.parent(parent) {
        for sibling in tree.children(grandparent) {
            if *sibling != parent && has_sold_out_text(&tree.text(*sibling)) {
                return true;
            }
        }
    }
    tree.children(parent)
        .iter()
        .any(|child| has_sold_out_text(&tree.text(*child)))
}

fn has_sold_out_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    SOLD_OUT_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
