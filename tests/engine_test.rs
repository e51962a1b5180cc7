//! End-to-end engine tests: raw HTML through scanning and resolution.

use cellarscout::catalog::{parse_listings, CatalogEntry};
use cellarscout::currency::Savings;
use cellarscout::resolve::compare_page;
use cellarscout::scan;
use cellarscout::tree::PageTree;

// ============================================================================
// Fixtures
// ============================================================================

/// A retail listing page with one comparable bottle, one sold-out
/// bottle, one that claims the same catalog entry as the first, one
/// with no catalog counterpart, and one with no price signal at all.
const RETAILER_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Fine Whisky Shop</title></head>
<body>
    <section>
        <div class="product-card">
            <h2>The Macallan 18 Year Old Sherry Oak</h2>
            <span class="price">$200.00</span>
        </div>
    </section>
    <section>
        <div class="product-card">
            <h2>Hibiki 21 Year Old Suntory Whisky</h2>
            <span class="stock-label">Sold Out</span>
        </div>
    </section>
    <section>
        <div class="product-card">
            <h2>Macallan 18 Year Old Sherry Oak Cask</h2>
            <span class="price">$180.00</span>
        </div>
    </section>
    <section>
        <div class="product-card">
            <h2>House Blended Scotch Mystery Dram</h2>
            <span class="price">$12.00</span>
        </div>
    </section>
    <section>
        <div class="product-card">
            <h2>Glenfarclas 105 Cask Strength</h2>
            <p>1 L bottle</p>
        </div>
    </section>
</body>
</html>
"#;

const SINGLE_MATCH_HTML: &str = r#"
<html><body>
    <div>
        <h2>The Macallan 18 Year Old Sherry Oak</h2>
        <span class="price">$200.00</span>
    </div>
</body></html>
"#;

const LISTINGS_JSON: &str = r#"[
    {
        "_id": "c1",
        "_source": {
            "id": "asset-1",
            "name": "The Macallan 18 Year Old Sherry Oak",
            "price": 150.0
        }
    },
    {
        "_id": "c2",
        "_source": {
            "id": "asset-2",
            "name": "Hibiki 21 Year Old",
            "price": 400.0
        }
    },
    {
        "_id": "c3",
        "_source": {
            "id": "asset-3",
            "name": "Springbank 10",
            "price": 45.0
        }
    }
]"#;

fn catalog() -> Vec<CatalogEntry> {
    parse_listings(LISTINGS_JSON).unwrap()
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn test_scanner_harvests_expected_candidates() {
    let tree = PageTree::from_html(RETAILER_HTML);
    let candidates = scan::scan(&tree);

    let macallan = candidates
        .iter()
        .find(|c| c.title == "The Macallan 18 Year Old Sherry Oak")
        .expect("macallan candidate");
    assert!((macallan.price - 200.0).abs() < 1e-9);
    assert_eq!(macallan.currency, "$");
    assert!(!macallan.is_sold_out);

    let hibiki = candidates
        .iter()
        .find(|c| c.title == "Hibiki 21 Year Old Suntory Whisky")
        .expect("hibiki candidate");
    assert!(hibiki.is_sold_out);
    assert_eq!(hibiki.price, 0.0);

    // No price signal and not sold out: never materialized
    assert!(candidates
        .iter()
        .all(|c| c.title != "Glenfarclas 105 Cask Strength"));

    // Every materialized candidate honors the core invariant
    assert!(candidates.iter().all(|c| c.price > 0.0 || c.is_sold_out));
}

// ============================================================================
// Full comparison
// ============================================================================

#[test]
fn test_compare_page_end_to_end() {
    let catalog = catalog();
    let results = compare_page(RETAILER_HTML, &catalog);

    assert_eq!(results.len(), 2);

    // First slot: the Macallan entry, claimed twice. The later candidate
    // in scan order replaced the earlier one but kept its position.
    let macallan = &results[0];
    assert_eq!(macallan.catalog_entry_id, "c1");
    assert_eq!(macallan.candidate_title, "Macallan 18 Year Old Sherry Oak Cask");
    assert!((macallan.converted_price_usd - 180.0).abs() < 1e-9);
    assert!(macallan.cheaper);
    assert!(!macallan.is_sold_out);

    // Second slot: the sold-out Hibiki, recommended unconditionally
    let hibiki = &results[1];
    assert_eq!(hibiki.catalog_entry_id, "c2");
    assert!(hibiki.is_sold_out);
    assert!(hibiki.cheaper);
    assert!((hibiki.converted_price_usd - 800.0).abs() < 1e-9);

    // Every result references an entry present in the input catalog
    for result in &results {
        assert!(catalog.iter().any(|e| e.id == result.catalog_entry_id));
    }
}

#[test]
fn test_single_match_savings_math() {
    let catalog = catalog();
    let results = compare_page(SINGLE_MATCH_HTML, &catalog);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.catalog_entry_id, "c1");
    assert!((result.converted_price_usd - 200.0).abs() < 1e-9);
    assert!(result.cheaper);

    let savings = Savings::compute(result.converted_price_usd, 150.0, result.is_sold_out);
    assert!((savings.amount - 50.0).abs() < 1e-9);
    assert!((savings.percentage - 25.0).abs() < 1e-9);
}

#[test]
fn test_sold_out_savings_math() {
    let catalog = catalog();
    let results = compare_page(RETAILER_HTML, &catalog);

    let hibiki = results.iter().find(|r| r.catalog_entry_id == "c2").unwrap();
    let savings = Savings::compute(hibiki.converted_price_usd, 400.0, hibiki.is_sold_out);
    assert!((savings.amount - 400.0).abs() < 1e-9);
    assert!((savings.percentage - 100.0).abs() < 1e-9);
}

#[test]
fn test_unmatched_candidates_produce_no_results() {
    let catalog = catalog();
    let results = compare_page(RETAILER_HTML, &catalog);

    // The mystery dram had a valid price but clears no threshold,
    // and Springbank's two-token name can never reach its threshold.
    assert!(results
        .iter()
        .all(|r| r.candidate_title != "House Blended Scotch Mystery Dram"));
    assert!(results.iter().all(|r| r.catalog_entry_id != "c3"));
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_empty_page_empty_results() {
    assert!(compare_page("", &catalog()).is_empty());
    assert!(compare_page("<html><body></body></html>", &catalog()).is_empty());
}

#[test]
fn test_empty_catalog_empty_results() {
    assert!(compare_page(RETAILER_HTML, &[]).is_empty());
}
