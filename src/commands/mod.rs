//! Subcommand implementations for the cellarscout binary.
//!
//! This is the composition root: both inputs (page HTML, catalog page)
//! are fully materialized here before the engine runs. Acquisition
//! failures surface as errors upstream of the engine; the engine itself
//! only ever sees complete inputs.

use std::path::Path;

use cellarscout::catalog::CatalogClient;
use cellarscout::config::Config;
use cellarscout::error::Result;
use cellarscout::fetch;
use cellarscout::report;
use cellarscout::resolve;
use cellarscout::scan;
use cellarscout::tree::PageTree;

/// Load page HTML from a URL or a local file path.
fn load_page(target: &str) -> Result<String> {
    if Path::new(target).is_file() {
        return Ok(std::fs::read_to_string(target)?);
    }
    // Validate before the network call for a clearer error on typos
    url::Url::parse(target)?;
    Ok(fetch::fetch_page(target)?.html)
}

/// Scan a page, fetch the catalog, run the comparison, print the report
pub fn cmd_check(target: &str, from: usize, size: Option<usize>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let size = size.unwrap_or(config.catalog.page_size);

    if !json {
        println!("Fetching {}...", target);
    }
    let html = load_page(target)?;

    if !json {
        println!("Fetching catalog ({} entries from offset {})...", size, from);
    }
    let client = CatalogClient::new(&config);
    let catalog = client.fetch_listings(from, size)?;

    let results = resolve::compare_page(&html, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    report::print_results(&results, &catalog, &config);
    Ok(())
}

/// Harvest and print candidate listings without matching
pub fn cmd_scan(target: &str, json: bool) -> Result<()> {
    let html = load_page(target)?;
    let tree = PageTree::from_html(&html);
    let candidates = scan::scan(&tree);

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }
    report::print_candidates(&candidates);
    Ok(())
}

/// Fetch and print one page of catalog listings
pub fn cmd_catalog(from: usize, size: Option<usize>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let size = size.unwrap_or(config.catalog.page_size);
    let client = CatalogClient::new(&config);
    let catalog = client.fetch_listings(from, size)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    for entry in &catalog {
        println!(
            "  {:>10}  {}",
            report::format_price(entry.price_usd, "$"),
            entry.name
        );
    }
    println!("\n{} entries", catalog.len());
    Ok(())
}

/// Write the current (or default) config to the config file
pub fn cmd_init() -> Result<()> {
    let config = Config::load()?;
    config.save()?;
    println!("Wrote {}", Config::config_path()?.display());
    Ok(())
}
