//! Terminal rendering of scan candidates and comparison results.

use colored::Colorize;

use crate::catalog::CatalogEntry;
use crate::config::Config;
use crate::currency::Savings;
use crate::resolve::MatchResult;
use crate::scan::CandidateListing;

/// Disable colored output when stdout is not a terminal.
pub fn init_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Format an amount with its currency marker, two decimals.
pub fn format_price(value: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, value)
}

/// Print the comparison report for resolved matches.
pub fn print_results(results: &[MatchResult], catalog: &[CatalogEntry], config: &Config) {
    if results.is_empty() {
        println!("No catalog matches found on this page.");
        return;
    }

    let plural = if results.len() == 1 { "match" } else { "matches" };
    println!("\n{} catalog {}:\n", results.len(), plural);

    for result in results {
        // Resolver guarantees the entry exists in the input catalog
        let Some(entry) = catalog.iter().find(|e| e.id == result.catalog_entry_id) else {
            continue;
        };
        print_result(result, entry, config);
    }
}

fn print_result(result: &MatchResult, entry: &CatalogEntry, config: &Config) {
    let savings = Savings::compute(result.converted_price_usd, entry.price_usd, result.is_sold_out);

    println!("  {}", entry.name.bold());
    if result.is_sold_out {
        println!("    Site price:    {}", "SOLD OUT".yellow());
    } else {
        println!(
            "    Site price:    {}",
            format_price(result.candidate_price, &result.candidate_currency)
        );
    }
    println!("    Catalog price: {}", format_price(entry.price_usd, "$"));

    if savings.is_negative() {
        println!(
            "    {}     -{}",
            "No savings".red(),
            format_price(savings.amount.abs(), "$")
        );
    } else {
        println!(
            "    {}      {} ({:.1}%)",
            "You save:".green(),
            format_price(savings.amount, "$"),
            savings.percentage
        );
    }
    println!("    {}\n", config.asset_link(&result.catalog_entry_id).dimmed());
}

/// Print the raw candidate set harvested by the scanner.
pub fn print_candidates(candidates: &[CandidateListing]) {
    if candidates.is_empty() {
        println!("No candidate listings found on this page.");
        return;
    }

    println!("\n{} candidate(s):\n", candidates.len());
    for candidate in candidates {
        let price = if candidate.is_sold_out {
            "SOLD OUT".to_string()
        } else {
            format_price(candidate.price, &candidate.currency)
        };
        println!("  {:<12} {}", price, candidate.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5, "$"), "$1234.50");
        assert_eq!(format_price(89.999, "£"), "£90.00");
        assert_eq!(format_price(0.0, "€"), "€0.00");
    }
}
