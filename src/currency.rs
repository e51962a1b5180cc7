//! Currency normalization and savings math.
//!
//! Conversion uses a fixed table, not live rates. Rates are hard-coded
//! constants; do not wire in a live rate source without product sign-off.

/// Naira per reference unit.
const NGN_PER_USD: f64 = 1602.0;
/// Euro to reference unit.
const EUR_TO_USD: f64 = 1.14;
/// Pound sterling to reference unit.
const GBP_TO_USD: f64 = 1.31;

/// Convert an amount in the given currency (symbol or ISO code) to the
/// reference unit. Unrecognized currencies pass through unchanged.
pub fn to_usd(amount: f64, currency: &str) -> f64 {
    match currency.trim() {
        "₦" | "NGN" => amount / NGN_PER_USD,
        "€" | "EUR" => amount * EUR_TO_USD,
        "£" | "GBP" => amount * GBP_TO_USD,
        _ => amount,
    }
}

/// Savings of a resolved match relative to the catalog price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    /// Reference-unit amount saved; negative when the catalog is pricier.
    pub amount: f64,
    /// Share of the site price saved, in percent (one decimal shown).
    pub percentage: f64,
}

impl Savings {
    /// Compute savings from a normalized site price and a catalog price.
    ///
    /// Sold-out listings have no real site price to compare against, so
    /// the full catalog price counts as the saving.
    pub fn compute(converted_price_usd: f64, catalog_price_usd: f64, is_sold_out: bool) -> Self {
        if is_sold_out {
            return Self {
                amount: catalog_price_usd,
                percentage: 100.0,
            };
        }
        let amount = converted_price_usd - catalog_price_usd;
        let percentage = if converted_price_usd > 0.0 {
            amount / converted_price_usd * 100.0
        } else {
            0.0
        };
        Self { amount, percentage }
    }

    /// True when the catalog price is higher than the site price.
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }
}
