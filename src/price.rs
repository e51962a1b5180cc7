//! Price and availability signal parsing.
//!
//! Each extraction strategy is a pure function from a [`Neighborhood`]
//! to an optional [`PriceSignal`]. Strategies are tried in a fixed
//! order and the first success wins, keeping the policy testable and
//! reorderable independently of tree traversal.

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency symbol immediately before or after a numeric token.
static SYMBOL_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([£$€₦])\s*([0-9][0-9,]*(?:\.[0-9]+)?)|([0-9][0-9,]*(?:\.[0-9]+)?)\s*([£$€₦])")
        .expect("Invalid symbol price regex")
});

/// Bare numeric token: digits, comma separators, at most one decimal point.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?").expect("Invalid number regex")
});

/// Symbol-before-number only; used by the nested fallback scan.
static NESTED_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([$£€₦])\s*([0-9][0-9,]*(?:\.[0-9]+)?)").expect("Invalid nested price regex")
});

/// Words that mark surrounding text as price-bearing.
const PRICE_CONTEXT_WORDS: &[&str] = &["price", "cost", "sold", "bid", "result"];

/// Unit and measure fragments that disqualify a bare number as a price.
/// Matched as substrings of the lowercased price text.
const NON_PRICE_UNITS: &[&str] = &[
    "ml", "cl", "l", "oz", "mg", "g", "kg", "abv", "%", "proof", "year", "aged",
];

/// Bare numbers outside this range are never treated as prices.
const MIN_PLAUSIBLE_PRICE: f64 = 5.0;
const MAX_PLAUSIBLE_PRICE: f64 = 100_000.0;

/// A validated price with the currency it was quoted in.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSignal {
    pub amount: f64,
    pub currency: String,
}

/// The text neighborhood of one candidate title, assembled by the
/// scanner from the candidate's structural surroundings.
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    /// Text of the located price-bearing element (may be empty).
    pub price_text: String,
    /// Full text of the candidate's parent subtree.
    pub context_text: String,
    /// Subtree texts of descendants of the parent's `div` children, in
    /// document order. Input to the nested fallback scan.
    pub nested_texts: Vec<String>,
}

type Strategy = fn(&Neighborhood) -> Option<PriceSignal>;

/// Ordered extraction policy; first success wins.
const STRATEGIES: &[Strategy] = &[symbol_adjacent, contextual_number, nested_symbol_scan];

/// Run the extraction policy over a neighborhood.
pub fn extract_price(neighborhood: &Neighborhood) -> Option<PriceSignal> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(neighborhood))
}

/// A currency symbol adjacent to a number is the strongest signal and
/// needs no further context.
fn symbol_adjacent(neighborhood: &Neighborhood) -> Option<PriceSignal> {
    let caps = SYMBOL_PRICE_RE.captures(&neighborhood.price_text)?;
    let (symbol, number) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
        (Some(symbol), Some(number), _, _) => (symbol, number),
        (_, _, Some(number), Some(symbol)) => (symbol, number),
        _ => return None,
    };
    let amount = parse_amount(number.as_str())?;
    Some(PriceSignal {
        amount,
        currency: symbol.as_str().to_string(),
    })
}

/// A bare number counts as a price only in price-bearing context, with
/// no unit token nearby, and within the plausible retail range.
fn contextual_number(neighborhood: &Neighborhood) -> Option<PriceSignal> {
    let element_text = neighborhood.price_text.to_lowercase();
    let context_text = neighborhood.context_text.to_lowercase();

    let has_context = PRICE_CONTEXT_WORDS
        .iter()
        .any(|word| element_text.contains(word) || context_text.contains(word));
    let has_units = NON_PRICE_UNITS
        .iter()
        .any(|unit| element_text.contains(unit));
    if !has_context || has_units {
        return None;
    }

    let number = NUMBER_RE.find(&neighborhood.price_text)?;
    let amount = parse_amount(number.as_str())?;
    if !(MIN_PLAUSIBLE_PRICE..=MAX_PLAUSIBLE_PRICE).contains(&amount) {
        return None;
    }
    Some(PriceSignal {
        amount,
        currency: "$".to_string(),
    })
}

/// Last resort: depth-first scan of the nested neighborhood texts for
/// any symbol+number pair; the first hit in document order wins.
fn nested_symbol_scan(neighborhood: &Neighborhood) -> Option<PriceSignal> {
    for text in &neighborhood.nested_texts {
        if let Some(caps) = NESTED_PRICE_RE.captures(text) {
            if let Some(amount) = parse_amount(&caps[2]) {
                return Some(PriceSignal {
                    amount,
                    currency: caps[1].to_string(),
                });
            }
        }
    }
    None
}

/// Strip thousands separators and parse the numeric token.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}
