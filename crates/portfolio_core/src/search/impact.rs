//! Impact magnitude parsing for ranking.
//!
//! # Invariants
//! - Parsing is total: any input yields a magnitude, unparseable text yields 0.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; a suffix must end its word so `5 MONTHS` stays 5.
static MAGNITUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:([KM])\b)?").expect("valid magnitude regex")
});

/// Converts free-text impact such as `50K+`, `12,000+` or `100+` into a
/// rough number used for ranking.
///
/// Rules: commas are stripped and text is upper-cased; the first number is
/// scaled by a directly following `K` (thousand) or `M` (million); without a
/// suffix the number is taken literally; no number yields 0.
///
/// Only the first ASCII number counts. `5 months, 10K users` ranks as 5, not
/// as the later `10K`.
pub fn parse_impact(impact: &str) -> u64 {
    let normalized = impact.replace(',', "").to_uppercase();
    let Some(caps) = MAGNITUDE_RE.captures(normalized.trim()) else {
        return 0;
    };
    let Some(number) = caps
        .get(1)
        .and_then(|value| value.as_str().parse::<f64>().ok())
    else {
        return 0;
    };
    let scale = match caps.get(2).map(|suffix| suffix.as_str()) {
        Some("K") => 1_000.0,
        Some("M") => 1_000_000.0,
        _ => 1.0,
    };
    (number * scale).round() as u64
}

/// Magnitude of an optional impact field; missing impact ranks as 0.
pub fn impact_magnitude(impact: Option<&str>) -> u64 {
    impact.map(parse_impact).unwrap_or(0)
}
