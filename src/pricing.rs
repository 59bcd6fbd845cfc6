//! Pure pricing and display helpers for skip records.
//!
//! Every function here is total and side-effect-free over a well-formed
//! record. Numeric fields are trusted to be non-negative; that precondition
//! is documented, not validated.

use crate::models::Skip;

/// Final price including VAT, rounded half-up to the nearest whole
/// currency unit.
pub fn final_price(skip: &Skip) -> i64 {
    (skip.price_before_vat * (1.0 + skip.vat / 100.0)).round() as i64
}

/// The VAT portion of the price, unrounded.
pub fn vat_amount(skip: &Skip) -> f64 {
    skip.price_before_vat * skip.vat / 100.0
}

/// Display name, e.g. "8 Yard Skip"
pub fn display_name(skip: &Skip) -> String {
    format!("{} Yard Skip", skip.size)
}

/// Hire description, e.g. "14 day hire period"
pub fn description(skip: &Skip) -> String {
    format!("{} day hire period", skip.hire_period_days)
}

/// One-line capacity blurb for a size class
pub fn capacity_summary(size: u32) -> &'static str {
    if size <= 4 {
        "Perfect for small home projects"
    } else if size <= 8 {
        "Ideal for medium renovations"
    } else if size <= 12 {
        "Great for larger clearouts"
    } else if size <= 16 {
        "Perfect for major projects"
    } else {
        "Commercial grade capacity"
    }
}

/// Approximate external dimensions for a size, width scaling with capacity.
pub fn approx_dimensions(size: u32) -> String {
    let width = 1.2 + (size as f64 - 4.0) * 0.15;
    format!("{:.1}m x 1.8m x 1.2m", width)
}

/// The 6 and 8 yard sizes are the most commonly hired.
pub fn is_popular(size: u32) -> bool {
    size == 6 || size == 8
}

/// Format a whole-unit price for display, e.g. "£240"
pub fn format_price(amount: i64) -> String {
    format!("£{}", amount)
}
