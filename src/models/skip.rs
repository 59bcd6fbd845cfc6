use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One skip option offered at a location.
///
/// Mirrors the wire format of the skips-by-location endpoint field for
/// field. Records are immutable once deserialized; they live for one view
/// activation and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    /// Unique identifier within a fetched collection
    pub id: i64,
    /// Container capacity in cubic yards
    pub size: u32,
    /// Rental duration in days
    pub hire_period_days: u32,
    /// Optional delivery surcharge
    pub transport_cost: Option<f64>,
    /// Optional waste-weight surcharge
    pub per_tonne_cost: Option<f64>,
    /// Base price before tax, in whole-currency units
    pub price_before_vat: f64,
    /// Tax rate as a percentage (20 means 20%)
    pub vat: f64,
    pub postcode: String,
    pub area: String,
    /// Whether this skip is disallowed at the location
    pub forbidden: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Road placement eligibility
    pub allowed_on_road: bool,
    /// Heavy waste eligibility
    pub allows_heavy_waste: bool,
}
