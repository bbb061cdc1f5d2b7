//! Review request payload: subject property plus optional comparable data.
//!
//! Every field except `address` is an opaque optional string; nothing is
//! range-checked or parsed as a number. Field names follow the browser's JSON
//! (camelCase where the form sends camelCase), with serde aliases for the
//! earlier revision's comp field names.

use serde::{Deserialize, Serialize};

/// One request for a property review.
///
/// `address` uses `#[serde(default)]` so a body without the field lands on the
/// blank-address validation path instead of a deserialization rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Subject property address. Must be non-empty after trimming.
    #[serde(default)]
    pub address: String,
    /// Total square footage, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<String>,
    /// Condition grade (e.g. A–F), free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Assumed mortgage interest rate, free text.
    #[serde(default, rename = "interestRate", skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<String>,
    /// Comparable sales, in the order the client sent them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comps: Vec<SaleComp>,
    /// Rental comparables, structured records or free-text lines.
    #[serde(default, rename = "rentComps", skip_serializing_if = "Vec::is_empty")]
    pub rent_comps: Vec<RentComp>,
}

impl ReviewRequest {
    /// The address with surrounding whitespace removed; empty means invalid.
    pub fn trimmed_address(&self) -> &str {
        self.address.trim()
    }
}

/// One comparable sale. All members optional free text; aliases accept the
/// earlier revision's `addr`/`year` keys.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SaleComp {
    #[serde(default, alias = "addr", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, rename = "yearSold", alias = "year", skip_serializing_if = "Option::is_none")]
    pub year_sold: Option<String>,
}

/// One rental comparable: a structured record in the current revision, or a
/// flat free-text string as earlier clients sent. Untagged so both parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RentComp {
    Record(RentCompRecord),
    Text(String),
}

/// Structured rental comp fields, all optional free text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RentCompRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baths: Option<String>,
}
