//! Wire-level shapes for the upstream rental backend.
//!
//! The backend is loose about shapes: ids arrive as numbers or strings,
//! `transmission` as a single string or an array, field names in camelCase
//! or snake_case depending on the endpoint version. Everything here
//! decodes tolerantly; `normalize` turns it into the strict core model.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The `{ "data": [...] }` wrapper the backend puts around list responses.
/// A missing `data` field decodes as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// A value that may arrive as a single element or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Canonicalize to the list form.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// An id that may arrive as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// A car as the backend sends it.
#[derive(Debug, Deserialize)]
pub struct RawCar {
    pub id: RawId,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub price: f64,
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub transmission: Option<OneOrMany<String>>,
    #[serde(default, alias = "fuelType")]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub year: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Admin visibility toggle; hidden cars never reach the public pages.
    #[serde(default = "default_true", alias = "isShowing")]
    pub is_showing: bool,
    #[serde(default, alias = "shortDescription")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A tour package as the backend sends it.
#[derive(Debug, Deserialize)]
pub struct RawTourPackage {
    pub id: RawId,
    pub name: String,
    pub price: f64,
    #[serde(default, alias = "shortDescription")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Display text like "3 Hari 2 Malam"; the leading integer becomes the
    /// `duration_days` attribute.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, alias = "minPeople")]
    pub min_people: Option<f64>,
    #[serde(default)]
    pub destinations: Vec<String>,
}

fn default_true() -> bool {
    true
}
