//! Well-known attribute names shared between the engine and the
//! normalization layer.
//!
//! Items carry open attribute maps, so nothing stops a caller from using
//! other names; these are the ones the site actually filters and sorts on.

/// Seating capacity of a car (numeric).
pub const CAPACITY: &str = "capacity";

/// Model year of a car (numeric).
pub const YEAR: &str = "year";

/// Customer rating of a car (numeric).
pub const RATING: &str = "rating";

/// Length of a tour package in days (numeric).
pub const DURATION_DAYS: &str = "duration_days";

/// Minimum group size of a tour package (numeric).
pub const MIN_PEOPLE: &str = "min_people";

/// Available transmissions of a car (text, multi-valued).
pub const TRANSMISSION: &str = "transmission";

/// Fuel type of a car (text).
pub const FUEL_TYPE: &str = "fuel_type";

/// Destinations visited by a tour package (text, multi-valued).
pub const DESTINATIONS: &str = "destinations";
