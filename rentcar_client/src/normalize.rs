//! Normalization from wire shapes into the strict core model.
//!
//! This is the one place upstream inconsistency is allowed to exist; past
//! it, every item satisfies the core model's invariants. Malformed pieces
//! degrade the affected field (clamped price, dropped attribute) rather
//! than the whole record; only hidden cars are dropped entirely.

use log::warn;
use rust_decimal::Decimal;

use rentcar_core::{CatalogItem, ItemId, attrs};

use crate::wire::{RawCar, RawTourPackage};

/// Convert a wire car into a catalog item. Returns `None` for cars the
/// admin has hidden from the public listing.
pub fn car_to_item(raw: RawCar) -> Option<CatalogItem> {
    if !raw.is_showing {
        return None;
    }

    let price = decimal_price(raw.price, &raw.name);
    // Ids are prefixed per kind so a car and a tour with the same backend
    // id cannot collide in a mixed catalog.
    let id = ItemId::new(format!("car-{}", raw.id.into_string()));

    let mut item = CatalogItem::new(id, raw.name, price)
        .with_category(raw.car_type)
        .with_brand(raw.brand);

    if let Some(capacity) = raw.capacity {
        item = item.with_numeric_attribute(attrs::CAPACITY, capacity);
    }
    if let Some(year) = raw.year {
        item = item.with_numeric_attribute(attrs::YEAR, year);
    }
    if let Some(rating) = raw.rating {
        item = item.with_numeric_attribute(attrs::RATING, rating);
    }
    if let Some(transmission) = raw.transmission {
        item = item.with_text_attribute(attrs::TRANSMISSION, transmission.into_vec());
    }
    if let Some(fuel_type) = raw.fuel_type {
        item = item.with_text_attribute(attrs::FUEL_TYPE, vec![fuel_type]);
    }
    if let Some(description) = raw.short_description {
        item = item.with_search_term(description);
    }

    Some(item)
}

/// Convert a wire tour package into a catalog item.
pub fn tour_to_item(raw: RawTourPackage) -> CatalogItem {
    let price = decimal_price(raw.price, &raw.name);
    let id = ItemId::new(format!("tour-{}", raw.id.into_string()));

    let mut item = CatalogItem::new(id, raw.name, price);

    if let Some(duration) = &raw.duration {
        match parse_duration_days(duration) {
            Some(days) => {
                item = item.with_numeric_attribute(attrs::DURATION_DAYS, days);
            }
            None => {
                warn!("unparseable duration '{duration}', dropping duration_days attribute");
            }
        }
    }
    if let Some(min_people) = raw.min_people {
        item = item.with_numeric_attribute(attrs::MIN_PEOPLE, min_people);
    }
    if let Some(description) = raw.short_description {
        item = item.with_search_term(description);
    }
    for destination in &raw.destinations {
        item = item.with_search_term(destination);
    }
    if !raw.destinations.is_empty() {
        item = item.with_text_attribute(attrs::DESTINATIONS, raw.destinations);
    }

    item
}

/// Leading integer of a duration display string ("3 Hari 2 Malam" -> 3).
fn parse_duration_days(text: &str) -> Option<f64> {
    let days: f64 = text.split_whitespace().next()?.parse().ok()?;
    if days.is_finite() { Some(days) } else { None }
}

fn decimal_price(price: f64, name: &str) -> Decimal {
    let value = match Decimal::try_from(price) {
        Ok(value) => value,
        Err(_) => {
            warn!("unrepresentable price {price} for '{name}', using zero");
            Decimal::ZERO
        }
    };
    if value < Decimal::ZERO {
        warn!("negative price {price} for '{name}' clamped to zero");
        Decimal::ZERO
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{OneOrMany, RawId};

    fn raw_car(name: &str) -> RawCar {
        RawCar {
            id: RawId::Number(1),
            name: name.to_string(),
            brand: "Toyota".to_string(),
            car_type: "MPV".to_string(),
            price: 350_000.0,
            capacity: Some(7.0),
            transmission: Some(OneOrMany::One("Manual".to_string())),
            fuel_type: Some("Bensin".to_string()),
            year: Some(2022.0),
            rating: None,
            is_showing: true,
            short_description: Some("Mobil keluarga".to_string()),
            description: None,
            features: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_car_maps_fields_and_attributes() {
        let item = car_to_item(raw_car("Avanza")).unwrap();
        assert_eq!(item.id.as_str(), "car-1");
        assert_eq!(item.category.as_deref(), Some("MPV"));
        assert_eq!(item.brand.as_deref(), Some("Toyota"));
        assert_eq!(item.numeric_attribute(attrs::CAPACITY), Some(7.0));
        assert_eq!(
            item.text_attribute(attrs::TRANSMISSION),
            Some(&["Manual".to_string()][..])
        );
        assert!(item.searchable_text().contains("mobil keluarga"));
    }

    #[test]
    fn test_hidden_car_is_dropped() {
        let mut raw = raw_car("Avanza");
        raw.is_showing = false;
        assert_eq!(car_to_item(raw), None);
    }

    #[test]
    fn test_negative_price_clamps_to_zero() {
        let mut raw = raw_car("Avanza");
        raw.price = -5.0;
        let item = car_to_item(raw).unwrap();
        assert_eq!(item.price, Decimal::ZERO);
    }

    #[test]
    fn test_tour_duration_parses_leading_integer() {
        let raw = RawTourPackage {
            id: RawId::Text("bromo".to_string()),
            name: "Bromo Sunrise".to_string(),
            price: 750_000.0,
            short_description: None,
            description: None,
            duration: Some("2 Hari 1 Malam".to_string()),
            min_people: Some(4.0),
            destinations: vec!["Bromo".to_string()],
        };
        let item = tour_to_item(raw);
        assert_eq!(item.id.as_str(), "tour-bromo");
        assert_eq!(item.numeric_attribute(attrs::DURATION_DAYS), Some(2.0));
        assert_eq!(item.numeric_attribute(attrs::MIN_PEOPLE), Some(4.0));
        assert!(item.searchable_text().contains("bromo"));
    }

    #[test]
    fn test_unparseable_duration_drops_only_the_attribute() {
        let raw = RawTourPackage {
            id: RawId::Text("open".to_string()),
            name: "Open Trip".to_string(),
            price: 100.0,
            short_description: None,
            description: None,
            duration: Some("Fleksibel".to_string()),
            min_people: None,
            destinations: vec![],
        };
        let item = tour_to_item(raw);
        assert_eq!(item.numeric_attribute(attrs::DURATION_DAYS), None);
        assert_eq!(item.name, "Open Trip");
    }
}
