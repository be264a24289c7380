use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single rentable skip option for a location.
///
/// Mirrors the record shape returned by `/skips/by-location`. The
/// `transport_cost` and `per_tonne_cost` fields are decimal strings the UI
/// treats as opaque; `forbidden`, `allowed_on_road` and `allows_heavy_waste`
/// are part of the contract but drive no behavior in this view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOffering {
    pub id: u64,
    /// Capacity in cubic yards.
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: String,
    pub per_tonne_cost: String,
    pub price_before_vat: f64,
    /// Tax amount, additive (not a rate).
    pub vat: f64,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SkipOffering {
    /// VAT-inclusive price.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.price_before_vat + self.vat
    }

    /// Total price formatted to exactly two decimal places, display only.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.total_price())
    }
}

impl Display for SkipOffering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-Yard Skip", self.size)
    }
}

/// Fixture for unit tests across the crate.
#[cfg(test)]
pub(crate) fn test_offering(id: u64) -> SkipOffering {
    SkipOffering {
        id,
        size: 4,
        hire_period_days: 14,
        transport_cost: "0.00".to_string(),
        per_tonne_cost: "0.00".to_string(),
        price_before_vat: 150.00,
        vat: 30.00,
        postcode: "NR32".to_string(),
        area: "Lowestoft".to_string(),
        forbidden: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        allowed_on_road: true,
        allows_heavy_waste: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(id: u64) -> SkipOffering {
        test_offering(id)
    }

    #[test]
    fn display_price_adds_vat_to_base() {
        let o = offering(1);
        assert_eq!(o.display_price(), "180.00");
    }

    #[test]
    fn display_price_rounds_to_two_decimals() {
        let mut o = offering(1);
        o.price_before_vat = 175.995;
        o.vat = 35.199;
        assert_eq!(o.display_price(), "211.19");
    }

    #[test]
    fn display_price_is_stable_across_renders() {
        let o = offering(1);
        let first = o.display_price();
        for _ in 0..10 {
            assert_eq!(o.display_price(), first);
        }
    }

    #[test]
    fn deserializes_the_full_wire_contract() {
        let json = r#"{
            "id": 17933,
            "size": 4,
            "hire_period_days": 14,
            "transport_cost": "120.00",
            "per_tonne_cost": "84.00",
            "price_before_vat": 278.0,
            "vat": 55.6,
            "postcode": "NR32",
            "area": "Lowestoft",
            "forbidden": false,
            "created_at": "2025-04-03T13:51:46.897146Z",
            "updated_at": "2025-04-07T13:16:52.813Z",
            "allowed_on_road": true,
            "allows_heavy_waste": true
        }"#;
        let o: SkipOffering = serde_json::from_str(json).unwrap();
        assert_eq!(o.id, 17933);
        assert_eq!(o.size, 4);
        assert_eq!(o.hire_period_days, 14);
        assert_eq!(o.transport_cost, "120.00");
        assert!(!o.forbidden);
        assert!(o.allowed_on_road);
        assert_eq!(o.display_price(), "333.60");
    }

    #[test]
    fn display_names_the_size() {
        assert_eq!(offering(1).to_string(), "4-Yard Skip");
    }
}
