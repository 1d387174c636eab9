//! Restaurant records as supplied by the data collaborator (seed fixture or API).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// One of the four fixed price bands (in pesos).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum BudgetRange {
    #[serde(rename = "10-50")]
    Under50,
    #[serde(rename = "50-150")]
    Under150,
    #[serde(rename = "150-500")]
    Under500,
    #[serde(rename = "500-1000")]
    Under1000,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Under50,
        BudgetRange::Under150,
        BudgetRange::Under500,
        BudgetRange::Under1000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Under50 => "10-50",
            BudgetRange::Under150 => "50-150",
            BudgetRange::Under500 => "150-500",
            BudgetRange::Under1000 => "500-1000",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BudgetRange::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown budget range '{}'", s))
    }
}

/// Campus gate a restaurant is closest to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum Side {
    #[serde(rename = "Main Gate")]
    MainGate,
    #[serde(rename = "Gate Six")]
    GateSix,
    #[serde(rename = "Inside the School")]
    InsideTheSchool,
    #[serde(rename = "North Gate")]
    NorthGate,
    #[serde(rename = "Hospital Gate")]
    HospitalGate,
}

impl Side {
    pub const ALL: [Side; 5] = [
        Side::MainGate,
        Side::GateSix,
        Side::InsideTheSchool,
        Side::NorthGate,
        Side::HospitalGate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::MainGate => "Main Gate",
            Side::GateSix => "Gate Six",
            Side::InsideTheSchool => "Inside the School",
            Side::NorthGate => "North Gate",
            Side::HospitalGate => "Hospital Gate",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum RestaurantType {
    Food,
    Drink,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum PaymentMode {
    Cash,
    GCash,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    /// 0.0 - 5.0, one decimal.
    pub rating: f64,
    pub location: String,
    pub budget_range: BudgetRange,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RestaurantType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<Vec<PaymentMode>>,
    pub sides: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_fixture_shape() {
        let r: Restaurant = serde_json::from_value(json!({
            "id": "7",
            "name": "JAP-IT Food Hauz",
            "cuisine": "Rice Meal",
            "rating": 4.5,
            "location": "108 Nori, Mabini Extension",
            "budgetRange": "10-50",
            "type": "Food",
            "paymentMode": ["Cash", "GCash"],
            "sides": "Main Gate"
        }))
        .unwrap();

        assert_eq!(r.budget_range, BudgetRange::Under50);
        assert_eq!(r.kind, Some(RestaurantType::Food));
        assert_eq!(r.sides, Side::MainGate);
        assert!(r.profile_image.is_none());
    }

    #[test]
    fn budget_range_parses_band_labels() {
        assert_eq!("150-500".parse::<BudgetRange>(), Ok(BudgetRange::Under500));
        assert_eq!(" 500-1000 ".parse::<BudgetRange>(), Ok(BudgetRange::Under1000));
        assert!("₱₱".parse::<BudgetRange>().is_err());
    }
}
