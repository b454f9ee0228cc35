use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Annual fee charged for the card, in dollars.
pub const ANNUAL_FEE: f64 = 795.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum BenefitCategory {
    Points,
    TravelCredit,
    DiningCredit,
    EditCredit,
    StubhubCredit,
    Dashpass,
    DoorDashCredits,
    Lyft,
    Peloton,
    PriorityPass,
    GlobalEntry,
    AppleServices,
    HighSpender,
}

impl BenefitCategory {
    pub const ALL: [BenefitCategory; 13] = [
        BenefitCategory::Points,
        BenefitCategory::TravelCredit,
        BenefitCategory::DiningCredit,
        BenefitCategory::EditCredit,
        BenefitCategory::StubhubCredit,
        BenefitCategory::Dashpass,
        BenefitCategory::DoorDashCredits,
        BenefitCategory::Lyft,
        BenefitCategory::Peloton,
        BenefitCategory::PriorityPass,
        BenefitCategory::GlobalEntry,
        BenefitCategory::AppleServices,
        BenefitCategory::HighSpender,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::TravelCredit => "travelCredit",
            Self::DiningCredit => "diningCredit",
            Self::EditCredit => "editCredit",
            Self::StubhubCredit => "stubhubCredit",
            Self::Dashpass => "dashpass",
            Self::DoorDashCredits => "doorDashCredits",
            Self::Lyft => "lyft",
            Self::Peloton => "peloton",
            Self::PriorityPass => "priorityPass",
            Self::GlobalEntry => "globalEntry",
            Self::AppleServices => "appleServices",
            Self::HighSpender => "highSpender",
        }
    }

    /// Categories that stay in the breakdown even when worth nothing.
    pub fn always_listed(&self) -> bool {
        matches!(
            self,
            Self::Points | Self::TravelCredit | Self::DiningCredit
        )
    }
}

impl Display for BenefitCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[derive(Debug, Error)]
#[error("unknown benefit category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for BenefitCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Point estimate of one benefit with its `[min, max]` band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenefitEntry {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub details: String,
}

impl BenefitEntry {
    /// Entry whose band collapses onto the value.
    pub fn exact(value: f64, details: impl Into<String>) -> Self {
        Self {
            value,
            min: value,
            max: value,
            details: details.into(),
        }
    }

    /// Entry whose band is `[value * low, value * high]`.
    pub fn scaled(value: f64, low: f64, high: f64, details: impl Into<String>) -> Self {
        Self {
            value,
            min: value * low,
            max: value * high,
            details: details.into(),
        }
    }

    pub fn with_band(value: f64, min: f64, max: f64, details: impl Into<String>) -> Self {
        Self {
            value,
            min,
            max,
            details: details.into(),
        }
    }
}

pub type Breakdown = BTreeMap<BenefitCategory, BenefitEntry>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultSet {
    #[serde(rename = "totalValue")]
    pub total_value: f64,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    pub roi: f64,
    #[serde(rename = "minROI")]
    pub min_roi: f64,
    #[serde(rename = "maxROI")]
    pub max_roi: f64,
    pub breakdown: Breakdown,
}

impl ResultSet {
    /// Known-safe state substituted for any failed computation.
    pub fn fallback() -> Self {
        Self {
            total_value: 0.0,
            total_cost: ANNUAL_FEE,
            roi: -100.0,
            min_roi: -100.0,
            max_roi: -100.0,
            breakdown: Breakdown::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Lower edge of the value band, summed over the breakdown.
    pub fn min_value(&self) -> f64 {
        self.breakdown.values().map(|entry| entry.min).sum()
    }

    /// Upper edge of the value band, summed over the breakdown.
    pub fn max_value(&self) -> f64 {
        self.breakdown.values().map(|entry| entry.max).sum()
    }

    /// Benefit value left after paying the fee.
    pub fn net_value(&self) -> f64 {
        self.total_value - self.total_cost
    }

    pub fn entry(&self, category: BenefitCategory) -> Option<&BenefitEntry> {
        self.breakdown.get(&category)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fallback_serializes_to_expected_shape() {
        let value = serde_json::to_value(ResultSet::fallback()).expect("serialize fallback");
        assert_eq!(
            value,
            json!({
                "totalValue": 0.0,
                "totalCost": 795.0,
                "roi": -100.0,
                "minROI": -100.0,
                "maxROI": -100.0,
                "breakdown": {}
            })
        );
    }

    #[test]
    fn categories_use_camel_case_keys_on_the_wire() {
        let mut breakdown = Breakdown::new();
        breakdown.insert(
            BenefitCategory::DoorDashCredits,
            BenefitEntry::exact(60.0, "restaurant orders"),
        );
        let value = serde_json::to_value(&breakdown).expect("serialize breakdown");
        assert!(value.get("doorDashCredits").is_some());
    }

    #[test]
    fn parses_category_keys() {
        assert_eq!(
            "highSpender".parse::<BenefitCategory>().expect("parse"),
            BenefitCategory::HighSpender
        );
        assert_eq!(
            "PRIORITYPASS".parse::<BenefitCategory>().expect("parse"),
            BenefitCategory::PriorityPass
        );
        assert!("lounge".parse::<BenefitCategory>().is_err());
    }

    #[test]
    fn scaled_entry_applies_band_multipliers() {
        let entry = BenefitEntry::scaled(100.0, 0.8, 1.2, "");
        assert!((entry.min - 80.0).abs() < 1e-9);
        assert!((entry.max - 120.0).abs() < 1e-9);
    }
}
