use crate::error::ComputationFailure;
use crate::profile::InputProfile;
use crate::types::BenefitEntry;

/// Worst-case redemption value of one point, in dollars.
pub const MIN_POINT_RATE: f64 = 0.015;
/// Midpoint redemption value used for point estimates.
pub const POINT_RATE: f64 = 0.0175;
/// Best-case redemption value of one point.
pub const MAX_POINT_RATE: f64 = 0.020;

const CHASE_TRAVEL_MULTIPLIER: f64 = 8.0;
const FLIGHTS_HOTELS_MULTIPLIER: f64 = 4.0;
const DINING_MULTIPLIER: f64 = 3.0;
const OTHER_MULTIPLIER: f64 = 1.0;

/// Points earned on a year of card spend.
pub fn total_points(profile: &InputProfile) -> Result<f64, ComputationFailure> {
    let total = profile.chase_travel * CHASE_TRAVEL_MULTIPLIER
        + profile.flights_hotels * FLIGHTS_HOTELS_MULTIPLIER
        + profile.dining * DINING_MULTIPLIER
        + profile.other_spending * OTHER_MULTIPLIER;
    if !total.is_finite() {
        return Err(ComputationFailure::non_finite("points"));
    }
    Ok(total)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointValuation {
    pub min: f64,
    pub value: f64,
    pub max: f64,
}

pub fn price_points(points: f64) -> PointValuation {
    PointValuation {
        min: points * MIN_POINT_RATE,
        value: points * POINT_RATE,
        max: points * MAX_POINT_RATE,
    }
}

pub fn points_entry(points: f64) -> BenefitEntry {
    let priced = price_points(points);
    BenefitEntry::with_band(
        priced.value,
        priced.min,
        priced.max,
        format!("{points:.0} points earned on annual spend"),
    )
}
