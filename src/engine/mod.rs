pub mod aggregate;
pub mod credits;
pub mod high_spender;
pub mod points;
pub mod usage;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ComputationFailure;
use crate::profile::sanitize::normalize_profile;
use crate::profile::{sanitize, InputProfile};
use crate::types::{BenefitCategory, BenefitEntry, Breakdown, ResultSet};

pub use aggregate::roi_for;

/// Values a loosely-typed record. Never fails: anything that goes wrong
/// yields `ResultSet::fallback()`.
pub fn compute(raw: &Value) -> ResultSet {
    or_fallback(sanitize(raw).and_then(|profile| evaluate(&profile)))
}

/// Same as [`compute`] for a profile that is already typed.
pub fn compute_profile(profile: &InputProfile) -> ResultSet {
    or_fallback(evaluate(profile))
}

/// Full valuation with the failure path left visible to the caller.
pub fn evaluate(profile: &InputProfile) -> Result<ResultSet, ComputationFailure> {
    let mut profile = profile.clone();
    normalize_profile(&mut profile);

    let mut breakdown = Breakdown::new();
    let points = points::total_points(&profile)?;
    include(
        &mut breakdown,
        BenefitCategory::Points,
        points::points_entry(points),
    );
    for (category, entry) in credits::fixed_credits(&profile) {
        include(&mut breakdown, category, entry);
    }
    for (category, entry) in usage::usage_benefits(&profile) {
        include(&mut breakdown, category, entry);
    }
    if let Some(entry) = high_spender::high_spender_benefits(&profile) {
        include(&mut breakdown, BenefitCategory::HighSpender, entry);
    }

    let result = aggregate::aggregate(breakdown)?;
    debug!(
        total_value = result.total_value,
        roi = result.roi,
        categories = result.breakdown.len(),
        "valuation computed"
    );
    Ok(result)
}

// Zero-valued benefits are left out rather than listed at $0, except for the
// categories every card holder gets.
fn include(breakdown: &mut Breakdown, category: BenefitCategory, entry: BenefitEntry) {
    if category.always_listed() || entry.value > 0.0 {
        breakdown.insert(category, entry);
    }
}

fn or_fallback(result: Result<ResultSet, ComputationFailure>) -> ResultSet {
    match result {
        Ok(result) => result,
        Err(error) => {
            warn!("valuation failed, reporting zero benefits: {error}");
            ResultSet::fallback()
        }
    }
}
