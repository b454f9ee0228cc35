use crate::error::ComputationFailure;
use crate::types::{Breakdown, ResultSet, ANNUAL_FEE};

/// Return on the annual fee, in percent. A profile worth nothing reads as a
/// total loss of the fee.
pub fn roi_for(value: f64) -> f64 {
    if value > 0.0 {
        (value - ANNUAL_FEE) / ANNUAL_FEE * 100.0
    } else {
        -100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

pub fn sum_breakdown(breakdown: &Breakdown) -> Totals {
    let mut totals = Totals {
        value: 0.0,
        min: 0.0,
        max: 0.0,
    };
    for entry in breakdown.values() {
        totals.value += entry.value;
        totals.min += entry.min;
        totals.max += entry.max;
    }
    totals
}

/// A NaN contribution counts as 0, both in the entry itself and in the
/// totals. Infinities are left alone and fail the aggregate.
pub fn scrub_nan(breakdown: &mut Breakdown) {
    for entry in breakdown.values_mut() {
        entry.value = zero_if_nan(entry.value);
        entry.min = zero_if_nan(entry.min);
        entry.max = zero_if_nan(entry.max);
    }
}

pub fn aggregate(mut breakdown: Breakdown) -> Result<ResultSet, ComputationFailure> {
    scrub_nan(&mut breakdown);
    let totals = sum_breakdown(&breakdown);
    if !(totals.value.is_finite() && totals.min.is_finite() && totals.max.is_finite()) {
        return Err(ComputationFailure::non_finite("aggregate"));
    }

    let result = ResultSet {
        total_value: totals.value,
        total_cost: ANNUAL_FEE,
        roi: roi_for(totals.value),
        min_roi: roi_for(totals.min),
        max_roi: roi_for(totals.max),
        breakdown,
    };
    validate(&result)?;
    Ok(result)
}

/// Shape check run on every result before it is handed out.
pub fn validate(result: &ResultSet) -> Result<(), ComputationFailure> {
    let headline = [
        ("totalValue", result.total_value),
        ("roi", result.roi),
        ("minROI", result.min_roi),
        ("maxROI", result.max_roi),
    ];
    for (field, value) in headline {
        if !value.is_finite() {
            return Err(ComputationFailure::malformed_result(field));
        }
    }
    if result.total_cost != ANNUAL_FEE {
        return Err(ComputationFailure::malformed_result("totalCost"));
    }
    for (category, entry) in &result.breakdown {
        if !(entry.value.is_finite() && entry.min.is_finite() && entry.max.is_finite()) {
            return Err(ComputationFailure::malformed_result(format!(
                "breakdown.{category}"
            )));
        }
    }
    Ok(())
}

fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BenefitCategory, BenefitEntry};

    #[test]
    fn roi_is_minus_one_hundred_without_value() {
        assert_eq!(roi_for(0.0), -100.0);
        assert_eq!(roi_for(-12.0), -100.0);
    }

    #[test]
    fn roi_breaks_even_at_the_fee() {
        assert_eq!(roi_for(795.0), 0.0);
        assert!((roi_for(1_590.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn nan_contributions_count_as_zero() {
        let mut breakdown = Breakdown::new();
        breakdown.insert(BenefitCategory::Points, BenefitEntry::exact(100.0, ""));
        breakdown.insert(
            BenefitCategory::Lyft,
            BenefitEntry::with_band(f64::NAN, 10.0, f64::NAN, ""),
        );
        let result = aggregate(breakdown).expect("NaN contributions aggregate");
        assert_eq!(result.total_value, 100.0);
        assert_eq!(result.min_value(), 110.0);
        assert_eq!(result.max_value(), 100.0);
        let lyft = result.entry(BenefitCategory::Lyft).expect("lyft kept");
        assert_eq!((lyft.value, lyft.min, lyft.max), (0.0, 10.0, 0.0));
        assert!(validate(&result).is_ok());
    }

    #[test]
    fn infinite_entries_fail_the_aggregate() {
        let mut breakdown = Breakdown::new();
        breakdown.insert(
            BenefitCategory::Points,
            BenefitEntry::exact(f64::INFINITY, ""),
        );
        assert_eq!(
            aggregate(breakdown),
            Err(ComputationFailure::non_finite("aggregate"))
        );
    }

    #[test]
    fn validate_flags_non_finite_entries() {
        let mut result = ResultSet::fallback();
        result.breakdown.insert(
            BenefitCategory::Peloton,
            BenefitEntry::with_band(1.0, f64::NAN, 1.0, ""),
        );
        assert_eq!(
            validate(&result),
            Err(ComputationFailure::malformed_result("breakdown.peloton"))
        );
    }

    #[test]
    fn validate_flags_tampered_fee() {
        let mut result = ResultSet::fallback();
        result.total_cost = 550.0;
        assert_eq!(
            validate(&result),
            Err(ComputationFailure::malformed_result("totalCost"))
        );
    }
}
