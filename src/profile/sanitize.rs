use serde_json::{Map, Value};

use crate::error::ComputationFailure;
use crate::profile::{FieldKind, FieldValue, InputProfile, ProfileField};

/// Turns a loosely-typed record into a typed profile. Anything that is not an
/// object is rejected; inside an object, every unexpected shape degrades to
/// zero (numbers) or `false` (toggles).
pub fn sanitize(raw: &Value) -> Result<InputProfile, ComputationFailure> {
    match raw {
        Value::Object(record) => Ok(sanitize_record(record)),
        _ => Err(ComputationFailure::MalformedInput),
    }
}

pub fn sanitize_record(record: &Map<String, Value>) -> InputProfile {
    let mut profile = InputProfile::zeroed();
    for field in ProfileField::ALL {
        let raw = record.get(field.key());
        match field.kind() {
            FieldKind::Toggle => {
                profile.set_toggle(field, coerce_toggle(raw));
            }
            kind => {
                profile.set_number(field, kind.normalize(coerce_number(raw)));
            }
        }
    }
    profile
}

/// Re-applies the coercion rules to a profile that was built in code rather
/// than parsed, so NaN, infinities and out-of-range amounts never reach the
/// engine.
pub fn normalize_profile(profile: &mut InputProfile) {
    for field in ProfileField::ALL {
        let kind = field.kind();
        if let FieldValue::Number(value) = profile.value(field) {
            let finite = if value.is_finite() { value } else { 0.0 };
            profile.set_number(field, kind.normalize(finite));
        }
    }
}

pub fn coerce_number(value: Option<&Value>) -> f64 {
    value.and_then(to_f64).filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn coerce_toggle(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

/// Parses what a user typed into a numeric box. Blank or garbage reads as 0.
pub fn parse_number_text(text: &str) -> f64 {
    let sanitized = text.trim().replace([',', '$', '_'], "");
    sanitized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_non_object_records() {
        for raw in [json!(null), json!(42), json!("dining"), json!([1, 2, 3])] {
            assert_eq!(sanitize(&raw), Err(ComputationFailure::MalformedInput));
        }
    }

    #[test]
    fn missing_fields_read_as_zero_and_false() {
        let profile = sanitize(&json!({})).expect("object sanitizes");
        assert_eq!(profile, InputProfile::zeroed());
    }

    #[test]
    fn unexpected_shapes_degrade_to_zero() {
        let profile = sanitize(&json!({
            "chaseTravel": "not a number",
            "dining": null,
            "flightsHotels": {"amount": 10},
            "otherSpending": "1,250",
            "stubhubSpending": "$300",
            "lyftRides": -4,
            "priorityPassVisits": "inf",
        }))
        .expect("object sanitizes");
        assert_eq!(profile.chase_travel, 0.0);
        assert_eq!(profile.dining, 0.0);
        assert_eq!(profile.flights_hotels, 0.0);
        assert_eq!(profile.other_spending, 0.0);
        assert_eq!(profile.stubhub_spending, 0.0);
        assert_eq!(profile.lyft_rides, 0.0);
        assert_eq!(profile.priority_pass_visits, 0.0);
    }

    #[test]
    fn toggles_are_true_only_for_boolean_true() {
        let profile = sanitize(&json!({
            "restaurantOrders": true,
            "nonRestaurantOrders": "true",
            "appleServices": 1,
            "globalEntryValue": false,
        }))
        .expect("object sanitizes");
        assert!(profile.restaurant_orders);
        assert!(!profile.non_restaurant_orders);
        assert!(!profile.apple_services);
        assert!(!profile.global_entry_value);
    }

    #[test]
    fn capped_fields_are_clamped() {
        let profile = sanitize(&json!({
            "travelCreditUsage": 1000,
            "editStaysValue": 900,
            "dashpassUsage": 24,
            "pelotonEquipment": 9000,
            "stubhubSpending": -10,
        }))
        .expect("object sanitizes");
        assert_eq!(profile.travel_credit_usage, 300.0);
        assert_eq!(profile.edit_stays_value, 500.0);
        assert_eq!(profile.dashpass_usage, 12.0);
        assert_eq!(profile.peloton_equipment, 5_000.0);
        assert_eq!(profile.stubhub_spending, 0.0);
    }

    #[test]
    fn plain_numeric_strings_still_parse() {
        let profile = sanitize(&json!({"dining": " 400 ", "otherSpending": "12e3"}))
            .expect("object sanitizes");
        assert_eq!(profile.dining, 400.0);
        assert_eq!(profile.other_spending, 12_000.0);
    }

    #[test]
    fn keys_match_exactly() {
        let profile = sanitize(&json!({
            "useihgdiamond": true,
            "DINING": 400,
            "use_shops_credit": true,
            "useIHGDiamond": false,
            "dining": 250,
        }))
        .expect("object sanitizes");
        assert!(!profile.use_ihg_diamond);
        assert!(!profile.use_shops_credit);
        assert_eq!(profile.dining, 250.0);
    }

    #[test]
    fn normalize_profile_scrubs_non_finite_values() {
        let mut profile = InputProfile::zeroed();
        profile.chase_travel = f64::NAN;
        profile.dining = f64::INFINITY;
        profile.dining_credit = 450.0;
        normalize_profile(&mut profile);
        assert_eq!(profile.chase_travel, 0.0);
        assert_eq!(profile.dining, 0.0);
        assert_eq!(profile.dining_credit, 300.0);
    }

    #[test]
    fn parses_typed_number_text() {
        assert_eq!(parse_number_text(" $2,500 "), 2_500.0);
        assert_eq!(parse_number_text(""), 0.0);
        assert_eq!(parse_number_text("abc"), 0.0);
        assert_eq!(parse_number_text("NaN"), 0.0);
    }
}
