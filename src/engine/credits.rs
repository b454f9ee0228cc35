use crate::profile::InputProfile;
use crate::types::{BenefitCategory, BenefitEntry};

pub const TRAVEL_CREDIT_CAP: f64 = 300.0;
pub const DINING_CREDIT_CAP: f64 = 300.0;
pub const EDIT_CREDIT_CAP: f64 = 500.0;
pub const STUBHUB_CREDIT_CAP: f64 = 300.0;

/// Statement credits: whatever the user redeems, up to the cap, is worth
/// exactly its face value.
pub fn fixed_credits(profile: &InputProfile) -> Vec<(BenefitCategory, BenefitEntry)> {
    let travel = profile.travel_credit_usage.clamp(0.0, TRAVEL_CREDIT_CAP);
    let dining = profile.dining_credit.clamp(0.0, DINING_CREDIT_CAP);
    let edit = profile.edit_stays_value.clamp(0.0, EDIT_CREDIT_CAP);
    let stubhub = profile.stubhub_spending.clamp(0.0, STUBHUB_CREDIT_CAP);

    vec![
        (
            BenefitCategory::TravelCredit,
            BenefitEntry::exact(travel, credit_details(travel, TRAVEL_CREDIT_CAP, "travel")),
        ),
        (
            BenefitCategory::DiningCredit,
            BenefitEntry::exact(dining, credit_details(dining, DINING_CREDIT_CAP, "dining")),
        ),
        (
            BenefitCategory::EditCredit,
            BenefitEntry::exact(edit, credit_details(edit, EDIT_CREDIT_CAP, "The Edit hotel")),
        ),
        (
            BenefitCategory::StubhubCredit,
            BenefitEntry::exact(stubhub, credit_details(stubhub, STUBHUB_CREDIT_CAP, "StubHub")),
        ),
    ]
}

fn credit_details(used: f64, cap: f64, label: &str) -> String {
    format!("${used:.2} of ${cap:.0} {label} credit used")
}
