use crate::engine::points::{price_points, MAX_POINT_RATE, MIN_POINT_RATE};
use crate::profile::InputProfile;
use crate::types::{BenefitCategory, BenefitEntry};

pub const DASHPASS_MONTHLY_PRICE: f64 = 9.99;
pub const DASHPASS_MAX_MONTHS: f64 = 12.0;

pub const RESTAURANT_CREDIT_MONTHLY: f64 = 5.0;
pub const NON_RESTAURANT_CREDIT_MONTHLY: f64 = 10.0;
const NON_RESTAURANT_CREDITS_PER_MONTH: f64 = 2.0;

pub const LYFT_CREDIT_PER_RIDE: f64 = 10.0;
pub const LYFT_CREDIT_CAP: f64 = 120.0;
const LYFT_POINTS_PER_RIDE: f64 = 20.0;
const LYFT_POINT_MULTIPLIER: f64 = 4.0;

pub const PELOTON_MEMBERSHIP_CREDIT: f64 = 120.0;
pub const PELOTON_EQUIPMENT_CAP: f64 = 5_000.0;
const PELOTON_EQUIPMENT_MULTIPLIER: f64 = 9.0;

pub const PRIORITY_PASS_VISIT_VALUE: f64 = 35.0;
pub const GLOBAL_ENTRY_ANNUAL_VALUE: f64 = 24.0;

const APPLE_TV_MONTHLY: f64 = 6.99;
const APPLE_MUSIC_MONTHLY: f64 = 10.99;

/// Benefits whose realized value depends on how much the user actually uses
/// them. Each band reflects how much of the benefit tends to be captured.
pub fn usage_benefits(profile: &InputProfile) -> Vec<(BenefitCategory, BenefitEntry)> {
    let mut out = vec![
        (BenefitCategory::Dashpass, dashpass(profile)),
        (BenefitCategory::DoorDashCredits, doordash_credits(profile)),
        (BenefitCategory::Lyft, lyft(profile)),
        (BenefitCategory::Peloton, peloton(profile)),
        (BenefitCategory::PriorityPass, priority_pass(profile)),
        (BenefitCategory::AppleServices, apple_services(profile)),
    ];
    if let Some(entry) = global_entry(profile) {
        out.push((BenefitCategory::GlobalEntry, entry));
    }
    out
}

fn dashpass(profile: &InputProfile) -> BenefitEntry {
    let months = profile.dashpass_usage.clamp(0.0, DASHPASS_MAX_MONTHS);
    let value = months * DASHPASS_MONTHLY_PRICE;
    BenefitEntry::scaled(
        value,
        0.5,
        1.0,
        format!("{months:.0} months of DashPass at ${DASHPASS_MONTHLY_PRICE}/month"),
    )
}

fn doordash_credits(profile: &InputProfile) -> BenefitEntry {
    let restaurant = if profile.restaurant_orders {
        RESTAURANT_CREDIT_MONTHLY * 12.0
    } else {
        0.0
    };
    let non_restaurant = if profile.non_restaurant_orders {
        NON_RESTAURANT_CREDITS_PER_MONTH * NON_RESTAURANT_CREDIT_MONTHLY * 12.0
    } else {
        0.0
    };
    let value = restaurant + non_restaurant;
    BenefitEntry::scaled(
        value,
        0.7,
        1.0,
        format!("${restaurant:.0} restaurant + ${non_restaurant:.0} non-restaurant promos"),
    )
}

fn lyft(profile: &InputProfile) -> BenefitEntry {
    let rides = profile.lyft_rides.max(0.0);
    let credits = (rides * LYFT_CREDIT_PER_RIDE).min(LYFT_CREDIT_CAP);
    let bonus_points = rides * LYFT_POINTS_PER_RIDE * LYFT_POINT_MULTIPLIER;
    let priced = price_points(bonus_points);
    BenefitEntry::with_band(
        credits + priced.value,
        credits + bonus_points * MIN_POINT_RATE,
        credits + bonus_points * MAX_POINT_RATE,
        format!("${credits:.0} ride credits + {bonus_points:.0} bonus points"),
    )
}

fn peloton(profile: &InputProfile) -> BenefitEntry {
    let membership = if profile.peloton_membership {
        PELOTON_MEMBERSHIP_CREDIT
    } else {
        0.0
    };
    let equipment = profile.peloton_equipment.clamp(0.0, PELOTON_EQUIPMENT_CAP);
    let bonus_points = equipment * PELOTON_EQUIPMENT_MULTIPLIER;
    let value = membership + price_points(bonus_points).value;
    BenefitEntry::scaled(
        value,
        0.8,
        1.2,
        format!("${membership:.0} membership credit + {bonus_points:.0} equipment points"),
    )
}

fn priority_pass(profile: &InputProfile) -> BenefitEntry {
    let visits = profile.priority_pass_visits.max(0.0);
    let value = visits * PRIORITY_PASS_VISIT_VALUE;
    BenefitEntry::scaled(
        value,
        0.5,
        1.5,
        format!("{visits:.0} lounge visits at ${PRIORITY_PASS_VISIT_VALUE:.0} each"),
    )
}

fn global_entry(profile: &InputProfile) -> Option<BenefitEntry> {
    profile.global_entry_value.then(|| {
        BenefitEntry::exact(
            GLOBAL_ENTRY_ANNUAL_VALUE,
            "Application fee credit, amortized per year",
        )
    })
}

fn apple_services(profile: &InputProfile) -> BenefitEntry {
    let value = if profile.apple_services {
        (APPLE_TV_MONTHLY + APPLE_MUSIC_MONTHLY) * 12.0
    } else {
        0.0
    };
    BenefitEntry::scaled(value, 0.3, 1.0, "Apple TV+ and Apple Music subscriptions")
}
