use crate::profile::InputProfile;
use crate::types::BenefitEntry;

/// Combined annual spend that unlocks the high-spender perks.
pub const HIGH_SPENDER_THRESHOLD: f64 = 75_000.0;

pub const SHOPS_CREDIT: f64 = 250.0;
pub const SOUTHWEST_CREDIT: f64 = 500.0;
pub const IHG_DIAMOND_VALUE: f64 = 200.0;
pub const SOUTHWEST_A_LIST_VALUE: f64 = 150.0;

pub fn qualifies(profile: &InputProfile) -> bool {
    profile.total_spend() >= HIGH_SPENDER_THRESHOLD
}

/// One consolidated entry for every enabled perk. Below the threshold the
/// toggles are ignored, not cleared.
pub fn high_spender_benefits(profile: &InputProfile) -> Option<BenefitEntry> {
    if !qualifies(profile) {
        return None;
    }

    let perks = [
        (profile.use_shops_credit, SHOPS_CREDIT, "Shops credit"),
        (profile.use_southwest_credit, SOUTHWEST_CREDIT, "Southwest credit"),
        (profile.use_ihg_diamond, IHG_DIAMOND_VALUE, "IHG Diamond status"),
        (
            profile.use_southwest_a_list,
            SOUTHWEST_A_LIST_VALUE,
            "Southwest A-List",
        ),
    ];
    let enabled = perks
        .iter()
        .filter(|(on, _, _)| *on)
        .collect::<Vec<_>>();
    let value = enabled.iter().map(|(_, amount, _)| amount).sum::<f64>();
    if value <= 0.0 {
        return None;
    }

    let names = enabled
        .iter()
        .map(|(_, _, name)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    Some(BenefitEntry::scaled(value, 0.8, 1.2, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spender(total: f64) -> InputProfile {
        let mut profile = InputProfile::zeroed();
        profile.other_spending = total;
        profile
    }

    #[test]
    fn below_threshold_ignores_every_toggle() {
        let mut profile = spender(74_999.0);
        profile.use_shops_credit = true;
        profile.use_southwest_credit = true;
        profile.use_ihg_diamond = true;
        profile.use_southwest_a_list = true;
        assert!(high_spender_benefits(&profile).is_none());
        assert!(profile.use_shops_credit);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut profile = spender(75_000.0);
        profile.use_shops_credit = true;
        let entry = high_spender_benefits(&profile).expect("qualifies");
        assert_eq!(entry.value, 250.0);
        assert!((entry.min - 200.0).abs() < 1e-9);
        assert!((entry.max - 300.0).abs() < 1e-9);
        assert_eq!(entry.details, "Shops credit");
    }

    #[test]
    fn qualifying_without_toggles_yields_nothing() {
        assert!(high_spender_benefits(&spender(120_000.0)).is_none());
    }

    #[test]
    fn sums_all_enabled_perks() {
        let mut profile = spender(0.0);
        profile.chase_travel = 25_000.0;
        profile.dining = 50_000.0;
        profile.use_shops_credit = true;
        profile.use_southwest_credit = true;
        profile.use_ihg_diamond = true;
        profile.use_southwest_a_list = true;
        let entry = high_spender_benefits(&profile).expect("qualifies");
        assert_eq!(entry.value, 1_100.0);
    }
}
