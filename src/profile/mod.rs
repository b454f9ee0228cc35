pub mod sanitize;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use sanitize::{sanitize, sanitize_record};

/// Typed snapshot of everything the user entered on the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InputProfile {
    pub chase_travel: f64,
    pub flights_hotels: f64,
    pub dining: f64,
    pub other_spending: f64,
    pub travel_credit_usage: f64,
    pub dining_credit: f64,
    pub edit_stays_value: f64,
    pub stubhub_spending: f64,
    pub dashpass_usage: f64,
    pub restaurant_orders: bool,
    pub non_restaurant_orders: bool,
    pub lyft_rides: f64,
    pub peloton_membership: bool,
    pub peloton_equipment: f64,
    pub apple_services: bool,
    pub priority_pass_visits: f64,
    pub global_entry_value: bool,
    pub use_shops_credit: bool,
    pub use_southwest_credit: bool,
    #[serde(rename = "useIHGDiamond")]
    pub use_ihg_diamond: bool,
    pub use_southwest_a_list: bool,
}

impl Default for InputProfile {
    fn default() -> Self {
        let mut profile = Self::zeroed();
        for field in ProfileField::ALL {
            if let FieldValue::Number(value) = field.default_value() {
                profile.set_number(field, value);
            }
        }
        profile
    }
}

impl InputProfile {
    /// Every amount at zero and every toggle off.
    pub fn zeroed() -> Self {
        Self {
            chase_travel: 0.0,
            flights_hotels: 0.0,
            dining: 0.0,
            other_spending: 0.0,
            travel_credit_usage: 0.0,
            dining_credit: 0.0,
            edit_stays_value: 0.0,
            stubhub_spending: 0.0,
            dashpass_usage: 0.0,
            restaurant_orders: false,
            non_restaurant_orders: false,
            lyft_rides: 0.0,
            peloton_membership: false,
            peloton_equipment: 0.0,
            apple_services: false,
            priority_pass_visits: 0.0,
            global_entry_value: false,
            use_shops_credit: false,
            use_southwest_credit: false,
            use_ihg_diamond: false,
            use_southwest_a_list: false,
        }
    }

    /// Combined annual spend across the four tracked categories.
    pub fn total_spend(&self) -> f64 {
        self.chase_travel + self.flights_hotels + self.dining + self.other_spending
    }

    pub fn value(&self, field: ProfileField) -> FieldValue {
        match field {
            ProfileField::ChaseTravel => FieldValue::Number(self.chase_travel),
            ProfileField::FlightsHotels => FieldValue::Number(self.flights_hotels),
            ProfileField::Dining => FieldValue::Number(self.dining),
            ProfileField::OtherSpending => FieldValue::Number(self.other_spending),
            ProfileField::TravelCreditUsage => FieldValue::Number(self.travel_credit_usage),
            ProfileField::DiningCredit => FieldValue::Number(self.dining_credit),
            ProfileField::EditStaysValue => FieldValue::Number(self.edit_stays_value),
            ProfileField::StubhubSpending => FieldValue::Number(self.stubhub_spending),
            ProfileField::DashpassUsage => FieldValue::Number(self.dashpass_usage),
            ProfileField::RestaurantOrders => FieldValue::Toggle(self.restaurant_orders),
            ProfileField::NonRestaurantOrders => FieldValue::Toggle(self.non_restaurant_orders),
            ProfileField::LyftRides => FieldValue::Number(self.lyft_rides),
            ProfileField::PelotonMembership => FieldValue::Toggle(self.peloton_membership),
            ProfileField::PelotonEquipment => FieldValue::Number(self.peloton_equipment),
            ProfileField::AppleServices => FieldValue::Toggle(self.apple_services),
            ProfileField::PriorityPassVisits => FieldValue::Number(self.priority_pass_visits),
            ProfileField::GlobalEntryValue => FieldValue::Toggle(self.global_entry_value),
            ProfileField::UseShopsCredit => FieldValue::Toggle(self.use_shops_credit),
            ProfileField::UseSouthwestCredit => FieldValue::Toggle(self.use_southwest_credit),
            ProfileField::UseIhgDiamond => FieldValue::Toggle(self.use_ihg_diamond),
            ProfileField::UseSouthwestAList => FieldValue::Toggle(self.use_southwest_a_list),
        }
    }

    /// Writes a numeric field. Returns `false` when `field` is a toggle.
    pub fn set_number(&mut self, field: ProfileField, to: f64) -> bool {
        match field {
            ProfileField::ChaseTravel => self.chase_travel = to,
            ProfileField::FlightsHotels => self.flights_hotels = to,
            ProfileField::Dining => self.dining = to,
            ProfileField::OtherSpending => self.other_spending = to,
            ProfileField::TravelCreditUsage => self.travel_credit_usage = to,
            ProfileField::DiningCredit => self.dining_credit = to,
            ProfileField::EditStaysValue => self.edit_stays_value = to,
            ProfileField::StubhubSpending => self.stubhub_spending = to,
            ProfileField::DashpassUsage => self.dashpass_usage = to,
            ProfileField::LyftRides => self.lyft_rides = to,
            ProfileField::PelotonEquipment => self.peloton_equipment = to,
            ProfileField::PriorityPassVisits => self.priority_pass_visits = to,
            _ => return false,
        }
        true
    }

    /// Writes a toggle field. Returns `false` when `field` is numeric.
    pub fn set_toggle(&mut self, field: ProfileField, to: bool) -> bool {
        match field {
            ProfileField::RestaurantOrders => self.restaurant_orders = to,
            ProfileField::NonRestaurantOrders => self.non_restaurant_orders = to,
            ProfileField::PelotonMembership => self.peloton_membership = to,
            ProfileField::AppleServices => self.apple_services = to,
            ProfileField::GlobalEntryValue => self.global_entry_value = to,
            ProfileField::UseShopsCredit => self.use_shops_credit = to,
            ProfileField::UseSouthwestCredit => self.use_southwest_credit = to,
            ProfileField::UseIhgDiamond => self.use_ihg_diamond = to,
            ProfileField::UseSouthwestAList => self.use_southwest_a_list = to,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Toggle(bool),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Toggle(v) => write!(f, "{v}"),
        }
    }
}

/// How a field is coerced when it arrives from a loose record or a text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Non-negative, unbounded.
    Amount,
    /// Clamped into `[0, cap]`.
    Capped(f64),
    Toggle,
}

impl FieldKind {
    /// Brings an already-finite number into the field's domain.
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            FieldKind::Amount => value.max(0.0),
            FieldKind::Capped(cap) => value.clamp(0.0, cap),
            FieldKind::Toggle => 0.0,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Amount => write!(f, ">= 0"),
            FieldKind::Capped(cap) => write!(f, "[0, {cap}]"),
            FieldKind::Toggle => write!(f, "on/off"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    ChaseTravel,
    FlightsHotels,
    Dining,
    OtherSpending,
    TravelCreditUsage,
    DiningCredit,
    EditStaysValue,
    StubhubSpending,
    DashpassUsage,
    RestaurantOrders,
    NonRestaurantOrders,
    LyftRides,
    PelotonMembership,
    PelotonEquipment,
    AppleServices,
    PriorityPassVisits,
    GlobalEntryValue,
    UseShopsCredit,
    UseSouthwestCredit,
    UseIhgDiamond,
    UseSouthwestAList,
}

impl ProfileField {
    pub const ALL: [ProfileField; 21] = [
        ProfileField::ChaseTravel,
        ProfileField::FlightsHotels,
        ProfileField::Dining,
        ProfileField::OtherSpending,
        ProfileField::TravelCreditUsage,
        ProfileField::DiningCredit,
        ProfileField::EditStaysValue,
        ProfileField::StubhubSpending,
        ProfileField::DashpassUsage,
        ProfileField::RestaurantOrders,
        ProfileField::NonRestaurantOrders,
        ProfileField::LyftRides,
        ProfileField::PelotonMembership,
        ProfileField::PelotonEquipment,
        ProfileField::AppleServices,
        ProfileField::PriorityPassVisits,
        ProfileField::GlobalEntryValue,
        ProfileField::UseShopsCredit,
        ProfileField::UseSouthwestCredit,
        ProfileField::UseIhgDiamond,
        ProfileField::UseSouthwestAList,
    ];

    /// Key used by loose records and the form.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ChaseTravel => "chaseTravel",
            Self::FlightsHotels => "flightsHotels",
            Self::Dining => "dining",
            Self::OtherSpending => "otherSpending",
            Self::TravelCreditUsage => "travelCreditUsage",
            Self::DiningCredit => "diningCredit",
            Self::EditStaysValue => "editStaysValue",
            Self::StubhubSpending => "stubhubSpending",
            Self::DashpassUsage => "dashpassUsage",
            Self::RestaurantOrders => "restaurantOrders",
            Self::NonRestaurantOrders => "nonRestaurantOrders",
            Self::LyftRides => "lyftRides",
            Self::PelotonMembership => "pelotonMembership",
            Self::PelotonEquipment => "pelotonEquipment",
            Self::AppleServices => "appleServices",
            Self::PriorityPassVisits => "priorityPassVisits",
            Self::GlobalEntryValue => "globalEntryValue",
            Self::UseShopsCredit => "useShopsCredit",
            Self::UseSouthwestCredit => "useSouthwestCredit",
            Self::UseIhgDiamond => "useIHGDiamond",
            Self::UseSouthwestAList => "useSouthwestAList",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::TravelCreditUsage | Self::DiningCredit | Self::StubhubSpending => {
                FieldKind::Capped(300.0)
            }
            Self::EditStaysValue => FieldKind::Capped(500.0),
            Self::DashpassUsage => FieldKind::Capped(12.0),
            Self::PelotonEquipment => FieldKind::Capped(5_000.0),
            Self::ChaseTravel
            | Self::FlightsHotels
            | Self::Dining
            | Self::OtherSpending
            | Self::LyftRides
            | Self::PriorityPassVisits => FieldKind::Amount,
            Self::RestaurantOrders
            | Self::NonRestaurantOrders
            | Self::PelotonMembership
            | Self::AppleServices
            | Self::GlobalEntryValue
            | Self::UseShopsCredit
            | Self::UseSouthwestCredit
            | Self::UseIhgDiamond
            | Self::UseSouthwestAList => FieldKind::Toggle,
        }
    }

    /// Value the form starts with.
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::TravelCreditUsage | Self::DiningCredit => FieldValue::Number(300.0),
            Self::DashpassUsage => FieldValue::Number(12.0),
            _ if self.kind() == FieldKind::Toggle => FieldValue::Toggle(false),
            _ => FieldValue::Number(0.0),
        }
    }

    /// Toggles that only count once the profile qualifies as a high spender.
    pub fn is_high_spender_perk(&self) -> bool {
        matches!(
            self,
            Self::UseShopsCredit
                | Self::UseSouthwestCredit
                | Self::UseIhgDiamond
                | Self::UseSouthwestAList
        )
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Error)]
#[error("unknown profile field: {0}")]
pub struct FieldParseError(pub String);

impl FromStr for ProfileField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_key(s);
        if normalized.is_empty() {
            return Err(FieldParseError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == normalized)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

// Accepts `chaseTravel`, `chase_travel` and `chase-travel` alike.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
