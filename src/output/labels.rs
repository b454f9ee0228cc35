use crate::types::BenefitCategory;

/// Display label for a breakdown key: camel-case words split apart and
/// upper-cased, so `doorDashCredits` reads `DOOR DASH CREDITS`.
pub fn category_label(category: BenefitCategory) -> String {
    match category {
        BenefitCategory::HighSpender => "HIGH SPENDER".to_string(),
        other => humanize_key(other.as_key()),
    }
}

pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (idx, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() && idx > 0 {
            label.push(' ');
        }
        label.push(c.to_ascii_uppercase());
    }
    label
}
