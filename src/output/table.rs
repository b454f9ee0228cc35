use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};

use crate::output::labels::category_label;
use crate::profile::{FieldKind, InputProfile, ProfileField};
use crate::types::ResultSet;

pub fn render_breakdown_table(result: &ResultSet) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Benefit", "Value", "Low", "High", "Details"]);

    for (category, entry) in &result.breakdown {
        table.add_row(Row::from(vec![
            Cell::new(category_label(*category)),
            Cell::new(money(entry.value)).set_alignment(CellAlignment::Right),
            Cell::new(money(entry.min)).set_alignment(CellAlignment::Right),
            Cell::new(money(entry.max)).set_alignment(CellAlignment::Right),
            Cell::new(&entry.details),
        ]));
    }

    let mut out = String::new();
    out.push_str(&table.to_string());
    out.push_str(&format!(
        "\nTotal value: {} (range {} to {})\nAnnual fee: {}\nNet value: {}\nROI: {} (range {} to {})",
        money(result.total_value),
        money(result.min_value()),
        money(result.max_value()),
        money(result.total_cost),
        signed_money(result.net_value()),
        percent(result.roi),
        percent(result.min_roi),
        percent(result.max_roi),
    ));
    out
}

/// Summary row per ROI figure, coloured by whether the card pays for itself.
pub fn render_roi_table(result: &ResultSet) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scenario", "Benefit Value", "ROI"]);

    let rows = [
        ("Worst case", result.min_value(), result.min_roi),
        ("Estimate", result.total_value, result.roi),
        ("Best case", result.max_value(), result.max_roi),
    ];
    for (label, value, roi) in rows {
        let roi_cell = if roi >= 0.0 {
            Cell::new(percent(roi)).fg(Color::Green)
        } else {
            Cell::new(percent(roi)).fg(Color::Red)
        };
        table.add_row(Row::from(vec![
            Cell::new(label),
            Cell::new(money(value)),
            roi_cell,
        ]));
    }
    table.to_string()
}

pub fn render_fields_table(profile: &InputProfile) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Accepts", "Default", "Current"]);
    for field in ProfileField::ALL {
        let accepts = match field.kind() {
            FieldKind::Toggle if field.is_high_spender_perk() => {
                "on/off (needs $75,000 spend)".to_string()
            }
            kind => kind.to_string(),
        };
        table.add_row(vec![
            field.key().to_string(),
            accepts,
            field.default_value().to_string(),
            profile.value(field).to_string(),
        ]);
    }
    table.to_string()
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn signed_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("+${value:.2}")
    }
}

fn percent(value: f64) -> String {
    format!("{value:+.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_profile;

    #[test]
    fn breakdown_table_lists_labels_and_roi() {
        let result = compute_profile(&InputProfile::default());
        let rendered = render_breakdown_table(&result);
        assert!(rendered.contains("POINTS"));
        assert!(rendered.contains("DASHPASS"));
        assert!(rendered.contains("Annual fee: $795.00"));
        assert!(rendered.contains("ROI: -9.45%"));
    }

    #[test]
    fn fallback_renders_as_total_loss() {
        let rendered = render_breakdown_table(&ResultSet::fallback());
        assert!(rendered.contains("Net value: -$795.00"));
        assert!(rendered.contains("ROI: -100.00%"));
    }

    #[test]
    fn roi_table_has_three_scenarios() {
        let rendered = render_roi_table(&ResultSet::fallback());
        assert!(rendered.contains("Worst case"));
        assert!(rendered.contains("Estimate"));
        assert!(rendered.contains("Best case"));
    }

    #[test]
    fn fields_table_marks_gated_perks() {
        let rendered = render_fields_table(&InputProfile::default());
        assert!(rendered.contains("useIHGDiamond"));
        assert!(rendered.contains("$75,000"));
        assert!(rendered.contains("5000]"));
    }
}
