use anyhow::Result;

use crate::output::labels::category_label;
use crate::types::ResultSet;

pub fn breakdown_to_csv(result: &ResultSet) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["category", "label", "value", "min", "max", "details"])?;
    for (category, entry) in &result.breakdown {
        writer.write_record([
            category.as_key().to_string(),
            category_label(*category),
            format!("{:.2}", entry.value),
            format!("{:.2}", entry.min),
            format!("{:.2}", entry.max),
            entry.details.clone(),
        ])?;
    }
    writer.write_record([
        "total".to_string(),
        "TOTAL".to_string(),
        format!("{:.2}", result.total_value),
        format!("{:.2}", result.min_value()),
        format!("{:.2}", result.max_value()),
        format!(
            "fee {:.2}; roi {:.2}% (min {:.2}%, max {:.2}%)",
            result.total_cost, result.roi, result.min_roi, result.max_roi
        ),
    ])?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_profile;
    use crate::profile::InputProfile;

    #[test]
    fn writes_one_row_per_entry_plus_total() {
        let result = compute_profile(&InputProfile::default());
        let rendered = breakdown_to_csv(&result).expect("csv renders");
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "category,label,value,min,max,details");
        assert_eq!(lines.len(), result.breakdown.len() + 2);
        assert!(lines[1].starts_with("points,POINTS,0.00,0.00,0.00"));
        assert!(lines
            .last()
            .expect("total row")
            .starts_with("total,TOTAL,719.88"));
    }
}
