use anyhow::Result;
use serde::Serialize;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::types::ResultSet;

    #[test]
    fn renders_result_keys() {
        let rendered = render_json(&ResultSet::fallback()).expect("render");
        assert!(rendered.contains("\"totalValue\""));
        assert!(rendered.contains("\"minROI\""));
    }
}
