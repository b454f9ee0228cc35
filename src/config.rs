use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    /// JSON record loaded when `--profile` is not given.
    #[serde(default = "default_profile_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub show_roi_table: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub profile_path: Option<String>,
    pub output_format: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/card-roi/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.profile_path {
            self.profile.path = path;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_profile_path(&self) -> PathBuf {
        expand_tilde(&self.profile.path)
    }

    pub fn default_template() -> String {
        let template = r#"[profile]
# JSON record with the form fields (chaseTravel, dining, useShopsCredit, ...)
path = "~/.config/card-roi/profile.json"

[output]
# table, json or csv
format = "table"
show_roi_table = true

[logging]
# overridden by RUST_LOG when set
level = "warn"
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: default_profile_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            show_roi_table: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_profile_path() -> String {
    "~/.config/card-roi/profile.json".to_string()
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("card-roi-{}-{nanos}", process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Some(&scratch_path("absent.toml"))).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.output.format, "table");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn template_round_trips_to_defaults() {
        let path = scratch_path("config.toml");
        Config::write_template(&path).expect("template written");
        let config = Config::load(Some(&path)).expect("template parses");
        assert_eq!(config, Config::default());
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let parsed: Config = toml::from_str("[output]\nformat = \"json\"\n").expect("parse");
        assert_eq!(parsed.output.format, "json");
        assert!(parsed.output.show_roi_table);
        assert_eq!(parsed.profile, ProfileConfig::default());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            profile_path: Some("/tmp/me.json".to_string()),
            output_format: Some("csv".to_string()),
            log_level: None,
        });
        assert_eq!(config.profile.path, "/tmp/me.json");
        assert_eq!(config.output.format, "csv");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.resolved_profile_path(), PathBuf::from("/tmp/me.json"));
    }
}
