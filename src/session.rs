//! Form-side state: the profile a user is editing and the most recent
//! valuation of it.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::engine::compute_profile;
use crate::error::ComputationFailure;
use crate::profile::sanitize::parse_number_text;
use crate::profile::{sanitize, FieldKind, FieldParseError, InputProfile, ProfileField};
use crate::types::ResultSet;

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    UnknownField(#[from] FieldParseError),
    #[error("{field} expects on/off, got {value:?}")]
    InvalidToggle { field: ProfileField, value: String },
    #[error("edit must look like field=value, got {0:?}")]
    MalformedAssignment(String),
}

#[derive(Debug, Clone)]
pub struct Calculator {
    profile: InputProfile,
    last: Option<(InputProfile, ResultSet)>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(InputProfile::default())
    }
}

impl Calculator {
    pub fn new(profile: InputProfile) -> Self {
        Self {
            profile,
            last: None,
        }
    }

    pub fn from_record(raw: &Value) -> Result<Self, ComputationFailure> {
        Ok(Self::new(sanitize(raw)?))
    }

    pub fn profile(&self) -> &InputProfile {
        &self.profile
    }

    /// Applies what the user typed into a field. Numbers are coerced from text
    /// and clamped to the field's cap here, before the engine sees them.
    pub fn apply_edit(&mut self, field: ProfileField, text: &str) -> Result<(), EditError> {
        match field.kind() {
            FieldKind::Toggle => {
                let on = parse_toggle_text(text).ok_or_else(|| EditError::InvalidToggle {
                    field,
                    value: text.to_string(),
                })?;
                self.profile.set_toggle(field, on);
            }
            kind => {
                self.profile
                    .set_number(field, kind.normalize(parse_number_text(text)));
            }
        }
        Ok(())
    }

    /// Parses and applies a `field=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<ProfileField, EditError> {
        let (name, text) = assignment
            .split_once('=')
            .ok_or_else(|| EditError::MalformedAssignment(assignment.to_string()))?;
        let field = name.parse::<ProfileField>()?;
        self.apply_edit(field, text)?;
        Ok(field)
    }

    /// Current valuation. Recomputed only when the profile differs from the
    /// one behind the cached result.
    pub fn results(&mut self) -> &ResultSet {
        let unchanged = matches!(&self.last, Some((seen, _)) if *seen == self.profile);
        if unchanged {
            debug!("profile unchanged, reusing last valuation");
        } else {
            self.last = None;
        }
        let profile = &self.profile;
        let (_, result) = self
            .last
            .get_or_insert_with(|| (profile.clone(), compute_profile(profile)));
        result
    }
}

fn parse_toggle_text(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}
