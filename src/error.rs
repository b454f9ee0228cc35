use thiserror::Error;

/// The only failure the valuation engine knows about. It never reaches the
/// caller of `engine::compute`; it is mapped to `ResultSet::fallback()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationFailure {
    #[error("input profile is not an object")]
    MalformedInput,
    #[error("non-finite intermediate while computing {stage}")]
    NonFinite { stage: &'static str },
    #[error("result is malformed: {field}")]
    MalformedResult { field: String },
}

impl ComputationFailure {
    pub fn non_finite(stage: &'static str) -> Self {
        Self::NonFinite { stage }
    }

    pub fn malformed_result(field: impl Into<String>) -> Self {
        Self::MalformedResult {
            field: field.into(),
        }
    }
}
