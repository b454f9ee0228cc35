pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod profile;
pub mod session;
pub mod types;

pub use engine::{compute, compute_profile, evaluate};
pub use error::ComputationFailure;
pub use profile::{InputProfile, ProfileField};
pub use session::Calculator;
pub use types::{BenefitCategory, BenefitEntry, Breakdown, ResultSet, ANNUAL_FEE};
