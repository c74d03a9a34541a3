//! Grant eligibility scoring: per-question strategies, aggregation into a final band and
//! eligibility status, and the grant configurations they run against.

pub mod config;
pub mod error;
pub mod grants;
pub mod payload;
pub mod scoring;
pub mod service;
pub mod telemetry;

pub use error::AppError;
pub use grants::GrantRegistry;
pub use service::{ScoringService, ScoringServiceError};
