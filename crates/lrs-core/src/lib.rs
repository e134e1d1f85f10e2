pub mod app_config;
mod config;
pub mod de;
pub mod guardrail;
pub mod mode;
pub mod presentation;
pub mod suggest;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use guardrail::{
    filter_and_annotate, CountryDetector, CountryLexicon, GuardrailFilter, GuardrailOutcome,
};
pub use mode::{Mode, ModeParseError};
pub use suggest::{filter_city_like, looks_city_like, normalize_suggestions};
pub use types::{DebugInfo, LocationSuggestion, Pick, PickLinks, SearchResponse};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
