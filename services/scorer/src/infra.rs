use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use grant_scoring::config::AppConfig;
use grant_scoring::error::AppError;
use grant_scoring::{telemetry, GrantRegistry, ScoringService};
use serde::Serialize;
use tracing::info;

/// Body printed for a rejected request, shaped like an HTTP 400 response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse<'a> {
    status_code: u16,
    error: &'a str,
    message: String,
}

pub fn bad_request_body(err: &AppError) -> serde_json::Value {
    let body = ErrorResponse {
        status_code: 400,
        error: "Bad Request",
        message: err.to_string(),
    };
    serde_json::to_value(body).unwrap_or_default()
}

/// Loads configuration, installs tracing and builds the grant registry.
pub(crate) fn bootstrap() -> Result<(AppConfig, GrantRegistry), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut registry = GrantRegistry::with_built_ins()?;
    if let Some(dir) = &config.grants.config_dir {
        registry.load_dir(dir)?;
    }

    info!(
        environment = ?config.environment,
        grants = registry.len(),
        "grant registry ready"
    );
    Ok((config, registry))
}

pub(crate) fn scoring_service() -> Result<ScoringService, AppError> {
    let (_, registry) = bootstrap()?;
    Ok(ScoringService::new(Arc::new(registry)))
}

pub(crate) fn read_payload(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
