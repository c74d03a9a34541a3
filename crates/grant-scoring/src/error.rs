use crate::config::ConfigError;
use crate::grants::ConfigLoadError;
use crate::payload::PayloadError;
use crate::scoring::ErrorClass;
use crate::service::ScoringServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    GrantConfig(ConfigLoadError),
    Payload(PayloadError),
    Scoring(ScoringServiceError),
}

impl AppError {
    /// `true` when the failure belongs to the caller's request rather than to the deployment.
    pub fn is_user_input(&self) -> bool {
        match self {
            AppError::Payload(_) => true,
            AppError::Scoring(err) => err.class() == ErrorClass::UserInput,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::GrantConfig(_) => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::GrantConfig(err) => write!(f, "grant configuration error: {}", err),
            AppError::Payload(err) => write!(f, "{}", err),
            AppError::Scoring(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::GrantConfig(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Scoring(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigLoadError> for AppError {
    fn from(value: ConfigLoadError) -> Self {
        Self::GrantConfig(value)
    }
}

impl From<PayloadError> for AppError {
    fn from(value: PayloadError) -> Self {
        Self::Payload(value)
    }
}

impl From<ScoringServiceError> for AppError {
    fn from(value: ScoringServiceError) -> Self {
        Self::Scoring(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringError;

    #[test]
    fn classifies_request_failures_as_user_input() {
        let unknown = AppError::from(ScoringServiceError::UnknownGrantType {
            grant_type: "nope".to_string(),
        });
        let gap = AppError::from(ScoringServiceError::from(ScoringError::BandGap {
            total: 5.5,
            percentage: 34.375,
        }));
        let payload = AppError::from(PayloadError::MissingMain);

        assert!(unknown.is_user_input());
        assert!(payload.is_user_input());
        assert!(!gap.is_user_input());
        assert_eq!(unknown.to_string(), "Invalid grant type: nope");
    }
}
