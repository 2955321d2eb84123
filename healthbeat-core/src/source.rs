//! Where issue predictions and optimizations come from.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Optimization, Prediction, ProjectProfile};
use crate::error::{HealthbeatError, Result};
use crate::rules::{predict_issues, suggest_optimizations};

/// Issues and optimizations produced for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePredictions {
    /// Predicted issues.
    #[serde(default)]
    pub issues: Vec<Prediction>,
    /// Suggested optimizations.
    #[serde(default)]
    pub optimizations: Vec<Optimization>,
}

/// An external service that forecasts issues for a project profile.
#[cfg_attr(test, mockall::automock)]
pub trait PredictionService {
    /// Produce predictions for the profile.
    fn predict(&self, profile: &ProjectProfile) -> Result<ServicePredictions>;
}

/// Prediction capability, chosen once when the analyzer is built.
#[derive(Clone, Default)]
pub enum PredictionSource {
    /// Built-in rule tables.
    #[default]
    StaticDefault,
    /// Delegate to an external service.
    ExternalService(Arc<dyn PredictionService + Send + Sync>),
}

impl PredictionSource {
    /// Wrap a service as an external source.
    pub fn external<S>(service: S) -> Self
    where
        S: PredictionService + Send + Sync + 'static,
    {
        Self::ExternalService(Arc::new(service))
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StaticDefault => "static-default",
            Self::ExternalService(_) => "external-service",
        }
    }

    /// Produce issues and optimizations for the profile.
    pub fn predict(&self, profile: &ProjectProfile) -> Result<ServicePredictions> {
        match self {
            Self::StaticDefault => Ok(static_predictions(profile)),
            Self::ExternalService(service) => service
                .predict(profile)
                .and_then(validate_service_predictions)
                .inspect_err(|err| {
                    log::warn!("prediction service failed: {err}");
                }),
        }
    }
}

impl fmt::Debug for PredictionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PredictionSource").field(&self.name()).finish()
    }
}

/// Highest confidence a prediction may carry.
pub const MAX_CONFIDENCE: u8 = 100;

/// Reject service payloads whose predictions fall outside the data model.
pub fn validate_service_predictions(predictions: ServicePredictions) -> Result<ServicePredictions> {
    if let Some(issue) = predictions
        .issues
        .iter()
        .find(|issue| issue.confidence > MAX_CONFIDENCE)
    {
        return Err(HealthbeatError::Service(format!(
            "confidence {} out of range 0-{MAX_CONFIDENCE} for `{}`",
            issue.confidence, issue.message
        )));
    }
    Ok(predictions)
}

/// Run the built-in rule tables.
pub fn static_predictions(profile: &ProjectProfile) -> ServicePredictions {
    ServicePredictions {
        issues: predict_issues(profile),
        optimizations: suggest_optimizations(profile),
    }
}
