//! Linear regression model backed by a JSON artifact.
//!
//! Formula: `sleep = intercept + w · (wake_seconds, desired_sleep_hours,
//! coffee_cups)`. The artifact declares the unit its coefficients were
//! trained to emit, so the estimator never has to guess.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::{DurationUnit, PredictedSleep, Predictor, SleepFeatures};

/// Per-feature coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearWeights {
    pub wake_seconds: f64,
    pub desired_sleep_hours: f64,
    pub coffee_cups: f64,
}

/// Linear regression model, deserialized from a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Human-readable model name, shown by `model show`.
    pub name: String,
    /// Unit of the model output.
    pub unit: DurationUnit,
    pub intercept: f64,
    pub weights: LinearWeights,
}

impl Default for LinearModel {
    /// Bundled coefficient set, trained in hours. Used when no external
    /// artifact is configured.
    fn default() -> Self {
        Self {
            name: "sleep-calculator-builtin".into(),
            unit: DurationUnit::Hours,
            intercept: 0.0,
            weights: LinearWeights {
                wake_seconds: 2.75e-5,
                desired_sleep_hours: 0.85,
                coffee_cups: 0.075,
            },
        }
    }
}

impl LinearModel {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LinearModel =
            serde_json::from_str(&content).map_err(|e| ModelError::ParseFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Write this model out as a JSON artifact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| ModelError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|source| ModelError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Reject artifacts with unusable coefficients.
    pub fn validate(&self) -> Result<(), ModelError> {
        let coefficients = [
            self.intercept,
            self.weights.wake_seconds,
            self.weights.desired_sleep_hours,
            self.weights.coffee_cups,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "coefficients must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &SleepFeatures) -> Result<PredictedSleep, ModelError> {
        let value = self.intercept
            + self.weights.wake_seconds * features.wake_seconds
            + self.weights.desired_sleep_hours * features.desired_sleep_hours
            + self.weights.coffee_cups * features.coffee_cups;

        if !value.is_finite() {
            return Err(ModelError::InferenceFailed(format!(
                "model '{}' produced a non-finite prediction",
                self.name
            )));
        }

        Ok(PredictedSleep {
            value,
            unit: self.unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reference_features() -> SleepFeatures {
        SleepFeatures {
            wake_seconds: 25_200.0, // 07:00
            desired_sleep_hours: 8.0,
            coffee_cups: 1.0,
        }
    }

    #[test]
    fn test_default_model_predicts_plausible_hours() {
        let model = LinearModel::default();
        let prediction = model.predict(&reference_features()).unwrap();
        assert_eq!(prediction.unit, DurationUnit::Hours);
        assert!(prediction.value > 4.0 && prediction.value < 12.0);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = LinearModel::default();
        let a = model.predict(&reference_features()).unwrap();
        let b = model.predict(&reference_features()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_valid_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "test-model",
                "unit": "seconds",
                "intercept": 3600.0,
                "weights": {{
                    "wake_seconds": 0.0,
                    "desired_sleep_hours": 3000.0,
                    "coffee_cups": 0.0
                }}
            }}"#
        )
        .unwrap();

        let model = LinearModel::load(file.path()).unwrap();
        assert_eq!(model.name, "test-model");
        assert_eq!(model.unit, DurationUnit::Seconds);

        let prediction = model.predict(&reference_features()).unwrap();
        assert_eq!(prediction.as_seconds(), 3600.0 + 8.0 * 3000.0);
    }

    #[test]
    fn test_load_missing_artifact() {
        let err = LinearModel::load("/nonexistent/sleep.json").unwrap_err();
        assert!(matches!(err, ModelError::LoadFailed { .. }));
    }

    #[test]
    fn test_load_malformed_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = LinearModel::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::ParseFailed { .. }));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut model = LinearModel::default();
        model.intercept = f64::NAN;
        assert!(matches!(
            model.validate(),
            Err(ModelError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let model = LinearModel::default();
        model.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded.name, model.name);
        assert_eq!(loaded.intercept, model.intercept);
    }
}
