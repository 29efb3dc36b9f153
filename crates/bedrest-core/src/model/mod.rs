//! Regression model abstraction.
//!
//! The estimator never knows what kind of model it is talking to; it
//! hands over three numeric features and gets back a predicted sleep
//! duration tagged with the unit the model was trained to emit.

mod linear;

pub use linear::{LinearModel, LinearWeights};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The three features the regression model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight.
    pub wake_seconds: f64,
    /// Desired amount of sleep in hours.
    pub desired_sleep_hours: f64,
    /// Daily coffee intake in cups.
    pub coffee_cups: f64,
}

/// Unit of the model's output. Declared by the artifact, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Hours,
    Seconds,
}

/// A predicted actual-sleep duration, tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedSleep {
    pub value: f64,
    pub unit: DurationUnit,
}

impl PredictedSleep {
    pub fn hours(value: f64) -> Self {
        Self {
            value,
            unit: DurationUnit::Hours,
        }
    }

    pub fn seconds(value: f64) -> Self {
        Self {
            value,
            unit: DurationUnit::Seconds,
        }
    }

    pub fn as_seconds(&self) -> f64 {
        match self.unit {
            DurationUnit::Hours => self.value * 3600.0,
            DurationUnit::Seconds => self.value,
        }
    }

    pub fn as_hours(&self) -> f64 {
        match self.unit {
            DurationUnit::Hours => self.value,
            DurationUnit::Seconds => self.value / 3600.0,
        }
    }
}

/// An opaque, pre-trained regression model.
///
/// Implementations must be deterministic for the estimator's
/// same-inputs-same-result guarantee to hold.
pub trait Predictor {
    /// Predict the actual sleep the user will get.
    fn predict(&self, features: &SleepFeatures) -> Result<PredictedSleep, ModelError>;
}
