//! Bedtime estimation.
//!
//! One operation: take the wake time, desired sleep and coffee intake,
//! run the regression model, subtract the predicted sleep from the wake
//! time. Any model failure collapses into a single [`EstimationError`]
//! whose display text is the fixed user-facing message.

use thiserror::Error;

use crate::error::ModelError;
use crate::inputs::{CoffeeIntake, SleepAmount};
use crate::model::{Predictor, SleepFeatures};
use crate::time_of_day::TimeOfDay;

/// Fixed user-facing failure message. The presentation layer shows this
/// verbatim; it never sees the underlying cause.
pub const USER_MESSAGE: &str = "Sorry, there was an error calculating your sleep.";

/// Undifferentiated estimation failure. Model-load and inference faults
/// are indistinguishable here; the cause is kept as `source` for
/// diagnostics only.
#[derive(Error, Debug)]
#[error("{}", USER_MESSAGE)]
pub struct EstimationError {
    #[source]
    source: ModelError,
}

impl From<ModelError> for EstimationError {
    fn from(source: ModelError) -> Self {
        Self { source }
    }
}

/// A successful estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Ideal bedtime, possibly on the prior day.
    pub bedtime: TimeOfDay,
    /// What the model predicted the user will actually sleep, in hours.
    pub predicted_sleep_hours: f64,
}

/// The estimator: a predictor plus the time arithmetic around it.
#[derive(Debug)]
pub struct BedtimeEstimator<P> {
    model: P,
}

impl<P: Predictor> BedtimeEstimator<P> {
    pub fn new(model: P) -> Self {
        Self { model }
    }

    /// Estimate the ideal bedtime for the given inputs.
    ///
    /// Deterministic for a deterministic predictor. Fails with
    /// [`EstimationError`] if the model faults or produces a duration
    /// outside (0, 24h).
    pub fn estimate(
        &self,
        wake: TimeOfDay,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
    ) -> Result<Estimate, EstimationError> {
        let features = SleepFeatures {
            wake_seconds: wake.seconds_since_midnight() as f64,
            desired_sleep_hours: sleep.hours(),
            coffee_cups: coffee.cups() as f64,
        };

        let predicted = self.model.predict(&features)?;
        let seconds = predicted.as_seconds();
        if !seconds.is_finite() || seconds < 0.0 || seconds >= 24.0 * 3600.0 {
            return Err(ModelError::InferenceFailed(format!(
                "predicted sleep duration {seconds}s is outside [0, 24h)"
            ))
            .into());
        }

        Ok(Estimate {
            bedtime: wake.minus_seconds(seconds),
            predicted_sleep_hours: predicted.as_hours(),
        })
    }
}
