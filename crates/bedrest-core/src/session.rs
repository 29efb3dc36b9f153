//! Estimation session state machine.
//!
//! Mirrors the original form's flow: the user edits inputs, requests an
//! estimate, gets shown a result (or the error message) and acknowledges
//! it. Two states, two transitions, nothing else.

use crate::estimator::{BedtimeEstimator, Estimate};
use crate::inputs::FormInputs;
use crate::model::Predictor;

/// Outcome of an estimate request. Success and failure are both just
/// "something to show"; the state machine does not distinguish them.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Estimated(Estimate),
    Failed { message: String },
}

/// Session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    ShowingResult(Outcome),
}

/// A single estimation session: the live inputs plus the display state.
#[derive(Debug)]
pub struct Session {
    pub inputs: FormInputs,
    state: SessionState,
    /// Restore sleep/coffee defaults when a result is acknowledged.
    reset_on_acknowledge: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FormInputs::default(), true)
    }
}

impl Session {
    pub fn new(inputs: FormInputs, reset_on_acknowledge: bool) -> Self {
        Self {
            inputs,
            state: SessionState::Idle,
            reset_on_acknowledge,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the estimator over the active inputs and move to
    /// `ShowingResult`. Re-entrant requests while a result is showing
    /// are ignored (the form disables the button).
    pub fn calculate<P: Predictor>(&mut self, estimator: &BedtimeEstimator<P>) -> &SessionState {
        if matches!(self.state, SessionState::ShowingResult(_)) {
            return &self.state;
        }
        let outcome = match estimator.estimate(
            self.inputs.active_wake_time(),
            self.inputs.sleep,
            self.inputs.coffee,
        ) {
            Ok(estimate) => Outcome::Estimated(estimate),
            Err(e) => Outcome::Failed {
                message: e.to_string(),
            },
        };
        self.state = SessionState::ShowingResult(outcome);
        &self.state
    }

    /// Dismiss the shown result and return to `Idle`.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, SessionState::ShowingResult(_)) {
            self.state = SessionState::Idle;
            if self.reset_on_acknowledge {
                self.inputs.reset_adjustables();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::estimator::USER_MESSAGE;
    use crate::inputs::{CoffeeIntake, SleepAmount};
    use crate::model::{PredictedSleep, SleepFeatures};
    use crate::time_of_day::TimeOfDay;

    struct FixedHours(f64);

    impl Predictor for FixedHours {
        fn predict(&self, _: &SleepFeatures) -> Result<PredictedSleep, ModelError> {
            Ok(PredictedSleep::hours(self.0))
        }
    }

    struct Broken;

    impl Predictor for Broken {
        fn predict(&self, _: &SleepFeatures) -> Result<PredictedSleep, ModelError> {
            Err(ModelError::InvalidArtifact("gone".into()))
        }
    }

    #[test]
    fn test_success_cycle() {
        let estimator = BedtimeEstimator::new(FixedHours(7.5));
        let mut session = Session::default();
        assert_eq!(*session.state(), SessionState::Idle);

        let state = session.calculate(&estimator);
        match state {
            SessionState::ShowingResult(Outcome::Estimated(e)) => {
                assert_eq!(e.bedtime, TimeOfDay::new(23, 30).unwrap());
            }
            other => panic!("unexpected state: {other:?}"),
        }

        session.acknowledge();
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let estimator = BedtimeEstimator::new(Broken);
        let mut session = Session::default();
        session.calculate(&estimator);
        match session.state() {
            SessionState::ShowingResult(Outcome::Failed { message }) => {
                assert_eq!(message, USER_MESSAGE);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_acknowledge_resets_adjustables() {
        let estimator = BedtimeEstimator::new(FixedHours(7.5));
        let mut session = Session::default();
        session.inputs.sleep = SleepAmount::new(11.0).unwrap();
        session.inputs.coffee = CoffeeIntake::new(5).unwrap();

        session.calculate(&estimator);
        session.acknowledge();
        assert_eq!(session.inputs.sleep.hours(), 8.0);
        assert_eq!(session.inputs.coffee.cups(), 1);
    }

    #[test]
    fn test_no_reset_when_disabled() {
        let estimator = BedtimeEstimator::new(FixedHours(7.5));
        let mut session = Session::new(FormInputs::default(), false);
        session.inputs.sleep = SleepAmount::new(11.0).unwrap();

        session.calculate(&estimator);
        session.acknowledge();
        assert_eq!(session.inputs.sleep.hours(), 11.0);
    }

    #[test]
    fn test_reentrant_calculate_ignored() {
        let estimator = BedtimeEstimator::new(FixedHours(7.5));
        let mut session = Session::default();
        session.calculate(&estimator);
        let first = session.state().clone();

        session.inputs.sleep = SleepAmount::new(4.0).unwrap();
        session.calculate(&estimator);
        assert_eq!(*session.state(), first);
    }

    #[test]
    fn test_acknowledge_in_idle_is_noop() {
        let mut session = Session::default();
        session.inputs.sleep = SleepAmount::new(11.0).unwrap();
        session.acknowledge();
        assert_eq!(*session.state(), SessionState::Idle);
        assert_eq!(session.inputs.sleep.hours(), 11.0);
    }
}
