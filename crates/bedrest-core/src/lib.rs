//! # BedRest Core Library
//!
//! Core logic for BedRest, a bedtime estimator: given a desired wake-up
//! time, a target amount of sleep and daily coffee intake, a pre-trained
//! regression model predicts the sleep the user will actually get and
//! the estimator subtracts it from the wake time.
//!
//! ## Architecture
//!
//! - **Estimator**: a pure operation over validated inputs and an
//!   injectable [`Predictor`]
//! - **Model**: the regression model as an opaque capability; a linear
//!   model loaded from a JSON artifact ships as the default backend
//! - **Session**: the two-state request/acknowledge flow the form UI
//!   drives
//! - **Config**: TOML-based preferences (wake-time defaults, artifact
//!   path, display options)
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: the estimation operation
//! - [`Predictor`]: trait the model backend implements
//! - [`TimeOfDay`]: clock-time value type used throughout
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod estimator;
pub mod inputs;
pub mod model;
pub mod session;
pub mod time_of_day;

pub use config::Config;
pub use error::{ConfigError, CoreError, ModelError, ValidationError};
pub use estimator::{BedtimeEstimator, Estimate, EstimationError, USER_MESSAGE};
pub use inputs::{CoffeeIntake, FormInputs, SleepAmount, WakeProfile};
pub use model::{DurationUnit, LinearModel, PredictedSleep, Predictor, SleepFeatures};
pub use session::{Outcome, Session, SessionState};
pub use time_of_day::TimeOfDay;
