//! Validated form inputs.
//!
//! The original form exposes four controls: a wake-time picker (with a
//! standard and an evening-shift variant), a sleep-amount stepper and a
//! coffee-intake stepper. The newtypes here carry the control domains so
//! the estimator only ever sees values the controls could produce.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time_of_day::TimeOfDay;

/// Desired sleep in hours. Domain [4.0, 12.0] in steps of 0.25.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: f64 = 8.0;

    /// Validate a raw value against the stepper's domain and step grid.
    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || hours < Self::MIN || hours > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "sleep_amount".into(),
                message: format!("{hours} is not in [{}, {}]", Self::MIN, Self::MAX),
            });
        }
        // Steps of 0.25 are exact in binary floating point
        if (hours / Self::STEP).fract() != 0.0 {
            return Err(ValidationError::OffStep {
                field: "sleep_amount".into(),
                value: hours,
                step: Self::STEP,
            });
        }
        Ok(Self(hours))
    }

    /// Clamp to the domain and snap to the step grid, the way a stepper
    /// control would. Never fails.
    pub fn clamped(hours: f64) -> Self {
        let snapped = (hours / Self::STEP).round() * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for SleepAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepAmount> for f64 {
    fn from(value: SleepAmount) -> Self {
        value.0
    }
}

/// Daily coffee intake in cups. Domain [1, 12].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CoffeeIntake(u8);

impl CoffeeIntake {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;
    pub const DEFAULT: u8 = 1;

    pub fn new(cups: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            return Err(ValidationError::OutOfRange {
                field: "coffee_intake".into(),
                message: format!("{cups} is not in [{}, {}]", Self::MIN, Self::MAX),
            });
        }
        Ok(Self(cups))
    }

    /// Clamp to the domain. Never fails.
    pub fn clamped(cups: u8) -> Self {
        Self(cups.clamp(Self::MIN, Self::MAX))
    }

    pub fn cups(&self) -> u8 {
        self.0
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for CoffeeIntake {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoffeeIntake> for u8 {
    fn from(value: CoffeeIntake) -> Self {
        value.0
    }
}

/// Which of the two stored wake times is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeProfile {
    /// Morning waker, default wake time 07:00.
    #[default]
    Standard,
    /// Evening-shift worker, default wake time 18:00.
    EveningShift,
}

impl WakeProfile {
    /// Built-in default wake time for this profile.
    pub fn default_wake_time(&self) -> TimeOfDay {
        let hour: u32 = match self {
            WakeProfile::Standard => 7,
            WakeProfile::EveningShift => 18,
        };
        TimeOfDay::from_seconds_since_midnight(hour * 3600)
    }
}

/// The four live form inputs.
///
/// Two wake times are stored; `profile` decides which one the estimate
/// uses. Sleep and coffee can be restored to their defaults when a
/// result is acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInputs {
    pub wake_standard: TimeOfDay,
    pub wake_evening: TimeOfDay,
    pub sleep: SleepAmount,
    pub coffee: CoffeeIntake,
    pub profile: WakeProfile,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            wake_standard: WakeProfile::Standard.default_wake_time(),
            wake_evening: WakeProfile::EveningShift.default_wake_time(),
            sleep: SleepAmount::default(),
            coffee: CoffeeIntake::default(),
            profile: WakeProfile::default(),
        }
    }
}

impl FormInputs {
    /// The wake time selected by the active profile.
    pub fn active_wake_time(&self) -> TimeOfDay {
        match self.profile {
            WakeProfile::Standard => self.wake_standard,
            WakeProfile::EveningShift => self.wake_evening,
        }
    }

    /// Restore the stepper-backed inputs to their defaults.
    pub fn reset_adjustables(&mut self) {
        self.sleep = SleepAmount::default();
        self.coffee = CoffeeIntake::default();
    }
}
