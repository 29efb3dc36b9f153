//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default wake times per profile
//! - Model artifact path
//! - Display and acknowledgment behavior
//!
//! Configuration is stored at `~/.config/bedrest/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::inputs::{FormInputs, WakeProfile};
use crate::time_of_day::TimeOfDay;

/// Returns `~/.config/bedrest[-dev]/` based on BEDREST_ENV.
///
/// Set BEDREST_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BEDREST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("bedrest-dev")
    } else {
        base_dir.join("bedrest")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Per-profile default wake times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeConfig {
    #[serde(default = "default_standard_wake")]
    pub standard: TimeOfDay,
    #[serde(default = "default_evening_wake")]
    pub evening: TimeOfDay,
}

/// Model artifact configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to an external model artifact. When unset, the bundled
    /// default coefficients are used.
    #[serde(default)]
    pub path: Option<String>,
}

/// Display behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show bedtimes as 24-hour clock instead of AM/PM.
    #[serde(default)]
    pub clock_24h: bool,
    /// Reset sleep/coffee inputs to defaults after acknowledging a result.
    #[serde(default = "default_true")]
    pub reset_inputs_on_acknowledge: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/bedrest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wake: WakeConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_standard_wake() -> TimeOfDay {
    WakeProfile::Standard.default_wake_time()
}

fn default_evening_wake() -> TimeOfDay {
    WakeProfile::EveningShift.default_wake_time()
}

fn default_true() -> bool {
    true
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            standard: default_standard_wake(),
            evening: default_evening_wake(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_24h: false,
            reset_inputs_on_acknowledge: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wake: WakeConfig::default(),
            model: ModelConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        Some(match val {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a config value by dot-separated key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }

    /// Build form inputs seeded from the configured wake times.
    pub fn form_inputs(&self, profile: WakeProfile) -> FormInputs {
        FormInputs {
            wake_standard: self.wake.standard,
            wake_evening: self.wake.evening,
            profile,
            ..FormInputs::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.wake.standard, TimeOfDay::new(7, 0).unwrap());
        assert_eq!(cfg.wake.evening, TimeOfDay::new(18, 0).unwrap());
        assert!(cfg.model.path.is_none());
        assert!(!cfg.ui.clock_24h);
        assert!(cfg.ui.reset_inputs_on_acknowledge);
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.wake.standard, cfg.wake.standard);
        assert_eq!(back.ui.clock_24h, cfg.ui.clock_24h);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str("[ui]\nclock_24h = true\n").unwrap();
        assert!(cfg.ui.clock_24h);
        assert!(cfg.ui.reset_inputs_on_acknowledge);
        assert_eq!(cfg.wake.standard, TimeOfDay::new(7, 0).unwrap());
    }

    #[test]
    fn test_get_by_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("wake.standard").as_deref(), Some("07:00"));
        assert_eq!(cfg.get("ui.clock_24h").as_deref(), Some("false"));
        assert!(cfg.get("nonsense.key").is_none());
    }

    #[test]
    fn test_set_by_path_validates() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "wake.standard", "06:30").unwrap();
        let cfg: Config = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.wake.standard, TimeOfDay::new(6, 30).unwrap());

        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "wake.standard", "25:00").unwrap();
        assert!(serde_json::from_value::<Config>(json).is_err());

        let mut json = serde_json::to_value(Config::default()).unwrap();
        let err = Config::set_json_value_by_path(&mut json, "no.such", "x").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn test_form_inputs_uses_configured_wake_times() {
        let cfg: Config = toml::from_str("[wake]\nstandard = \"05:45\"\n").unwrap();
        let inputs = cfg.form_inputs(WakeProfile::Standard);
        assert_eq!(inputs.active_wake_time(), TimeOfDay::new(5, 45).unwrap());

        let inputs = cfg.form_inputs(WakeProfile::EveningShift);
        assert_eq!(inputs.active_wake_time(), TimeOfDay::new(18, 0).unwrap());
    }
}
