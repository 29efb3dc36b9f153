//! Model artifact commands.

use clap::Subcommand;
use std::path::{Path, PathBuf};

use bedrest_core::{Config, DurationUnit, LinearModel, ModelError, Predictor, SleepFeatures};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the currently resolved model
    Show,
    /// Load an artifact and run a probe prediction against it
    Check {
        /// Artifact path
        path: PathBuf,
    },
    /// Write the bundled default model as a JSON artifact
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where the active model came from.
pub enum ModelSource {
    Builtin,
    Artifact(PathBuf),
}

/// Resolve the model: explicit path, then configured path, then the
/// bundled default coefficients.
pub fn resolve_model(
    override_path: Option<&Path>,
    config: &Config,
) -> Result<(LinearModel, ModelSource), ModelError> {
    if let Some(path) = override_path {
        return Ok((
            LinearModel::load(path)?,
            ModelSource::Artifact(path.to_path_buf()),
        ));
    }
    if let Some(path) = &config.model.path {
        let path = PathBuf::from(path);
        return Ok((LinearModel::load(&path)?, ModelSource::Artifact(path)));
    }
    Ok((LinearModel::default(), ModelSource::Builtin))
}

/// Reference feature vector used for probing: 07:00 wake, 8h sleep,
/// one cup of coffee.
fn probe_features() -> SleepFeatures {
    SleepFeatures {
        wake_seconds: 25_200.0,
        desired_sleep_hours: 8.0,
        coffee_cups: 1.0,
    }
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Show => {
            let config = Config::load()?;
            let (model, source) = resolve_model(None, &config)?;
            match source {
                ModelSource::Builtin => println!("source: builtin"),
                ModelSource::Artifact(path) => println!("source: {}", path.display()),
            }
            println!("name: {}", model.name);
            let unit = match model.unit {
                DurationUnit::Hours => "hours",
                DurationUnit::Seconds => "seconds",
            };
            println!("unit: {unit}");
            println!("intercept: {}", model.intercept);
            println!("weights:");
            println!("  wake_seconds: {}", model.weights.wake_seconds);
            println!("  desired_sleep_hours: {}", model.weights.desired_sleep_hours);
            println!("  coffee_cups: {}", model.weights.coffee_cups);
        }
        ModelAction::Check { path } => {
            let model = LinearModel::load(&path)?;
            let prediction = model.predict(&probe_features())?;
            println!("ok: {}", model.name);
            println!(
                "probe (wake 07:00, sleep 8.0h, coffee 1): {:.2} h predicted sleep",
                prediction.as_hours()
            );
        }
        ModelAction::Init { path, force } => {
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            LinearModel::default().save(&path)?;
            println!("wrote default model to {}", path.display());
        }
    }
    Ok(())
}
