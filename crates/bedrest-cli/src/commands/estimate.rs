//! Bedtime estimation command.

use clap::Args;
use std::path::PathBuf;

use bedrest_core::{
    BedtimeEstimator, CoffeeIntake, Config, SleepAmount, TimeOfDay, WakeProfile, USER_MESSAGE,
};

use super::model::resolve_model;

#[derive(Args)]
pub struct EstimateArgs {
    /// Wake-up time (HH:MM); defaults to the active profile's configured time
    #[arg(long)]
    pub wake: Option<String>,

    /// Use the evening-shift wake profile
    #[arg(long)]
    pub evening: bool,

    /// Desired amount of sleep in hours (4.0 to 12.0, steps of 0.25)
    #[arg(long, default_value_t = SleepAmount::DEFAULT)]
    pub sleep: f64,

    /// Daily coffee intake in cups (1 to 12)
    #[arg(long, default_value_t = CoffeeIntake::DEFAULT)]
    pub coffee: u8,

    /// Model artifact path (overrides the configured one)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Display the bedtime on a 24-hour clock
    #[arg(long)]
    pub clock_24h: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let profile = if args.evening {
        WakeProfile::EveningShift
    } else {
        WakeProfile::Standard
    };

    // Input validation happens here, before the core is invoked
    let wake: TimeOfDay = match &args.wake {
        Some(s) => s.parse()?,
        None => match profile {
            WakeProfile::Standard => config.wake.standard,
            WakeProfile::EveningShift => config.wake.evening,
        },
    };
    let sleep = SleepAmount::new(args.sleep)?;
    let coffee = CoffeeIntake::new(args.coffee)?;

    let clock24 = args.clock_24h || config.ui.clock_24h;

    // Any model failure, load or inference, surfaces as the one fixed
    // message with no further detail
    let (model, _source) = match resolve_model(args.model.as_deref(), &config) {
        Ok(resolved) => resolved,
        Err(_) => {
            eprintln!("{USER_MESSAGE}");
            std::process::exit(1);
        }
    };

    let estimator = BedtimeEstimator::new(model);
    let estimate = match estimator.estimate(wake, sleep, coffee) {
        Ok(estimate) => estimate,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::json!({
            "bedtime": estimate.bedtime.to_string(),
            "display": estimate.bedtime.format_short(clock24),
            "predicted_sleep_hours": estimate.predicted_sleep_hours,
            "wake": wake.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!(
            "Your ideal bedtime is {}",
            estimate.bedtime.format_short(clock24)
        );
        println!(
            "  wake at {}, predicted sleep {:.2} h",
            wake.format_short(clock24),
            estimate.predicted_sleep_hours
        );
    }

    Ok(())
}
