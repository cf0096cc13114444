//! One direct trait update.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use life_engine::{StimulusObservation, TraitKind, TraitUpdater, UpdateConfig};

use super::{finish, Preset, UpdateOverrides};
use crate::error::{CliError, CliResult};

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Trait kind: linear or saturating
    #[arg(long)]
    pub kind: TraitKind,

    /// Current trait value
    #[arg(long, allow_negative_numbers = true)]
    pub value: f64,

    /// Engagement score for this cycle
    #[arg(long, allow_negative_numbers = true)]
    pub engagement: f64,

    /// Environmental factor for this cycle
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub environmental_factor: f64,

    /// Time since the previous observation
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub elapsed_time: f64,

    #[arg(long, value_enum, default_value_t = Preset::Default)]
    pub preset: Preset,

    #[command(flatten)]
    pub overrides: UpdateOverrides,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct UpdateOutput {
    kind: TraitKind,
    previous: f64,
    next: f64,
    delta: f64,
    config: UpdateConfig,
}

pub fn handle_update(args: UpdateArgs) -> i32 {
    finish("update", run(&args))
}

fn run(args: &UpdateArgs) -> CliResult<()> {
    let output = compute(args)?;
    if args.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| CliError::json("update result", e))?;
        println!("{}", json);
    } else {
        println!(
            "{}: {:.6} -> {:.6} (delta {:+.6})",
            output.kind, output.previous, output.next, output.delta
        );
    }
    Ok(())
}

fn compute(args: &UpdateArgs) -> CliResult<UpdateOutput> {
    let mut config = args.preset.config();
    args.overrides.apply(&mut config);
    let updater = TraitUpdater::try_new(config)?;

    let observation = StimulusObservation::new(
        "cli",
        args.engagement,
        args.environmental_factor,
        args.elapsed_time,
    );
    let next = updater.next_value(args.kind, args.value, &observation)?;
    debug!(kind = %args.kind, previous = args.value, next, "direct update");

    Ok(UpdateOutput {
        kind: args.kind,
        previous: args.value,
        next,
        delta: next - args.value,
        config: updater.config().clone(),
    })
}
