//! Synthetic batch generation.
//!
//! Every participant carries two traits: `engagement` (linear, starting at
//! 0) and `neuroplasticity` (saturating, starting uniformly in `[0, S/2]`).
//! Observations draw engagement from `[0, 1]`, the environmental factor
//! from `[-0.5, 0.5]` and elapsed time from `[0.1, 2.0]`. The same seed
//! always yields the same document.

use std::path::PathBuf;

use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use life_engine::{EngineConfig, EntityInput, StimulusObservation, TraitState, TraitValue};

use super::{finish, Preset, UpdateOverrides};
use crate::document::BatchDocument;
use crate::error::CliResult;

pub const LINEAR_TRAIT: &str = "engagement";
pub const SATURATING_TRAIT: &str = "neuroplasticity";

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of synthetic participants
    #[arg(long, default_value = "100")]
    pub participants: usize,

    /// Observations per participant
    #[arg(long, default_value = "10")]
    pub cycles: usize,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Update constants to embed in the document
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    pub preset: Preset,

    #[command(flatten)]
    pub overrides: UpdateOverrides,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn handle_simulate(args: SimulateArgs) -> i32 {
    finish("simulate", run(&args))
}

fn run(args: &SimulateArgs) -> CliResult<()> {
    let mut config = EngineConfig {
        update: args.preset.config(),
        ..Default::default()
    };
    args.overrides.apply(&mut config.update);

    let document = generate(args.participants, args.cycles, args.seed, config)?;
    info!(
        participants = args.participants,
        cycles = args.cycles,
        seed = args.seed,
        "synthetic batch generated"
    );

    match &args.output {
        Some(path) => {
            document.save(path)?;
            println!(
                "Wrote {} participants x {} cycles to {}",
                args.participants,
                args.cycles,
                path.display()
            );
        }
        None => println!("{}", document.to_json()?),
    }
    Ok(())
}

/// Build a synthetic batch document from `seed`.
pub fn generate(
    participants: usize,
    cycles: usize,
    seed: u64,
    config: EngineConfig,
) -> CliResult<BatchDocument> {
    let config = config.checked()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ceiling = config.update.saturation_level;

    let entities = (0..participants)
        .map(|i| -> CliResult<EntityInput> {
            let id = format!("participant-{:04}", i + 1);
            let baseline = rng.gen_range(0.0..=ceiling / 2.0);
            let initial = TraitState::new(
                id.as_str(),
                [
                    (LINEAR_TRAIT, TraitValue::linear(0.0)),
                    (SATURATING_TRAIT, TraitValue::saturating(baseline)),
                ],
            )?;
            let observations = (0..cycles)
                .map(|_| {
                    StimulusObservation::new(
                        id.as_str(),
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(-0.5..=0.5),
                        rng.gen_range(0.1..=2.0),
                    )
                })
                .collect();
            Ok(EntityInput::new(initial, observations))
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(BatchDocument { config, entities })
}
