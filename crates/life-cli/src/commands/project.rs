//! Project an ad-hoc trait vector.

use std::collections::BTreeMap;

use clap::Args;

use life_engine::{ProjectionConfig, ProjectionEngine, ProjectionResult, TraitVector};

use super::{finish, parse_named_value};
use crate::error::{CliError, CliResult};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Trait as name=value; repeat for each trait
    #[arg(long = "trait", value_parser = parse_named_value, allow_negative_numbers = true, required = true)]
    pub traits: Vec<(String, f64)>,

    /// Importance weight as name=value; repeat as needed
    #[arg(long = "weight", value_parser = parse_named_value)]
    pub weights: Vec<(String, f64)>,

    /// Weight for traits without an explicit --weight
    #[arg(long, default_value = "1.0")]
    pub default_weight: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_project(args: ProjectArgs) -> i32 {
    finish("project", run(&args))
}

fn run(args: &ProjectArgs) -> CliResult<()> {
    let result = project_args(args)?;
    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::json("projection result", e))?;
        println!("{}", json);
    } else {
        print!("{}", render_projection(&result));
    }
    Ok(())
}

fn project_args(args: &ProjectArgs) -> CliResult<ProjectionResult> {
    let mut seen = BTreeMap::new();
    for (name, value) in &args.traits {
        if seen.insert(name.clone(), *value).is_some() {
            return Err(CliError::InvalidArgument(format!(
                "trait '{}' given more than once",
                name
            )));
        }
    }
    let vector = TraitVector::new(seen)?;
    let config = ProjectionConfig {
        weights: args.weights.iter().cloned().collect(),
        default_weight: args.default_weight,
    };
    let engine = ProjectionEngine::try_new(config)?;
    Ok(engine.project(&vector)?)
}

pub fn render_projection(result: &ProjectionResult) -> String {
    let mut out = String::new();
    for (name, weight) in &result.normalized {
        out.push_str(&format!("{:<20} {:.4}\n", name, weight));
    }
    out.push_str(&format!("coherence            {:.4}\n", result.coherence));
    out.push_str(&format!(
        "projection_strength  {:.4}\n",
        result.projection_strength
    ));
    if result.degenerate {
        out.push_str("degenerate: all trait values are zero\n");
    } else if let Some((name, weight)) = result.dominant_trait() {
        out.push_str(&format!("dominant             {} ({:.4})\n", name, weight));
    }
    out
}
