use colored::Colorize;
use fk_rules::EngineConfig;
use serde::Serialize;

use crate::GlobalArgs;

#[derive(Serialize)]
struct RollOutput<'a> {
    system: String,
    seed: u64,
    expression: &'a str,
    total: i32,
}

pub fn run(global: &GlobalArgs, expression: &str) -> Result<(), String> {
    let mut engine = super::build_engine(global, EngineConfig::default())?;
    let total = engine.damage_roll(expression).map_err(|e| e.to_string())?;

    if global.json {
        return super::print_json(&RollOutput {
            system: engine.system().to_string(),
            seed: global.seed,
            expression,
            total,
        });
    }

    println!(
        "  {} {} {}",
        expression.bold(),
        "=>".dimmed(),
        total.to_string().green().bold()
    );
    Ok(())
}
