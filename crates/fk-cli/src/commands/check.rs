use colored::Colorize;
use fk_rules::{AbilityCheckRequest, AbilityCheckResult, EngineConfig, MoveOutcome, SystemKind};
use serde::Serialize;

use crate::GlobalArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    system: SystemKind,
    seed: u64,
    request: AbilityCheckRequest,
    result: AbilityCheckResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<MoveOutcome>,
}

pub fn run(
    global: &GlobalArgs,
    actor: &str,
    skill: &str,
    difficulty: Option<i32>,
    modifiers: &[(String, i32)],
) -> Result<(), String> {
    let config = modifiers
        .iter()
        .fold(EngineConfig::default(), |config, (name, value)| {
            config.with_modifier(actor, name, *value)
        });
    let mut engine = super::build_engine(global, config)?;

    let request = AbilityCheckRequest {
        actor_id: actor.to_string(),
        skill: skill.to_string(),
        difficulty,
    };
    let result = engine.ability_check(&request).map_err(|e| e.to_string())?;
    let system = engine.system();
    let tier = (system == SystemKind::Pbta).then(|| MoveOutcome::of(&result));

    if global.json {
        return super::print_json(&CheckOutput {
            system,
            seed: global.seed,
            request,
            result,
            tier,
        });
    }

    let verdict = match tier {
        Some(tier @ (MoveOutcome::Strong | MoveOutcome::Weak)) => tier.to_string().green(),
        Some(tier) => tier.to_string().red(),
        None if result.success => "Success".green(),
        None => "Failure".red(),
    };

    println!(
        "  {} checks {} ({})",
        actor.bold(),
        skill,
        system.display_name().dimmed()
    );
    println!(
        "  roll {}  total {}  margin {:+}  {}",
        result.roll,
        result.total,
        result.margin,
        verdict.bold()
    );
    Ok(())
}
