//! Exercise the whole engine interface once per system.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fk_rules::{
    AbilityCheckRequest, AbilityCheckResult, RulesEngine, SystemKind, TurnOrderEntry, engine_for,
};
use serde::Serialize;

use crate::GlobalArgs;

const DEFAULT_ACTORS: [&str; 3] = ["pc1", "pc2", "goblin"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmokeReport {
    system: SystemKind,
    seed: u64,
    check: AbilityCheckResult,
    damage_expression: &'static str,
    damage: i32,
    turn_order: Vec<TurnOrderEntry>,
    draws: u64,
}

pub fn run(global: &GlobalArgs, actors: &[String], all: bool) -> Result<(), String> {
    let systems = if all {
        SystemKind::ALL.to_vec()
    } else {
        vec![super::system_kind(global)?]
    };
    let actors: Vec<String> = if actors.is_empty() {
        DEFAULT_ACTORS.iter().map(|s| s.to_string()).collect()
    } else {
        actors.to_vec()
    };

    let reports = systems
        .into_iter()
        .map(|kind| exercise(kind, global.seed, &actors))
        .collect::<Result<Vec<_>, String>>()?;

    if global.json {
        return super::print_json(&reports);
    }

    for report in &reports {
        print_report(report);
    }
    println!("  {}", "smoke test passed".green().bold());
    Ok(())
}

/// One pass over the contract: session, check, damage, turn order.
fn exercise(kind: SystemKind, seed: u64, actors: &[String]) -> Result<SmokeReport, String> {
    let mut engine: Box<dyn RulesEngine> = engine_for(kind, Default::default());
    engine.init_session(seed);

    let (skill, damage_expression) = match kind {
        SystemKind::Dnd5e => ("athletics", "1d8+2"),
        SystemKind::Pbta => ("act_under_fire", "1d6"),
    };
    let request = AbilityCheckRequest::new(&actors[0], skill, 12);

    let step = |name: &str, e: fk_rules::EngineError| format!("{kind} {name} failed: {e}");
    let check = engine
        .ability_check(&request)
        .map_err(|e| step("ability check", e))?;
    let damage = engine
        .damage_roll(damage_expression)
        .map_err(|e| step("damage roll", e))?;
    let turn_order = engine
        .turn_order(actors)
        .map_err(|e| step("turn order", e))?;

    if turn_order.len() != actors.len() {
        return Err(format!(
            "{kind} turn order returned {} entries for {} actors",
            turn_order.len(),
            actors.len()
        ));
    }

    let draws = engine.session_audit().map(|a| a.draws).unwrap_or(0);
    Ok(SmokeReport {
        system: kind,
        seed,
        check,
        damage_expression,
        damage,
        turn_order,
        draws,
    })
}

fn print_report(report: &SmokeReport) {
    println!(
        "  {} {}",
        report.system.display_name().bold(),
        format!("({}, seed={})", report.system, report.seed).dimmed()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Step", "Result"]);
    table.add_row(vec![
        "ability check".to_string(),
        format!(
            "roll {} total {} margin {:+} -> {}",
            report.check.roll,
            report.check.total,
            report.check.margin,
            if report.check.success { "success" } else { "failure" }
        ),
    ]);
    table.add_row(vec![
        "damage roll".to_string(),
        format!("{} = {}", report.damage_expression, report.damage),
    ]);
    let order: Vec<String> = report
        .turn_order
        .iter()
        .map(|e| format!("{}. {} ({})", e.rank, e.actor_id, e.initiative))
        .collect();
    table.add_row(vec!["turn order".to_string(), order.join(", ")]);
    table.add_row(vec!["dice drawn".to_string(), report.draws.to_string()]);
    println!("{table}");
    println!();
}
