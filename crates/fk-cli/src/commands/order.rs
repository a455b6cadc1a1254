use comfy_table::{ContentArrangement, Table};
use fk_rules::EngineConfig;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, actors: &[String]) -> Result<(), String> {
    let mut engine = super::build_engine(global, EngineConfig::default())?;
    let order = engine.turn_order(actors).map_err(|e| e.to_string())?;

    if global.json {
        return super::print_json(&order);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Actor", "Initiative"]);
    for entry in &order {
        table.add_row(vec![
            entry.rank.to_string(),
            entry.actor_id.clone(),
            entry.initiative.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
