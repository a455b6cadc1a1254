use colored::Colorize;
use fk_rules::SystemKind;
use serde::Serialize;

use crate::GlobalArgs;

#[derive(Serialize)]
struct SystemInfo {
    key: SystemKind,
    name: &'static str,
}

pub fn run(global: &GlobalArgs) -> Result<(), String> {
    if global.json {
        let systems: Vec<SystemInfo> = SystemKind::ALL
            .into_iter()
            .map(|key| SystemInfo {
                key,
                name: key.display_name(),
            })
            .collect();
        return super::print_json(&systems);
    }

    for kind in SystemKind::ALL {
        println!("  {:<8} {}", kind.key().bold(), kind.display_name());
    }
    Ok(())
}
