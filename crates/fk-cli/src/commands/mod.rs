pub mod check;
pub mod order;
pub mod roll;
pub mod smoke;
pub mod systems;

use fk_rules::{EngineConfig, RulesEngine, SystemKind, make_engine_from_config};
use serde::Serialize;

use crate::GlobalArgs;

/// Resolve the selected rules system once for this process.
fn system_kind(global: &GlobalArgs) -> Result<SystemKind, String> {
    global.system.parse().map_err(|e: fk_rules::EngineError| e.to_string())
}

/// Build an engine for the selected system with a session already started.
fn build_engine(global: &GlobalArgs, config: EngineConfig) -> Result<Box<dyn RulesEngine>, String> {
    let config = config
        .with_system(system_kind(global)?)
        .with_seed(global.seed);
    Ok(make_engine_from_config(&config))
}

/// Parse `name=value` into a modifier entry.
pub fn parse_modifier(s: &str) -> Result<(String, i32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing modifier name in '{s}'"));
    }
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("modifier value must be an integer, got '{}'", value.trim()))?;
    Ok((name.to_string(), value))
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modifier_pairs() {
        assert_eq!(parse_modifier("athletics=5"), Ok(("athletics".to_string(), 5)));
        assert_eq!(parse_modifier("cool = -1"), Ok(("cool".to_string(), -1)));
    }

    #[test]
    fn parse_modifier_rejects_garbage() {
        assert!(parse_modifier("athletics").is_err());
        assert!(parse_modifier("=3").is_err());
        assert!(parse_modifier("hard=lots").is_err());
    }
}
