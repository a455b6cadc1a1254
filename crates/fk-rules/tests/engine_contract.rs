//! Contract tests for the fk-rules engine.
use fk_rules::{
    AbilityCheckRequest, AbilityCheckResult, EngineError, MoveOutcome, RulesEngine, Session,
    SystemKind, TurnOrderEntry, make_engine,
};

fn engine(kind: &str, seed: u64) -> Box<dyn RulesEngine> {
    let mut engine = make_engine(kind).unwrap();
    engine.init_session(seed);
    engine
}

fn scripted(kind: &str, faces: Vec<u32>) -> Box<dyn RulesEngine> {
    let mut engine = make_engine(kind).unwrap();
    engine.attach_session(Session::scripted(0, faces));
    engine
}

fn actors(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Run the full interface once, the way a combat handler would.
fn encounter(engine: &mut dyn RulesEngine) -> (Vec<AbilityCheckResult>, Vec<i32>, Vec<TurnOrderEntry>) {
    let order = engine
        .turn_order(&actors(&["pc1", "pc2", "goblin", "ogre"]))
        .unwrap();
    let mut checks = Vec::new();
    let mut damage = Vec::new();
    for (skill, difficulty) in [("athletics", 12), ("stealth", 15), ("go_aggro", 7)] {
        let result = engine
            .ability_check(&AbilityCheckRequest::new("pc1", skill, difficulty))
            .unwrap();
        if result.success {
            damage.push(engine.damage_roll("1d8+2").unwrap());
        }
        checks.push(result);
    }
    (checks, damage, order)
}

// ---------------------------------------------------------------------------
// factory
// ---------------------------------------------------------------------------

#[test]
fn factory_rejects_unknown_system() {
    let err = make_engine("unknown-system").unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedSystem(_)));
    assert_eq!(err.to_string(), "unsupported rules system: 'unknown-system'");
}

#[test]
fn factory_builds_requested_system() {
    assert_eq!(make_engine("dnd5e").unwrap().system(), SystemKind::Dnd5e);
    assert_eq!(make_engine("pbta").unwrap().system(), SystemKind::Pbta);
}

// ---------------------------------------------------------------------------
// session contract
// ---------------------------------------------------------------------------

#[test]
fn every_operation_needs_a_session() {
    for kind in ["dnd5e", "pbta"] {
        let mut engine = make_engine(kind).unwrap();
        let request = AbilityCheckRequest::new("pc1", "athletics", 12);
        assert!(matches!(
            engine.ability_check(&request),
            Err(EngineError::UninitializedSession(_))
        ));
        assert!(matches!(
            engine.damage_roll("2d6+3"),
            Err(EngineError::UninitializedSession(_))
        ));
        assert!(matches!(
            engine.turn_order(&actors(&["pc1"])),
            Err(EngineError::UninitializedSession(_))
        ));
    }
}

#[test]
fn uninitialized_error_message() {
    let mut engine = make_engine("dnd5e").unwrap();
    let err = engine.damage_roll("1d6").unwrap_err();
    assert_eq!(
        err.to_string(),
        "no session: call init_session before damage_roll"
    );
}

// ---------------------------------------------------------------------------
// fixtures
// ---------------------------------------------------------------------------

#[test]
fn seed_42_athletics_check_is_reproducible() {
    let request = AbilityCheckRequest::new("pc1", "athletics", 12);
    let first = engine("dnd5e", 42).ability_check(&request).unwrap();
    let second = engine("dnd5e", 42).ability_check(&request).unwrap();
    assert_eq!(first, second);
    assert!((1..=20).contains(&first.roll));
    assert_eq!(first.total, first.roll);
    assert_eq!(first.margin, first.total - 12);
}

#[test]
fn two_d6_plus_three_with_three_and_five() {
    for kind in ["dnd5e", "pbta"] {
        let mut engine = scripted(kind, vec![3, 5]);
        assert_eq!(engine.damage_roll("2d6+3").unwrap(), 11);
    }
}

// ---------------------------------------------------------------------------
// determinism
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_encounter() {
    for kind in ["dnd5e", "pbta"] {
        for seed in [0, 1, 42, u64::MAX] {
            let mut a = engine(kind, seed);
            let mut b = engine(kind, seed);
            assert_eq!(encounter(a.as_mut()), encounter(b.as_mut()));
        }
    }
}

#[test]
fn reinitialising_replays_the_session() {
    let mut engine = engine("dnd5e", 9);
    let first = encounter(engine.as_mut());
    engine.init_session(9);
    assert_eq!(encounter(engine.as_mut()), first);
}

// ---------------------------------------------------------------------------
// adapter behaviour
// ---------------------------------------------------------------------------

#[test]
fn d20_natural_extremes_override_totals() {
    let mut engine = scripted("dnd5e", vec![20, 1]);
    engine.modifiers_mut().set("pc1", "athletics", -5);
    let hit = engine
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", 30))
        .unwrap();
    assert!(hit.success);

    engine.modifiers_mut().set("pc1", "athletics", 25);
    let miss = engine
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", 2))
        .unwrap();
    assert!(!miss.success);
}

#[test]
fn pbta_tiers() {
    let cases = [
        (vec![6, 6], true, MoveOutcome::Strong),
        (vec![4, 6], true, MoveOutcome::Strong),
        (vec![3, 6], true, MoveOutcome::Weak),
        (vec![1, 6], true, MoveOutcome::Weak),
        (vec![1, 5], false, MoveOutcome::Miss),
        (vec![1, 1], false, MoveOutcome::Miss),
    ];
    for (faces, success, tier) in cases {
        let requests = [
            AbilityCheckRequest::with_default_difficulty("pc1", "read_a_sitch"),
            AbilityCheckRequest::new("pc1", "read_a_sitch", 2),
            AbilityCheckRequest::new("pc1", "read_a_sitch", 15),
            AbilityCheckRequest::new("pc1", "read_a_sitch", i32::MIN),
        ];
        for request in requests {
            let mut engine = scripted("pbta", faces.clone());
            let result = engine.ability_check(&request).unwrap();
            assert_eq!(result.success, success, "faces {faces:?}, {request:?}");
            assert_eq!(MoveOutcome::of(&result), tier, "faces {faces:?}, {request:?}");
            assert_eq!(result.margin, result.total - 7);
        }
    }
}

#[test]
fn extreme_difficulties_do_not_overflow() {
    let mut d20 = engine("dnd5e", 3);
    let easy = d20
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", i32::MIN))
        .unwrap();
    assert_eq!(easy.margin, i32::MAX);
    let hard = d20
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", i32::MAX))
        .unwrap();
    assert_eq!(hard.margin, hard.total - i32::MAX);
    assert_eq!(hard.success, hard.roll == 20);

    let mut pbta = engine("pbta", 3);
    for difficulty in [i32::MIN, i32::MAX] {
        let result = pbta
            .ability_check(&AbilityCheckRequest::new("pc1", "go_aggro", difficulty))
            .unwrap();
        assert_eq!(result.margin, result.total - 7);
    }
}

#[test]
fn session_audit_reports_seed_and_draws() {
    let mut engine = engine("dnd5e", 42);
    engine.damage_roll("3d6").unwrap();
    engine
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", 10))
        .unwrap();
    let audit = engine.session_audit().unwrap();
    assert_eq!((audit.seed, audit.draws), (42, 4));
    assert!(make_engine("pbta").unwrap().session_audit().is_none());
}

#[test]
fn malformed_expressions_never_default() {
    for kind in ["dnd5e", "pbta"] {
        let mut engine = engine(kind, 1);
        for bad in ["", "2d6 +3", "0d6", "1d1", "d20", "fireball"] {
            assert!(
                matches!(engine.damage_roll(bad), Err(EngineError::Parse(_))),
                "{kind}: {bad:?} should fail to parse"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// wire shapes
// ---------------------------------------------------------------------------

#[test]
fn check_result_serialises_as_plain_data() {
    let mut engine = scripted("dnd5e", vec![11]);
    engine.modifiers_mut().set("pc1", "athletics", 2);
    let result = engine
        .ability_check(&AbilityCheckRequest::new("pc1", "athletics", 12))
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    insta::assert_snapshot!(json, @r#"{"success":true,"roll":11,"total":13,"margin":1}"#);

    let back: AbilityCheckResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn turn_order_serialises_as_plain_data() {
    let mut engine = scripted("dnd5e", vec![4, 19]);
    let order = engine.turn_order(&actors(&["pc1", "goblin"])).unwrap();
    let json = serde_json::to_string(&order).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"[{"actorId":"goblin","initiative":19,"rank":1},{"actorId":"pc1","initiative":4,"rank":2}]"#
    );
}
