//! Config fixture tests
//!
//! One test per shipped `.json` under `configs/`, generated by `dir-test`.
//! Every shipped config must parse, validate and start a game.

use dir_test::{dir_test, Fixture};
use war_rs::game::{GameState, MissionKind};
use war_rs::loader::GameConfig;
use war_rs::WarError;

#[dir_test(
    dir: "$CARGO_MANIFEST_DIR/configs",
    glob: "**/*.json",
)]
fn test_shipped_config_starts_a_game(fixture: Fixture<&str>) {
    let config = GameConfig::parse(fixture.content())
        .unwrap_or_else(|e| panic!("config {} failed to load: {}", fixture.path(), e));

    for seed in 0..16u64 {
        let game = GameState::new(&config, seed)
            .unwrap_or_else(|e| panic!("config {} failed to start with seed {}: {}", fixture.path(), seed, e));

        assert_eq!(game.registry().len(), config.territory_count);
        let mission = game.mission();
        match mission.kind {
            MissionKind::DestroyArmy => {
                let target = mission.target.as_ref().unwrap();
                assert_ne!(target, game.player_color());
            }
            MissionKind::ConquerThreshold => assert!(mission.target.is_none()),
        }
        // Every shipped map starts with all armies alive and no one holding three territories
        assert!(!game.check_mission());
    }
}

#[test]
fn test_load_from_file_reference_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/reference.json");
    let config = GameConfig::load_from_file(&path).unwrap();
    assert_eq!(config, GameConfig::reference());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = GameConfig::load_from_file(std::path::Path::new("configs/does_not_exist.json"));
    assert!(matches!(result, Err(WarError::IoError(_))));
}

#[test]
fn test_count_beyond_seed_table_fails_allocation() {
    let config = GameConfig::parse(r#"{ "territory_count": 9 }"#).unwrap();
    let result = GameState::new(&config, 1);
    assert!(matches!(
        result,
        Err(WarError::AllocationFailure {
            requested: 9,
            available: 5
        })
    ));
}

#[test]
fn test_single_color_palette_is_fatal_for_destroy_missions() {
    let config = GameConfig::parse(r#"{ "palette": ["Azul"] }"#).unwrap();
    // Some seeds draw ConquerThreshold; every DestroyArmy draw must fail
    let failures = (0..32u64)
        .filter_map(|seed| GameState::new(&config, seed).err())
        .collect::<Vec<_>>();
    assert!(!failures.is_empty());
    assert!(failures.iter().all(|e| matches!(e, WarError::NoValidTarget(_))));
}
