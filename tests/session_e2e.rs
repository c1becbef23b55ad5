//! End-to-end session tests
//!
//! Drives whole sessions through `GameLoop` with `FixedScriptController`,
//! using the same token grammar a player types at the menu. Dice come from
//! `ScriptedRolls` where exact outcomes matter and from a seeded `GameRng`
//! otherwise.

use war_rs::core::ArmyColor;
use war_rs::game::{
    CommandOutcome, FixedScriptController, GameEndReason, GameLoop, GameState, MissionKind, PlayerController,
    ScriptedRolls, SessionState, VerbosityLevel,
};
use war_rs::loader::GameConfig;
use war_rs::WarError;

fn scripted_game(rolls: Vec<u32>) -> GameState {
    let mut game = GameState::with_rng(&GameConfig::reference(), Box::new(ScriptedRolls::new(rolls))).unwrap();
    game.logger.enable_capture();
    game.logger.set_verbosity(VerbosityLevel::Verbose);
    game
}

fn troops(game: &GameState, index: usize) -> (String, String, u32) {
    let t = game.registry().get(index).unwrap();
    (t.name.as_str().to_string(), t.owner.as_str().to_string(), t.troops)
}

#[test]
fn test_conquer_three_territories() {
    // Mission draw 1 = ConquerThreshold, then attacker/defender die pairs
    let mut rolls = vec![1];
    rolls.extend([6, 1, 6, 1, 6, 1]); // Cerrado takes Caatinga
    rolls.extend([2, 5, 3, 4]); // two held defenses
    rolls.extend([6, 1].repeat(5)); // Cerrado takes Amazonas
    let mut game = scripted_game(rolls);
    assert_eq!(game.mission().kind, MissionKind::ConquerThreshold);

    let mut controller = FixedScriptController::from_script(
        "1 3 2 4 cerrado caatinga 2 4 \
         2 \
         1 3 2 2 2 1 mata 1 \
         1 5 2 1 2 1 2 1 2 1 2 1 \
         2 0",
    );

    let result = GameLoop::new(&mut game).run(&mut controller);

    assert_eq!(result.end_reason, GameEndReason::MissionComplete);
    assert_eq!(result.turns_played, 5);
    // The 2 -> 2 selection is rejected before any dice are rolled
    assert_eq!(result.attacks_resolved, 10);
    assert_eq!(result.conquests, 2);
    // The trailing quit is never read
    assert_eq!(controller.remaining(), 1);

    let azul = ArmyColor::new("Azul");
    assert_eq!(game.registry().count_owned_by(&azul), 3);
    assert_eq!(troops(&game, 0), ("Amazonas".into(), "Azul".into(), 1));
    assert_eq!(troops(&game, 1), ("Cerrado".into(), "Azul".into(), 2));
    assert_eq!(troops(&game, 2), ("Pantanal".into(), "Vermelho".into(), 6));
    assert_eq!(troops(&game, 3), ("Caatinga".into(), "Azul".into(), 1));
    assert_eq!(troops(&game, 4), ("Mata Atlantica".into(), "Roxo".into(), 5));

    let logs = game.logger.logs();
    assert!(logs.iter().any(|l| l.message.contains("Mission not complete yet")));
    #[cfg(feature = "verbose-logging")]
    assert!(logs.iter().any(|l| l.message.contains("Territory Caatinga was conquered by Azul")));
    assert!(logs.iter().any(|l| l.message.contains("cancelled")));
    assert!(logs.iter().any(|l| l.message.contains("Congratulations")));
}

#[test]
fn test_destroy_army_with_third_party_attacker() {
    // DestroyArmy against palette[4] = Roxo; Pantanal (Vermelho) does the work
    let mut rolls = vec![0, 4];
    rolls.extend([6, 1].repeat(5));
    let mut game = scripted_game(rolls);
    assert_eq!(game.describe_mission(), "Destroy the Roxo army");

    let mut controller = FixedScriptController::from_script("1 5 3 5 3 5 3 5 3 5 3 5 2");
    let result = GameLoop::new(&mut game).run(&mut controller);

    assert_eq!(result.end_reason, GameEndReason::MissionComplete);
    assert_eq!(troops(&game, 2), ("Pantanal".into(), "Vermelho".into(), 5));
    assert_eq!(troops(&game, 4), ("Mata Atlantica".into(), "Vermelho".into(), 1));
    assert!(game.check_mission());
}

#[test]
fn test_bad_input_never_ends_the_session() {
    let mut game = scripted_game(vec![1]);
    let mut controller = FixedScriptController::from_script("7 abc 1 0 1 -2 1 x 1 1 9 2 2");
    let before = game.registry().clone();

    let mut outcomes = Vec::new();
    let mut game_loop = GameLoop::new(&mut game);
    for _ in 0..6 {
        let command = {
            let view = war_rs::game::GameStateView::new(game_loop.game);
            controller.next_command(&view)
        };
        outcomes.push(game_loop.process_command(command, &mut controller));
        assert_eq!(game_loop.state(), SessionState::Playing);
    }

    assert!(matches!(outcomes[0], CommandOutcome::InvalidOption(_)));
    assert!(matches!(outcomes[1], CommandOutcome::Malformed(_)));
    // Attack counts must be positive
    assert!(matches!(outcomes[2], CommandOutcome::Malformed(_)));
    assert!(matches!(outcomes[3], CommandOutcome::Malformed(_)));
    assert!(matches!(outcomes[4], CommandOutcome::Malformed(_)));

    // Out-of-range selection is reported on the sub-attack
    let CommandOutcome::Attacks(reports) = &outcomes[5] else {
        panic!("expected attacks, got {:?}", outcomes[5]);
    };
    assert_eq!(reports.len(), 1);
    assert!(matches!(reports[0].result, Err(WarError::InvalidIndex { .. })));

    drop(game_loop);
    assert_eq!(game.registry(), &before);
}

#[test]
fn test_seeded_session_quits_cleanly() {
    let config = GameConfig::reference();
    let mut game = GameState::new(&config, 42).unwrap();
    game.logger.enable_capture();

    let mut controller = FixedScriptController::from_script("2 0 1 1 1 2");
    let result = GameLoop::new(&mut game).run(&mut controller);

    assert_eq!(result.end_reason, GameEndReason::PlayerQuit);
    assert_eq!(result.turns_played, 2);
    assert_eq!(result.attacks_resolved, 0);
    assert_eq!(game.registry().list_territories().len(), 5);
    assert!(game
        .logger
        .logs()
        .iter()
        .any(|l| l.message.contains("Leaving the game")));
}

#[test]
fn test_exhausted_script_quits() {
    let mut game = GameState::new(&GameConfig::reference(), 7).unwrap();
    game.logger.enable_capture();

    let mut controller = FixedScriptController::from_script("2");
    let result = GameLoop::new(&mut game).run(&mut controller);

    assert_eq!(result.end_reason, GameEndReason::PlayerQuit);
    assert_eq!(result.turns_played, 2);
}
