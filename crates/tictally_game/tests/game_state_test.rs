//! Tests for move acceptance, turn alternation, and the record-once latch.

use tictally_game::{Cell, Effect, GameState, Intent, Mark, Outcome, PlayerIdentity, Position};

fn alice_vs_bob() -> GameState {
    let mut game = GameState::new();
    let effects = game.set_players("Alice", "Bob");
    assert_eq!(
        effects,
        vec![Effect::RegisterPlayers(
            PlayerIdentity::new("Alice", "Bob").expect("valid names")
        )]
    );
    game
}

fn play(game: &mut GameState, moves: &[usize]) -> Vec<Effect> {
    moves.iter().flat_map(|&idx| game.apply_move(idx)).collect()
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = alice_vs_bob();
    let effects = play(&mut game, &[0, 4, 1, 8, 2]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            mark: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(effects.len(), 1);
    assert!(matches!(
        &effects[0],
        Effect::RecordWin { winner, .. } if winner == "Alice"
    ));
}

#[test]
fn test_legal_draw_scenario() {
    // X O X
    // X O O
    // O X X
    let mut game = alice_vs_bob();
    let effects = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.outcome(), Outcome::Drawn);
    assert_eq!(game.status(), "Draw!");
    assert_eq!(effects.len(), 1);
    assert!(matches!(&effects[0], Effect::RecordDraw(p) if p.x() == "Alice" && p.o() == "Bob"));
}

#[test]
fn test_o_can_win() {
    let mut game = alice_vs_bob();
    let effects = play(&mut game, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(game.outcome().winner(), Some(Mark::O));
    assert!(matches!(
        effects.as_slice(),
        [Effect::RecordWin { winner, .. }] if winner == "Bob"
    ));
}

#[test]
fn test_repeated_click_on_occupied_cell_is_noop() {
    let mut game = alice_vs_bob();
    game.apply_move(4);
    let before = game.clone();

    for _ in 0..3 {
        assert!(game.apply_move(4).is_empty());
    }
    assert_eq!(game, before);
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_clicks_after_game_over_are_noops() {
    let mut game = alice_vs_bob();
    play(&mut game, &[0, 4, 1, 8, 2]);
    let before = game.clone();

    for idx in [3, 5, 6, 7, 3] {
        assert!(game.apply_move(idx).is_empty());
    }
    assert_eq!(game, before);
}

#[test]
fn test_turn_alternates_on_accepted_moves_only() {
    let mut game = alice_vs_bob();
    let mut expected = Mark::X;
    for idx in [4, 4, 0, 0, 4, 8, 9, 2] {
        let accepted = Position::from_index(idx).is_some_and(|pos| game.can_play(pos));
        game.apply_move(idx);
        if accepted {
            expected = expected.opponent();
        }
        assert_eq!(game.turn(), expected);
    }
    assert_eq!(game.board().count(Mark::X), 2);
    assert_eq!(game.board().count(Mark::O), 2);
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut game = alice_vs_bob();
    for idx in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        game.apply_move(idx);
        let (x, o) = (game.board().count(Mark::X), game.board().count(Mark::O));
        assert!(x == o || x == o + 1, "x={x} o={o}");
    }
}

#[test]
fn test_result_recorded_at_most_once() {
    let mut game = alice_vs_bob();
    let mut records = play(&mut game, &[0, 4, 1, 8, 2])
        .into_iter()
        .filter(Effect::is_record)
        .count();

    for _ in 0..5 {
        records += game.settle().into_iter().count();
        assert!(game.outcome().is_terminal());
    }

    assert_eq!(records, 1);
    assert!(game.is_recorded());
}

#[test]
fn test_latch_rearms_after_reset() {
    let mut game = alice_vs_bob();
    play(&mut game, &[0, 4, 1, 8, 2]);
    assert!(game.settle().is_none());

    game.reset();
    assert!(game.settle().is_none(), "ongoing game has nothing to record");

    let effects = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(effects.iter().filter(|e| e.is_record()).count(), 1);
}

#[test]
fn test_blank_names_keep_board_locked() {
    let mut game = GameState::new();
    assert!(game.set_players("", "Bob").is_empty());
    assert!(!game.is_identified());

    assert!(game.apply_move(0).is_empty());
    assert!(game.apply(Intent::Place(Position::Center)).is_empty());
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));

    assert_eq!(game.set_players("Alice", "Bob").len(), 1);
    game.apply_move(0);
    assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
}

#[test]
fn test_whitespace_only_name_rejected() {
    let mut game = GameState::new();
    assert!(game.set_players("Alice", "   ").is_empty());
    assert!(!game.is_identified());
}
