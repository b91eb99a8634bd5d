//! Placement rules through the public game API.

use blokus_duo::core::{Cell, PlayerId};
use blokus_duo::pieces::{Mirror, Rotation, ShapeId, ShapeInstance};
use blokus_duo::rules::{is_legal, GameResult, RulesEngine};
use blokus_duo::{BlokusGame, BlokusGameBuilder, DenyList};

fn play(game: &mut BlokusGame, shape: ShapeId, reference: Cell, rotation: Rotation, mirror: Mirror) {
    let action = game
        .encode_placement(shape, reference, rotation, mirror)
        .unwrap_or_else(|e| panic!("{}", e));
    assert!(
        game.get_valid_moves(game.current_player()).contains(action),
        "{} not offered",
        action
    );
    game.play_action(action);
}

/// At round 0 a placement covering the starting corner is legal, one beside it is not.
#[test]
fn test_first_move_constraint() {
    let game = BlokusGame::new();
    let state = game.state();

    let covering = ShapeInstance::new(ShapeId::L5, Cell::new(4, 4), Mirror::Identity, Rotation::R0);
    let beside = ShapeInstance::new(ShapeId::L5, Cell::new(3, 3), Mirror::Identity, Rotation::R0);
    assert!(covering.cells().contains(&Cell::new(4, 4)));
    assert!(!beside.cells().contains(&Cell::new(4, 4)));

    assert!(is_legal(state, covering.cells(), PlayerId::FIRST, 0));
    assert!(!is_legal(state, beside.cells(), PlayerId::FIRST, 0));

    let mask = game.get_valid_moves(PlayerId::FIRST);
    for action in mask.iter() {
        assert!(game.translate_action(action).cells.contains(&Cell::new(4, 4)));
    }
}

/// Corner touch with the 2x2 square is legal; shifting it onto an edge is not.
#[test]
fn test_square_diagonal_versus_edge() {
    let mut game = BlokusGame::new();
    play(&mut game, ShapeId::O4, Cell::new(4, 4), Rotation::R0, Mirror::Identity);
    play(&mut game, ShapeId::I1, Cell::new(9, 9), Rotation::R0, Mirror::Identity);

    let state = game.state();
    let diagonal = ShapeInstance::instantiate(ShapeId::O4, Cell::new(2, 6));
    let shifted = ShapeInstance::instantiate(ShapeId::O4, Cell::new(2, 5));
    assert!(is_legal(state, diagonal.cells(), PlayerId::FIRST, game.round()));
    assert!(!is_legal(state, shifted.cells(), PlayerId::FIRST, game.round()));
}

/// The second player's opening is independent of where the first player went.
#[test]
fn test_second_player_opening() {
    let mut game = BlokusGame::new();
    play(&mut game, ShapeId::I5, Cell::new(4, 4), Rotation::R0, Mirror::Identity);
    assert_eq!(game.current_player(), PlayerId::SECOND);

    let mask = game.get_valid_moves(PlayerId::SECOND);
    assert!(!mask.is_empty());
    for action in mask.iter() {
        assert!(game.translate_action(action).cells.contains(&Cell::new(9, 9)));
    }
}

/// Corners covered by the opponent drop out of the owner's corner set.
#[test]
fn test_opponent_covers_corner() {
    let mut game = BlokusGameBuilder::new()
        .start_corner(PlayerId::SECOND, Cell::new(6, 6))
        .build();
    play(&mut game, ShapeId::I1, Cell::new(4, 4), Rotation::R0, Mirror::Identity);
    assert!(game.state().corners(PlayerId::FIRST).contains(&Cell::new(5, 5)));

    // Z5 anchored on (6, 6) reaches back to (5, 5).
    play(&mut game, ShapeId::Z5, Cell::new(6, 6), Rotation::R0, Mirror::Identity);
    assert_eq!(game.state().owner(Cell::new(5, 5)), Some(PlayerId::SECOND));
    assert!(!game.state().corners(PlayerId::FIRST).contains(&Cell::new(5, 5)));
    for corner in game.state().corners(PlayerId::FIRST).iter() {
        assert!(game.state().is_empty(*corner));
    }
}

/// A game where nobody may move is over and scored.
#[test]
fn test_game_over_scoring() {
    let mut game = BlokusGame::new();
    play(&mut game, ShapeId::V3, Cell::new(4, 4), Rotation::R0, Mirror::Identity);
    play(&mut game, ShapeId::Z5, Cell::new(9, 9), Rotation::R0, Mirror::Identity);
    assert_eq!(game.check_game_over(PlayerId::FIRST), None);

    let deny: DenyList = PlayerId::all()
        .flat_map(|p| game.legal_actions(p))
        .collect();
    let frozen = BlokusGameBuilder::new().deny_list(deny).build();
    let result = frozen.is_terminal(game.state());

    assert_eq!(result, Some(GameResult::Winner(PlayerId::SECOND)));
    assert_eq!(result.map(|r| r.value_for(PlayerId::FIRST)), Some(-1));
}

/// Equal scores at the end are a draw for either side.
#[test]
fn test_game_over_draw() {
    let mut game = BlokusGame::new();
    play(&mut game, ShapeId::I2, Cell::new(4, 4), Rotation::R0, Mirror::Identity);
    play(&mut game, ShapeId::I2, Cell::new(9, 9), Rotation::R90, Mirror::Identity);

    let deny: DenyList = PlayerId::all()
        .flat_map(|p| game.legal_actions(p))
        .collect();
    let frozen = BlokusGameBuilder::new().deny_list(deny).build();
    let result = frozen.is_terminal(game.state());

    assert_eq!(result, Some(GameResult::Draw));
    assert_eq!(result.map(|r| r.value_for(PlayerId::SECOND)), Some(0));
}
