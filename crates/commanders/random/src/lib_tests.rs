use super::*;

use rtchess_core::{Color, ControlMode, GameOptions, InputKind, Square};

fn pointer_game() -> Game {
    Game::new(GameOptions {
        controls: [ControlMode::Pointer, ControlMode::Pointer],
        ..GameOptions::default()
    })
}

#[test]
fn idle_frames_between_orders() {
    let mut commander = RandomCommander::new(7).with_cadence(5);
    let game = pointer_game();
    for _ in 0..4 {
        assert!(commander.frame(&game, Seat::One).is_empty());
    }
    assert!(!commander.frame(&game, Seat::One).is_empty());
}

#[test]
fn order_is_a_pointer_gesture() {
    let mut commander = RandomCommander::new(42).with_cadence(1);
    let game = pointer_game();
    let inputs = commander.frame(&game, Seat::One);
    assert_eq!(inputs.len(), 4);
    assert_eq!(inputs[0].kind, InputKind::PointerMove);
    assert_eq!(inputs[1].kind, InputKind::PointerPrimaryDown);
    assert_eq!(inputs[2].kind, InputKind::PointerMove);
    assert_eq!(inputs[3].kind, InputKind::PointerPrimaryDown);
    assert!(inputs.iter().all(|i| i.seat == Seat::One));
}

#[test]
fn order_grabs_an_own_piece() {
    let mut commander = RandomCommander::new(3).with_cadence(1);
    let mut game = pointer_game();
    let inputs = commander.frame(&game, Seat::One);
    // Apply the grab half of the gesture only.
    game.handle_input(inputs[0]);
    game.handle_input(inputs[1]);
    let sel = game.selected_piece(Color::White).expect("own piece grabbed");
    let from = Square::from_coordinate(inputs[0].coordinate.unwrap());
    assert_eq!(sel.square, from);
}

#[test]
fn order_targets_a_reachable_square() {
    let mut commander = RandomCommander::new(3).with_cadence(1);
    let game = pointer_game();
    let inputs = commander.frame(&game, Seat::One);
    let from = Square::from_coordinate(inputs[0].coordinate.unwrap());
    let to = Square::from_coordinate(inputs[2].coordinate.unwrap());
    let piece = game.piece_at(from).expect("grabbed square holds a piece");
    assert!(game.possible_moves(piece).contains(&to));
}

#[test]
fn same_seed_same_input_stream() {
    let mut a = RandomCommander::new(99).with_cadence(3);
    let mut b = RandomCommander::new(99).with_cadence(3);
    let mut game_a = pointer_game();
    let mut game_b = pointer_game();
    for _ in 0..30 {
        let ia = a.frame(&game_a, Seat::One);
        let ib = b.frame(&game_b, Seat::One);
        assert_eq!(ia, ib);
        for i in ia {
            game_a.handle_input(i);
        }
        for i in ib {
            game_b.handle_input(i);
        }
        game_a.tick(0.1);
        game_b.tick(0.1);
    }
}

#[test]
fn new_session_replays_from_the_seed() {
    let mut commander = RandomCommander::new(5).with_cadence(1);
    let game = pointer_game();
    let first = commander.frame(&game, Seat::Two);
    commander.frame(&game, Seat::Two);
    commander.new_session();
    assert_eq!(commander.frame(&game, Seat::Two), first);
}
