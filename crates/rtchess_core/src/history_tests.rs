use super::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn record(kind: ActionKind, from: &str, to: &str) -> ActionRecord {
    ActionRecord {
        timestamp: 1.5,
        color: Color::White,
        piece_type: PieceType::Knight,
        kind,
        from: sq(from),
        to: sq(to),
    }
}

#[test]
fn test_movetext_lines() {
    let mut history = ActionHistory::default();
    history.push(record(ActionKind::Move, "b1", "c3"));
    history.push(ActionRecord {
        timestamp: 3.0,
        color: Color::Black,
        piece_type: PieceType::Pawn,
        kind: ActionKind::Attack,
        from: sq("d5"),
        to: sq("e4"),
    });
    history.push(ActionRecord {
        timestamp: 4.5,
        color: Color::White,
        piece_type: PieceType::King,
        kind: ActionKind::CastleKingside,
        from: sq("e1"),
        to: sq("g1"),
    });
    history.push(ActionRecord {
        timestamp: 9.0,
        color: Color::Black,
        piece_type: PieceType::Queen,
        kind: ActionKind::Promote(PieceType::Queen),
        from: sq("c1"),
        to: sq("c1"),
    });

    let text = history.movetext();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "1.5 W Nb1-c3");
    assert_eq!(lines[1], "3.0 B d5xe4");
    assert_eq!(lines[2], "4.5 W O-O");
    assert_eq!(lines[3], "9.0 B c1=Q");
}

#[test]
fn test_history_serializes_for_export() {
    let mut history = ActionHistory::default();
    history.push(record(ActionKind::Move, "g1", "f3"));

    let json = serde_json::to_string(&history).unwrap();
    let back: ActionHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(back.records(), history.records());
    assert_eq!(back.len(), 1);
    assert!(!back.is_empty());
}
