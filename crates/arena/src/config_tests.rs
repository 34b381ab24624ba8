use super::*;

#[test]
fn empty_config_is_the_default_session() {
    let config: SessionConfig = toml::from_str("").unwrap();
    assert_eq!(config.scenario, Scenario::Standard);
    assert_eq!(config.seat_one_color, Color::White);
    assert_eq!(config.controls, [ControlMode::Pointer, ControlMode::Pointer]);
    assert_eq!(config.frames, 3600);
    assert_eq!(config.seeds, [1, 2]);
    assert!(config.history_out.is_none());
}

#[test]
fn full_config_parses() {
    let text = r#"
        scenario = "rook-duel"
        seat_one_color = "Black"
        controls = ["pointer", "keyboard"]
        dt = 0.05
        frames = 200
        seeds = [11, 12]
        history_out = "out/history.json"
    "#;
    let config: SessionConfig = toml::from_str(text).unwrap();
    assert_eq!(config.scenario, Scenario::RookDuel);
    assert_eq!(config.seat_one_color, Color::Black);
    assert_eq!(config.controls, [ControlMode::Pointer, ControlMode::Keyboard]);
    assert_eq!(config.dt, 0.05);
    assert_eq!(config.frames, 200);
    assert_eq!(config.seeds, [11, 12]);
    assert_eq!(
        config.history_out.as_deref(),
        Some(Path::new("out/history.json"))
    );
}

#[test]
fn game_options_mirror_the_config() {
    let config = SessionConfig {
        scenario: Scenario::KingsOnly,
        seat_one_color: Color::Black,
        ..SessionConfig::default()
    };
    let options = config.game_options();
    assert_eq!(options.scenario, Scenario::KingsOnly);
    assert_eq!(options.seat_one_color, Color::Black);
}

#[test]
fn unknown_scenario_fails_to_parse() {
    assert!(toml::from_str::<SessionConfig>("scenario = \"bughouse\"").is_err());
}
