use super::*;

use random_commander::RandomCommander;
use rtchess_core::{ActionHistory, Scenario};

fn commanders(seeds: [u64; 2]) -> [Box<dyn Commander>; 2] {
    [
        Box::new(RandomCommander::new(seeds[0]).with_cadence(10)),
        Box::new(RandomCommander::new(seeds[1]).with_cadence(10)),
    ]
}

#[test]
fn short_session_runs_to_completion() {
    let config = SessionConfig::default();
    let mut runner = SessionRunner::new(&config, commanders(config.seeds));
    let report = runner.run(120);

    assert_eq!(report.frames_run, 120);
    assert!((report.clock - 2.0).abs() < 0.01);
    assert!(report.white_pieces <= 16);
    assert!(report.black_pieces <= 16);
    assert_eq!(
        report.actions_recorded,
        runner.game().history().records().len()
    );
}

#[test]
fn same_seeds_same_session() {
    let config = SessionConfig::default();
    let mut a = SessionRunner::new(&config, commanders(config.seeds));
    let mut b = SessionRunner::new(&config, commanders(config.seeds));
    let report_a = a.run(300);
    let report_b = b.run(300);

    assert_eq!(report_a, report_b);
    assert_eq!(
        a.game().history().records(),
        b.game().history().records()
    );
}

#[test]
fn kings_only_session_stays_small() {
    let config = SessionConfig {
        scenario: Scenario::KingsOnly,
        ..SessionConfig::default()
    };
    let mut runner = SessionRunner::new(&config, commanders([7, 8]));
    let report = runner.run(60);
    assert!(report.white_pieces + report.black_pieces <= 2);
}

#[test]
fn history_export_round_trips() {
    let config = SessionConfig::default();
    let mut runner = SessionRunner::new(&config, commanders([3, 4]));
    runner.run(240);

    let path = std::env::temp_dir().join(format!("arena_history_{}.json", std::process::id()));
    runner.write_history(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let history: ActionHistory = serde_json::from_str(&text).unwrap();
    assert_eq!(history.records(), runner.game().history().records());
    std::fs::remove_file(&path).ok();
}
