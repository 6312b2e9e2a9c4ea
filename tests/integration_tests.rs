// Integration tests for the shot-optimization analyzer.
//
// These tests exercise the full pipeline end-to-end through the library
// crate's public API: provider-format CSV ingestion, the expected-value
// engine, and the serialized report shape.

use twos_vs_threes::engine::{self, zones::Zone, TeamRawStats, ZoneShooting};
use twos_vs_threes::ingest;

// ===========================================================================
// Test helpers
// ===========================================================================

const SHOT_HEADER: &str = "TEAM_NAME,Restricted Area FGM,Restricted Area FGA,Restricted Area FG_PCT,In The Paint (Non-RA) FGM,In The Paint (Non-RA) FGA,In The Paint (Non-RA) FG_PCT,Mid-Range FGM,Mid-Range FGA,Mid-Range FG_PCT,Left Corner 3 FGM,Left Corner 3 FGA,Left Corner 3 FG_PCT,Right Corner 3 FGM,Right Corner 3 FGA,Right Corner 3 FG_PCT,Above the Break 3 FGM,Above the Break 3 FGA,Above the Break 3 FG_PCT";
const STATS_HEADER: &str = "TEAM_NAME,GP,W,L,FTM,FTA,FT_PCT,PTS,PLUS_MINUS";

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Two-table export for a small league: one realistic team, one simple
/// hand-checkable team, one team that misses every field goal.
fn league_csvs() -> (String, String) {
    let shots = format!(
        "{SHOT_HEADER}\n\
         Boston Celtics,18.5,28.4,0.652,2.6,6.1,0.418,3.8,9.7,0.395,1.1,2.9,0.389,1.3,3.3,0.402,11.0,31.2,0.351\n\
         Simple Team,5.0,10.0,0.5,0,0,0,0,0,0,0,0,0,0,0,0,4.0,10.0,0.4\n\
         Brick City,0,10.0,0,0,5.0,0,0,5.0,0,0,2.0,0,0,2.0,0,0,10.0,0\n"
    );
    let stats = format!(
        "{STATS_HEADER}\n\
         Boston Celtics,82,64,18,17.8,22.6,0.788,120.6,11.3\n\
         Simple Team,82,41,41,10.0,12.0,0.833,42.0,0.0\n\
         Brick City,82,5,77,8.0,12.0,0.667,8.0,-15.0\n"
    );
    (shots, stats)
}

fn simple_team() -> TeamRawStats {
    let mut zones = [ZoneShooting::default(); 6];
    zones[Zone::RestrictedArea.index()] = ZoneShooting {
        attempts: 10.0,
        fg_pct: 50.0,
    };
    zones[Zone::AboveBreak3.index()] = ZoneShooting {
        attempts: 10.0,
        fg_pct: 40.0,
    };
    TeamRawStats {
        team: "Simple Team".into(),
        zones,
        ft_made: 10.0,
        ft_attempts: 12.0,
        ft_pct: 83.3,
        wins: 41,
        games_played: 82,
        plus_minus: 0.0,
    }
}

// ===========================================================================
// End-to-end pipeline
// ===========================================================================

#[test]
fn csv_to_report_pipeline() {
    let (shots, stats) = league_csvs();
    let teams = ingest::load_from_readers(shots.as_bytes(), stats.as_bytes()).unwrap();
    assert_eq!(teams.len(), 3);

    let reports = engine::analyze_league(&teams);

    // Brick City misses every shot: zero total EV, skipped without
    // aborting the other two teams.
    let names: Vec<&str> = reports.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(names, vec!["Boston Celtics", "Simple Team"]);
}

#[test]
fn simple_team_numbers_check_out() {
    let report = engine::analyze_team(&simple_team()).unwrap();

    // Current: 5 makes * 2 + 4 makes * 3 + 10 FT = 32 PPG.
    assert!(approx_eq(report.current.ppg, 32.0, 1e-9));

    // EVs are 1.0 (RA) and 1.2 (AB3); total 2.2 over 20 attempts:
    // RA gets 20/2.2*1.0 = 9.0909..., AB3 gets 20/2.2*1.2 = 10.9090...
    let ra = &report.optimal.zones[Zone::RestrictedArea.index()];
    let ab3 = &report.optimal.zones[Zone::AboveBreak3.index()];
    assert!(approx_eq(ra.attempts, 20.0 / 2.2, 1e-9));
    assert!(approx_eq(ab3.attempts, 24.0 / 2.2, 1e-9));

    // Optimal PPG: 9.0909*0.5*2 + 10.9090*0.4*3 + 10 FT.
    let expected_optimal = (20.0 / 2.2) * 0.5 * 2.0 + (24.0 / 2.2) * 0.4 * 3.0 + 10.0;
    assert!(approx_eq(report.optimal.ppg, expected_optimal, 1e-9));

    // Differential shifts by exactly the PPG gain.
    assert!(approx_eq(
        report.optimal.projected_plus_minus,
        expected_optimal - 32.0,
        1e-9
    ));
}

#[test]
fn attempts_are_conserved_for_every_team() {
    let (shots, stats) = league_csvs();
    let teams = ingest::load_from_readers(shots.as_bytes(), stats.as_bytes()).unwrap();

    for report in engine::analyze_league(&teams) {
        let current: f64 = report.current.zones.iter().map(|z| z.attempts).sum();
        let optimal: f64 = report.optimal.zones.iter().map(|z| z.attempts).sum();
        assert!(
            approx_eq(current, optimal, 1e-6),
            "attempts not conserved for {}: {} vs {}",
            report.team,
            current,
            optimal
        );
    }
}

#[test]
fn pipeline_is_idempotent() {
    let (shots, stats) = league_csvs();

    let run = || {
        let teams = ingest::load_from_readers(shots.as_bytes(), stats.as_bytes()).unwrap();
        serde_json::to_string(&engine::analyze_league(&teams)).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn report_json_matches_served_shape() {
    let (shots, stats) = league_csvs();
    let teams = ingest::load_from_readers(shots.as_bytes(), stats.as_bytes()).unwrap();
    let reports = engine::analyze_league(&teams);

    let value = serde_json::to_value(&reports).unwrap();
    let celtics = &value[0];

    assert_eq!(celtics["team"], "Boston Celtics");
    assert_eq!(celtics["current"]["wins"], 64);
    assert!(approx_eq(
        celtics["current"]["free_throws"]["percentage"]
            .as_f64()
            .unwrap(),
        78.8,
        1e-9
    ));
    // Zone percentages are fractions in the served shape.
    let ra_pct = celtics["current"]["zones"][0]["percentage"].as_f64().unwrap();
    assert!(approx_eq(ra_pct, 0.652, 1e-9));
    // Win percentages are on the 0-100 scale.
    let win_pct = celtics["current"]["win_percentage"].as_f64().unwrap();
    assert!(approx_eq(win_pct, 64.0 / 82.0 * 100.0, 1e-9));

    for section in ["current", "optimal", "impact"] {
        assert_eq!(celtics[section]["zones"].as_array().unwrap().len(), 6);
    }
}
