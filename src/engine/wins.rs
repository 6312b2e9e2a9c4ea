// Win-impact projection via Pythagorean expectation.
//
// Maps the PPG gain from the optimal shot mix onto the team's point
// differential and converts the new differential to an expected win
// percentage with the basketball-standard 16.5 exponent.

/// Pythagorean exponent commonly used for NBA seasons.
const PYTH_EXPONENT: f64 = 16.5;

/// Projected win impact for one team.
#[derive(Debug, Clone, Copy)]
pub struct WinProjection {
    /// Actual win fraction (wins / games played), 0-1.
    pub current_win_pct: f64,
    /// Pythagorean win fraction at the projected differential, 0-1.
    pub projected_win_pct: f64,
    /// Projected wins over the same schedule, rounded to one decimal.
    pub projected_wins: f64,
    pub win_diff: f64,
    pub current_plus_minus: f64,
    pub projected_plus_minus: f64,
}

/// Project the win impact of moving from `current_ppg` to `optimal_ppg`.
///
/// The branch at `new_plus_minus >= 0` is part of the model's contract:
/// a differential of exactly zero takes the non-negative branch. The two
/// branches are not mirror images (the negative branch base is always
/// above 10), which matches the original model and is preserved as-is.
///
/// Assumes `games_played > 0`; raw input validation rejects zero before
/// the engine runs.
pub fn project(
    current_ppg: f64,
    optimal_ppg: f64,
    current_wins: u32,
    games_played: u32,
    plus_minus: f64,
) -> WinProjection {
    let pts_diff = optimal_ppg - current_ppg;
    let new_plus_minus = plus_minus + pts_diff;

    let projected_win_pct = if new_plus_minus >= 0.0 {
        1.0 / (1.0 + (1.0 / (new_plus_minus + 10.0)).powf(PYTH_EXPONENT))
    } else {
        1.0 / (1.0 + (-new_plus_minus + 10.0).powf(PYTH_EXPONENT))
    };

    let games = games_played as f64;
    let projected_wins = (projected_win_pct * games * 10.0).round() / 10.0;

    WinProjection {
        current_win_pct: current_wins as f64 / games,
        projected_win_pct,
        projected_wins,
        win_diff: projected_wins - current_wins as f64,
        current_plus_minus: plus_minus,
        projected_plus_minus: new_plus_minus,
    }
}
