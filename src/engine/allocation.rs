// Expected-value shot allocation: redistributes a team's field-goal
// attempts across zones in proportion to each zone's EV share.
//
// This is deliberately a proportional reallocation, not a greedy argmax
// that sends every attempt to the single best zone. The model shifts
// attempt share toward higher-EV zones while keeping a realistic mix, and
// total attempts and free-throw production are held fixed.

use crate::engine::metrics::TeamMetrics;
use crate::engine::zones::Zone;
use crate::engine::AnalysisError;

/// Current-versus-optimal shooting line for one zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneBreakdown {
    pub zone: Zone,
    pub expected_value: f64,
    /// Made fraction (0-1), carried through for the report.
    pub made_fraction: f64,
    pub current_attempts: f64,
    pub current_makes: f64,
    pub optimal_attempts: f64,
    pub optimal_makes: f64,
    /// Display-only deltas; never fed back into the model.
    pub attempt_diff: f64,
    pub makes_diff: f64,
}

/// The EV-optimal allocation for one team.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub zones: [ZoneBreakdown; 6],
    /// Points per game at the optimal mix, free throws held constant.
    pub optimal_ppg: f64,
}

/// Compute the optimal allocation from current-state metrics.
///
/// Each zone receives `total_fga * (zone EV / total EV)` attempts. A zone
/// shooting 0% has EV 0 and therefore receives zero attempts, never a
/// negative share. A team whose every zone percentage is zero has no
/// defined EV shares and is rejected with [`AnalysisError::ZeroExpectedValue`]
/// rather than dividing by zero.
pub fn solve(metrics: &TeamMetrics) -> Result<Allocation, AnalysisError> {
    if metrics.total_ev == 0.0 {
        return Err(AnalysisError::ZeroExpectedValue);
    }

    let zones = Zone::ALL.map(|zone| {
        let current = &metrics.zones[zone.index()];
        let made_fraction = current.expected_value / zone.points() as f64;
        let optimal_proportion = current.expected_value / metrics.total_ev;
        let optimal_attempts = metrics.total_fga * optimal_proportion;
        let optimal_makes = optimal_attempts * made_fraction;
        ZoneBreakdown {
            zone,
            expected_value: current.expected_value,
            made_fraction,
            current_attempts: current.attempts,
            current_makes: current.makes,
            optimal_attempts,
            optimal_makes,
            attempt_diff: optimal_attempts - current.attempts,
            makes_diff: optimal_makes - current.makes,
        }
    });

    let optimal_fg_points: f64 = zones
        .iter()
        .map(|z| z.optimal_makes * z.zone.points() as f64)
        .sum();

    Ok(Allocation {
        zones,
        optimal_ppg: optimal_fg_points + metrics.ft_points,
    })
}
