// Current-state metrics derived from a team's raw shooting line.

use crate::engine::zones::Zone;
use crate::engine::TeamRawStats;

/// Derived shooting numbers for one zone at the team's current shot mix.
#[derive(Debug, Clone, Copy)]
pub struct ZoneMetrics {
    pub zone: Zone,
    /// Average points per attempt: made fraction times point value.
    pub expected_value: f64,
    pub attempts: f64,
    pub makes: f64,
    pub points: f64,
}

/// Team-level current-state metrics.
#[derive(Debug, Clone)]
pub struct TeamMetrics {
    pub zones: [ZoneMetrics; 6],
    /// Total field-goal attempts across all six zones.
    pub total_fga: f64,
    /// Sum of per-zone expected values.
    pub total_ev: f64,
    /// Points from free throws (one point per make).
    pub ft_points: f64,
    /// Current points per game: zone points plus free-throw points.
    pub current_ppg: f64,
}

/// Derive current-state metrics for one team. Pure; assumes the raw record
/// has already been validated.
pub fn build(raw: &TeamRawStats) -> TeamMetrics {
    let zones = Zone::ALL.map(|zone| {
        let shooting = raw.zone(zone);
        let made_fraction = shooting.fg_pct / 100.0;
        let makes = shooting.attempts * made_fraction;
        ZoneMetrics {
            zone,
            expected_value: made_fraction * zone.points() as f64,
            attempts: shooting.attempts,
            makes,
            points: makes * zone.points() as f64,
        }
    });

    let total_fga = zones.iter().map(|z| z.attempts).sum();
    let total_ev = zones.iter().map(|z| z.expected_value).sum();
    let fg_points: f64 = zones.iter().map(|z| z.points).sum();
    let ft_points = raw.ft_made;

    TeamMetrics {
        zones,
        total_fga,
        total_ev,
        ft_points,
        current_ppg: fg_points + ft_points,
    }
}
