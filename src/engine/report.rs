// Report assembly: combines metrics, allocation, and win projection into
// the nested current / optimal / impact record served to consumers.
//
// Percentage conventions follow the upstream output format: zone
// percentages are fractions (0-1), free-throw and win percentages are on
// the 0-100 scale.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::allocation::Allocation;
use crate::engine::metrics::TeamMetrics;
use crate::engine::wins::WinProjection;
use crate::engine::TeamRawStats;

/// Full report set for a league run.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub generated_at: DateTime<Utc>,
    pub team_count: usize,
    pub teams: Vec<TeamReport>,
}

/// One team's complete analysis record.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub team: String,
    pub current: CurrentSection,
    pub optimal: OptimalSection,
    pub impact: ImpactSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentSection {
    pub ppg: f64,
    pub wins: u32,
    pub win_percentage: f64,
    pub plus_minus: f64,
    pub free_throws: FreeThrows,
    pub zones: Vec<CurrentZone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FreeThrows {
    pub attempts: f64,
    pub percentage: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentZone {
    pub zone: &'static str,
    pub attempts: f64,
    pub makes: f64,
    pub percentage: f64,
    pub ev: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimalSection {
    pub ppg: f64,
    pub projected_wins: f64,
    pub projected_win_percentage: f64,
    pub projected_plus_minus: f64,
    pub zones: Vec<OptimalZone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimalZone {
    pub zone: &'static str,
    pub attempts: f64,
    pub makes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactSection {
    pub points_difference: f64,
    pub wins_difference: f64,
    pub plus_minus_difference: f64,
    pub zones: Vec<ImpactZone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactZone {
    pub zone: &'static str,
    pub attempt_difference: f64,
    pub makes_difference: f64,
}

/// Assemble the final per-team record. Zone sub-records appear in catalog
/// order in every section, so field ordering is deterministic across runs.
pub fn assemble(
    raw: &TeamRawStats,
    metrics: &TeamMetrics,
    allocation: &Allocation,
    wins: &WinProjection,
) -> TeamReport {
    let current_zones = allocation
        .zones
        .iter()
        .map(|z| CurrentZone {
            zone: z.zone.code(),
            attempts: z.current_attempts,
            makes: z.current_makes,
            percentage: z.made_fraction,
            ev: z.expected_value,
        })
        .collect();

    let optimal_zones = allocation
        .zones
        .iter()
        .map(|z| OptimalZone {
            zone: z.zone.code(),
            attempts: z.optimal_attempts,
            makes: z.optimal_makes,
        })
        .collect();

    let impact_zones = allocation
        .zones
        .iter()
        .map(|z| ImpactZone {
            zone: z.zone.code(),
            attempt_difference: z.attempt_diff,
            makes_difference: z.makes_diff,
        })
        .collect();

    TeamReport {
        team: raw.team.clone(),
        current: CurrentSection {
            ppg: metrics.current_ppg,
            wins: raw.wins,
            win_percentage: wins.current_win_pct * 100.0,
            plus_minus: wins.current_plus_minus,
            free_throws: FreeThrows {
                attempts: raw.ft_attempts,
                percentage: raw.ft_pct,
                points: metrics.ft_points,
            },
            zones: current_zones,
        },
        optimal: OptimalSection {
            ppg: allocation.optimal_ppg,
            projected_wins: wins.projected_wins,
            projected_win_percentage: wins.projected_win_pct * 100.0,
            projected_plus_minus: wins.projected_plus_minus,
            zones: optimal_zones,
        },
        impact: ImpactSection {
            points_difference: allocation.optimal_ppg - metrics.current_ppg,
            wins_difference: wins.win_diff,
            plus_minus_difference: wins.projected_plus_minus - wins.current_plus_minus,
            zones: impact_zones,
        },
    }
}
