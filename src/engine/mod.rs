// Expected-value shot-optimization engine.
//
// A stateless, single-pass pipeline per team: validate the raw record,
// derive current-state metrics, solve the EV-proportional allocation,
// project the win impact, and assemble the report. Teams are independent
// of one another; one team failing never aborts the batch.

pub mod allocation;
pub mod metrics;
pub mod report;
pub mod wins;
pub mod zones;

use thiserror::Error;
use tracing::warn;

use crate::engine::report::TeamReport;
use crate::engine::zones::Zone;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input for `{field}`: {message}")]
    InvalidInput { field: String, message: String },

    #[error("every zone percentage is zero; optimal shares are undefined")]
    ZeroExpectedValue,
}

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// Attempts and made-percentage for one zone. Percentage is on the 0-100
/// scale, as delivered by the normalized input table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneShooting {
    pub attempts: f64,
    pub fg_pct: f64,
}

/// Normalized per-team input record, one row of the upstream table join.
/// Constructed once per run, immutable, discarded afterwards.
#[derive(Debug, Clone)]
pub struct TeamRawStats {
    pub team: String,
    /// Per-zone shooting lines, indexed in [`Zone::ALL`] order.
    pub zones: [ZoneShooting; 6],
    pub ft_made: f64,
    pub ft_attempts: f64,
    pub ft_pct: f64,
    pub wins: u32,
    pub games_played: u32,
    pub plus_minus: f64,
}

impl TeamRawStats {
    /// Shooting line for one zone.
    pub fn zone(&self, zone: Zone) -> &ZoneShooting {
        &self.zones[zone.index()]
    }

    /// Reject records the engine cannot compute on. Failing validation
    /// fails this team only.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        fn non_negative(field: String, value: f64) -> Result<(), AnalysisError> {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::InvalidInput {
                    field,
                    message: format!("must be a non-negative number, got {value}"),
                });
            }
            Ok(())
        }
        fn percentage(field: String, value: f64) -> Result<(), AnalysisError> {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(AnalysisError::InvalidInput {
                    field,
                    message: format!("must be a percentage in [0, 100], got {value}"),
                });
            }
            Ok(())
        }

        for zone in Zone::ALL {
            let line = self.zone(zone);
            non_negative(format!("{}_attempts", zone.code()), line.attempts)?;
            percentage(format!("{}_fg_pct", zone.code()), line.fg_pct)?;
        }
        non_negative("ft_made".into(), self.ft_made)?;
        non_negative("ft_attempts".into(), self.ft_attempts)?;
        percentage("ft_pct".into(), self.ft_pct)?;
        if self.games_played == 0 {
            return Err(AnalysisError::InvalidInput {
                field: "games_played".into(),
                message: "must be positive".into(),
            });
        }
        if !self.plus_minus.is_finite() {
            return Err(AnalysisError::InvalidInput {
                field: "plus_minus".into(),
                message: "must be a finite number".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Top-level entry points
// ---------------------------------------------------------------------------

/// Run the full pipeline for one team.
pub fn analyze_team(raw: &TeamRawStats) -> Result<TeamReport, AnalysisError> {
    raw.validate()?;
    let team_metrics = metrics::build(raw);
    let alloc = allocation::solve(&team_metrics)?;
    let win_projection = wins::project(
        team_metrics.current_ppg,
        alloc.optimal_ppg,
        raw.wins,
        raw.games_played,
        raw.plus_minus,
    );
    Ok(report::assemble(raw, &team_metrics, &alloc, &win_projection))
}

/// Run the pipeline for every team, skipping teams that fail with a
/// warning. Report order follows input order.
pub fn analyze_league(teams: &[TeamRawStats]) -> Vec<TeamReport> {
    let mut reports = Vec::with_capacity(teams.len());
    for team in teams {
        match analyze_team(team) {
            Ok(report) => reports.push(report),
            Err(e) => warn!("skipping team '{}': {}", team.team, e),
        }
    }
    reports
}

// ---------------------------------------------------------------------------
// Tests (shared helpers live here so sibling modules can reuse them)
// ---------------------------------------------------------------------------
