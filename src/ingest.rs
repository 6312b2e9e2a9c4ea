// Team stats loading and normalization.
//
// Reads the two CSV exports from the upstream stats provider: a
// shot-location table with verbose per-zone column names and a team-stats
// table with free-throw and record columns. Percentages arrive as decimals
// (0-1) and are converted to the engine's 0-100 scale; the two tables are
// inner-joined on team name.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::engine::{TeamRawStats, ZoneShooting};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("no team appears in both input tables")]
    EmptyJoin,
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private) — provider export format
// ---------------------------------------------------------------------------

/// Shot-location export row. The provider names columns with the verbose
/// zone label followed by the stat suffix; FG_PCT is a 0-1 decimal.
#[derive(Debug, Deserialize)]
struct RawShotLocationRow {
    #[serde(rename = "TEAM_NAME")]
    team_name: String,
    #[serde(rename = "Restricted Area FGA")]
    ra_fga: f64,
    #[serde(rename = "Restricted Area FG_PCT")]
    ra_fg_pct: f64,
    #[serde(rename = "In The Paint (Non-RA) FGA")]
    nra_fga: f64,
    #[serde(rename = "In The Paint (Non-RA) FG_PCT")]
    nra_fg_pct: f64,
    #[serde(rename = "Mid-Range FGA")]
    mr_fga: f64,
    #[serde(rename = "Mid-Range FG_PCT")]
    mr_fg_pct: f64,
    #[serde(rename = "Left Corner 3 FGA")]
    lc3_fga: f64,
    #[serde(rename = "Left Corner 3 FG_PCT")]
    lc3_fg_pct: f64,
    #[serde(rename = "Right Corner 3 FGA")]
    rc3_fga: f64,
    #[serde(rename = "Right Corner 3 FG_PCT")]
    rc3_fg_pct: f64,
    #[serde(rename = "Above the Break 3 FGA")]
    ab3_fga: f64,
    #[serde(rename = "Above the Break 3 FG_PCT")]
    ab3_fg_pct: f64,
}

/// Team-stats export row. FT_PCT is a 0-1 decimal; GP and W arrive as
/// floats in per-game exports and are rounded to whole numbers.
#[derive(Debug, Deserialize)]
struct RawTeamStatsRow {
    #[serde(rename = "TEAM_NAME")]
    team_name: String,
    #[serde(rename = "FTM")]
    ftm: f64,
    #[serde(rename = "FTA")]
    fta: f64,
    #[serde(rename = "FT_PCT")]
    ft_pct: f64,
    #[serde(rename = "GP")]
    gp: f64,
    #[serde(rename = "W")]
    w: f64,
    #[serde(rename = "PLUS_MINUS")]
    plus_minus: f64,
}

/// Shot-location line after column mapping, keyed by team for the join.
#[derive(Debug, Clone)]
struct ShotLocationLine {
    team: String,
    zones: [ZoneShooting; 6],
}

/// Record-level stats after column mapping.
#[derive(Debug, Clone, Copy)]
struct TeamTotalsLine {
    ft_made: f64,
    ft_attempts: f64,
    ft_pct: f64,
    wins: u32,
    games_played: u32,
    plus_minus: f64,
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn pct(decimal: f64) -> f64 {
    decimal * 100.0
}

fn load_shot_locations_from_reader<R: Read>(rdr: R) -> Result<Vec<ShotLocationLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut lines = Vec::new();
    for result in reader.deserialize::<RawShotLocationRow>() {
        match result {
            Ok(raw) => {
                // Catalog order: RA, NRA, MR, LC3, RC3, AB3.
                let zones = [
                    ZoneShooting { attempts: raw.ra_fga, fg_pct: pct(raw.ra_fg_pct) },
                    ZoneShooting { attempts: raw.nra_fga, fg_pct: pct(raw.nra_fg_pct) },
                    ZoneShooting { attempts: raw.mr_fga, fg_pct: pct(raw.mr_fg_pct) },
                    ZoneShooting { attempts: raw.lc3_fga, fg_pct: pct(raw.lc3_fg_pct) },
                    ZoneShooting { attempts: raw.rc3_fga, fg_pct: pct(raw.rc3_fg_pct) },
                    ZoneShooting { attempts: raw.ab3_fga, fg_pct: pct(raw.ab3_fg_pct) },
                ];
                lines.push(ShotLocationLine {
                    team: raw.team_name.trim().to_string(),
                    zones,
                });
            }
            Err(e) => {
                warn!("skipping malformed shot-location row: {}", e);
            }
        }
    }
    Ok(lines)
}

fn load_team_stats_from_reader<R: Read>(
    rdr: R,
) -> Result<HashMap<String, TeamTotalsLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut totals = HashMap::new();
    for result in reader.deserialize::<RawTeamStatsRow>() {
        match result {
            Ok(raw) => {
                totals.insert(
                    raw.team_name.trim().to_string(),
                    TeamTotalsLine {
                        ft_made: raw.ftm,
                        ft_attempts: raw.fta,
                        ft_pct: pct(raw.ft_pct),
                        wins: raw.w.round() as u32,
                        games_played: raw.gp.round() as u32,
                        plus_minus: raw.plus_minus,
                    },
                );
            }
            Err(e) => {
                warn!("skipping malformed team-stats row: {}", e);
            }
        }
    }
    Ok(totals)
}

/// Join the two mapped tables into normalized engine input. Teams present
/// in only one table are dropped with a warning; row order follows the
/// shot-location table.
fn join_tables(
    shots: Vec<ShotLocationLine>,
    mut totals: HashMap<String, TeamTotalsLine>,
) -> Result<Vec<TeamRawStats>, IngestError> {
    let mut teams = Vec::with_capacity(shots.len());
    for line in shots {
        match totals.remove(&line.team) {
            Some(t) => teams.push(TeamRawStats {
                team: line.team,
                zones: line.zones,
                ft_made: t.ft_made,
                ft_attempts: t.ft_attempts,
                ft_pct: t.ft_pct,
                wins: t.wins,
                games_played: t.games_played,
                plus_minus: t.plus_minus,
            }),
            None => {
                warn!("team '{}' has no team-stats row; dropping", line.team);
            }
        }
    }
    for leftover in totals.keys() {
        warn!("team '{}' has no shot-location row; dropping", leftover);
    }
    if teams.is_empty() {
        return Err(IngestError::EmptyJoin);
    }
    Ok(teams)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load and join the two provider tables from in-memory readers.
pub fn load_from_readers<R1: Read, R2: Read>(
    shot_locations: R1,
    team_stats: R2,
) -> Result<Vec<TeamRawStats>, IngestError> {
    let shots = load_shot_locations_from_reader(shot_locations).map_err(|source| {
        IngestError::Csv {
            path: "<shot locations>".into(),
            source,
        }
    })?;
    let totals = load_team_stats_from_reader(team_stats).map_err(|source| IngestError::Csv {
        path: "<team stats>".into(),
        source,
    })?;
    join_tables(shots, totals)
}

/// Load and join the two provider tables from files.
pub fn load_team_table(
    shot_locations_path: &Path,
    team_stats_path: &Path,
) -> Result<Vec<TeamRawStats>, IngestError> {
    let open = |path: &Path| {
        File::open(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })
    };

    let shots = load_shot_locations_from_reader(open(shot_locations_path)?).map_err(|source| {
        IngestError::Csv {
            path: shot_locations_path.display().to_string(),
            source,
        }
    })?;
    let totals =
        load_team_stats_from_reader(open(team_stats_path)?).map_err(|source| IngestError::Csv {
            path: team_stats_path.display().to_string(),
            source,
        })?;
    join_tables(shots, totals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
