// Shot-optimization analyzer entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to stderr; stdout carries the report)
// 2. Load config
// 3. Load and join the provider CSV exports
// 4. Run the engine over every team
// 5. Write the JSON report set to the configured path or stdout

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tracing::info;

use twos_vs_threes::config;
use twos_vs_threes::engine;
use twos_vs_threes::engine::report::LeagueReport;
use twos_vs_threes::ingest;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "analyzer.toml".into());
    let config = config::load_config(Path::new(&config_path))
        .context("failed to load configuration")?;
    info!(
        "Config loaded: shot locations from {}, team stats from {}",
        config.data_paths.shot_locations, config.data_paths.team_stats
    );

    let teams = ingest::load_team_table(
        Path::new(&config.data_paths.shot_locations),
        Path::new(&config.data_paths.team_stats),
    )
    .context("failed to load team stats")?;
    info!("Loaded {} teams", teams.len());

    let reports = engine::analyze_league(&teams);
    info!(
        "Analyzed {} of {} teams successfully",
        reports.len(),
        teams.len()
    );

    let league = LeagueReport {
        generated_at: Utc::now(),
        team_count: reports.len(),
        teams: reports,
    };
    let json = serde_json::to_string_pretty(&league).context("failed to serialize reports")?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report to {path}"))?;
            info!("Report written to {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Initialize tracing to stderr so stdout stays clean for report output.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("twos_vs_threes=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
