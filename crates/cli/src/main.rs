//! # decompose
//!
//! Command-line interface for classical time series decomposition.

use clap::{Parser, Subcommand};
use decomposition_facade::{
    calculate_acf, dominant_lag, AnalysisConfig, Observation, SeasonalPeriod, TemplateNarrator,
    DEFAULT_MAX_LAG, DEFAULT_MIN_POINTS,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod loader;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "decompose")]
#[command(about = "Trend, seasonal and autocorrelation analysis of time series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a series and report its trend fit and autocorrelation
    Analyze {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Seasonal period in observations
        #[arg(short, long, conflicts_with = "preset")]
        period: Option<usize>,

        /// Period preset (weekly, fiscal, quarterly, granular)
        #[arg(long)]
        preset: Option<SeasonalPeriod>,

        /// Largest autocorrelation lag
        #[arg(long, default_value_t = DEFAULT_MAX_LAG)]
        max_lag: usize,

        /// Fewest observations accepted
        #[arg(long, default_value_t = DEFAULT_MIN_POINTS)]
        min_points: usize,

        /// Column name or index for values
        #[arg(short, long)]
        column: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the autocorrelation profile of a series
    Acf {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Largest lag
        #[arg(long, default_value_t = DEFAULT_MAX_LAG)]
        max_lag: usize,

        /// Column name or index for values
        #[arg(short, long)]
        column: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Write a JSON document to a file or stdout
fn write_json(value: &serde_json::Value, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(file, value)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            info!("results written to {}", path.display());
        }
        None => {
            let text = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to encode JSON: {}", e))?;
            println!("{}", text);
        }
    }
    Ok(())
}

fn load(input: &Path, column: Option<&str>) -> CliResult<Vec<Observation>> {
    let observations = loader::load_observations(input, column)?;
    info!(
        "loaded {} data points from {}",
        observations.len(),
        input.display()
    );
    Ok(observations)
}

/// Run analyze command
#[allow(clippy::too_many_arguments)]
fn run_analyze(
    input: PathBuf,
    period: Option<usize>,
    preset: Option<SeasonalPeriod>,
    max_lag: usize,
    min_points: usize,
    column: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let observations = load(&input, column.as_deref())?;

    let mut builder = AnalysisConfig::builder()
        .max_lag(max_lag)
        .min_points(min_points);
    builder = match (period, preset) {
        (Some(p), _) => builder.period(p),
        (None, Some(preset)) => builder.seasonal_period(preset),
        (None, None) => builder,
    };
    let config = builder.build().map_err(|e| e.to_string())?;

    let analysis = config
        .analyzer()
        .and_then(|analyzer| analyzer.analyze_with_narrative(&observations, &TemplateNarrator))
        .map_err(|e| e.to_string())?;

    let result = &analysis.decomposition;
    info!(
        "trend velocity {:+.4}, reliability {:.1}%, projected delta {:.2}, sample size {}",
        result.slope,
        result.r_squared * 100.0,
        result.projected_delta(),
        result.len()
    );

    let json = serde_json::json!({
        "config": config,
        "direction": result.trend_direction().label(),
        "projected_delta": result.projected_delta(),
        "suggested_period": dominant_lag(&analysis.acf, 2),
        "analysis": analysis,
    });
    write_json(&json, output.as_deref())
}

/// Run acf command
fn run_acf(
    input: PathBuf,
    max_lag: usize,
    column: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let observations = load(&input, column.as_deref())?;
    let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
    let acf = calculate_acf(&values, max_lag);

    for entry in &acf {
        info!("lag {:>3}: {:+.4}", entry.lag, entry.correlation);
    }

    let json = serde_json::json!({
        "max_lag": max_lag,
        "suggested_period": dominant_lag(&acf, 2),
        "acf": acf,
    });
    write_json(&json, output.as_deref())
}

fn main() {
    // Initialize tracing; logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decompose=info,decomposition_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            period,
            preset,
            max_lag,
            min_points,
            column,
            output,
        } => run_analyze(input, period, preset, max_lag, min_points, column, output),

        Commands::Acf {
            input,
            max_lag,
            column,
            output,
        } => run_acf(input, max_lag, column, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
