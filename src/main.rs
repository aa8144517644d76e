//! @ai:module:intent CLI host for the demand analytics export library
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kkcg_export::{
    export_formats, DemandRecord, ExportConfig, ExportDispatcher, ExportInput, InsightsRecord,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kkcg-export")]
#[command(about = "Export demand analytics datasets and insight reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one export artifact
    Export {
        /// Demand dataset CSV (outlet,dish,date,predicted_demand)
        #[arg(short, long)]
        data: PathBuf,

        /// Precomputed insights JSON
        #[arg(short, long)]
        insights: PathBuf,

        /// Insight texts, one per line
        #[arg(long)]
        texts: Option<PathBuf>,

        /// Recommendations, one per line
        #[arg(long)]
        recommendations: Option<PathBuf>,

        /// Export format selector (e.g. csv_full, text-report)
        #[arg(short, long)]
        format: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write an HTML download link instead of the raw payload
        #[arg(long)]
        link: bool,
    },

    /// List available export formats
    Formats,

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "kkcg-export.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kkcg_export=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            data,
            insights,
            texts,
            recommendations,
            format,
            output,
            config,
            link,
        } => run_export(ExportArgs {
            data,
            insights,
            texts,
            recommendations,
            format,
            output,
            config,
            link,
        }),
        Commands::Formats => list_formats(),
        Commands::Init { output } => init_config(output),
    }
}

struct ExportArgs {
    data: PathBuf,
    insights: PathBuf,
    texts: Option<PathBuf>,
    recommendations: Option<PathBuf>,
    format: String,
    output: PathBuf,
    config: Option<PathBuf>,
    link: bool,
}

/// @ai:intent Load inputs, generate the requested export and write it to disk
/// @ai:effects fs:read, fs:write
fn run_export(args: ExportArgs) -> Result<()> {
    let config = load_or_default_config(args.config)?;

    let dataset = load_dataset(&args.data)?;
    let insights = load_insights(&args.insights)?;
    let texts = load_lines(args.texts.as_deref())?;
    let recommendations = load_lines(args.recommendations.as_deref())?;

    tracing::info!(
        "Loaded {} records, {} insight texts, {} recommendations",
        dataset.len(),
        texts.len(),
        recommendations.len()
    );

    let input = ExportInput::new(&dataset, &insights)
        .with_insight_texts(&texts)
        .with_recommendations(&recommendations);

    let dispatcher = ExportDispatcher::new(&config);
    let payload = dispatcher.generate_from_selector(&args.format, &input)?;

    std::fs::create_dir_all(&args.output)?;

    let (path, body) = if args.link {
        (
            args.output.join(format!("{}.html", payload.filename)),
            payload.download_link(),
        )
    } else {
        (args.output.join(&payload.filename), payload.content)
    };

    std::fs::write(&path, body)?;
    println!("Export written to {}", path.display());
    Ok(())
}

/// @ai:intent Read the demand dataset from CSV
/// @ai:effects fs:read
fn load_dataset(path: &Path) -> Result<Vec<DemandRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<DemandRecord>, _>>()
        .with_context(|| format!("Invalid dataset row in {}", path.display()))?;
    Ok(records)
}

/// @ai:intent Read precomputed insights from JSON
/// @ai:effects fs:read
fn load_insights(path: &Path) -> Result<InsightsRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read insights {}", path.display()))?;
    let insights = serde_json::from_str(&content)
        .with_context(|| format!("Invalid insights in {}", path.display()))?;
    Ok(insights)
}

/// @ai:intent Read non-empty lines from an optional text file
/// @ai:effects fs:read
fn load_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// @ai:intent List available export formats
/// @ai:effects pure
fn list_formats() -> Result<()> {
    println!("{:<26} {:<20} {:<14} Description", "Label", "Selector", "Code");
    println!("{}", "-".repeat(90));

    for (label, format) in export_formats() {
        println!(
            "{:<26} {:<20} {:<14} {}",
            label,
            format.name(),
            format.code(),
            format.description()
        );
    }
    Ok(())
}

/// @ai:intent Write the default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = ExportConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<ExportConfig> {
    match path {
        Some(p) => ExportConfig::load(&p),
        None => {
            let default_path = PathBuf::from("kkcg-export.toml");

            if default_path.exists() {
                ExportConfig::load(&default_path)
            } else {
                Ok(ExportConfig::default())
            }
        }
    }
}
