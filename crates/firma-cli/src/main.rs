//! firma CLI - command-line interface for signature analysis.

use clap::{Args, Parser, Subcommand, ValueEnum};
use firma_analysis::{
    Finding, SignatureParameters, SimilarityScore, SimilarityWeights, compare_signatures,
    describe_differences, extract_parameters,
};
use firma_core::{AnalysisConfig, CalibrationInfo, InkPolarity};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "firma")]
#[command(about = "Extract calibrated parameters from signature images and compare them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one signature image.
    Analyze(CliAnalyzeArgs),

    /// Compare a questioned parameter record against references.
    Compare(CliCompareArgs),

    /// Print the default analysis configuration and similarity weights.
    Defaults,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolarityArg {
    /// Dark ink on light paper
    Dark,
    /// Light ink on dark paper
    Light,
}

impl PolarityArg {
    fn to_core(self) -> InkPolarity {
        match self {
            Self::Dark => InkPolarity::DarkInk,
            Self::Light => InkPolarity::LightInk,
        }
    }
}

#[derive(Debug, Clone, Args)]
struct CliAnalyzeArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Real width of the signature in millimeters.
    #[arg(long)]
    width_mm: f64,

    /// Real height of the signature in millimeters.
    #[arg(long)]
    height_mm: f64,

    /// Analysis configuration (JSON); missing fields use the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the ink polarity from the configuration.
    #[arg(long, value_enum)]
    polarity: Option<PolarityArg>,

    /// Override the maximum working dimension in pixels.
    #[arg(long)]
    max_dimension: Option<u32>,

    /// Path to write the parameter record (JSON). Printed to stdout if omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct CliCompareArgs {
    /// Parameter record of the questioned signature (JSON).
    #[arg(long)]
    questioned: PathBuf,

    /// Parameter records of the reference signatures (JSON).
    #[arg(long, num_args = 1.., required = true)]
    reference: Vec<PathBuf>,

    /// Similarity weights (JSON); missing fields use the defaults.
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Path to write the comparison result (JSON). Printed to stdout if omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Output of `firma compare`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonReport {
    similarity: SimilarityScore,
    /// Per-parameter findings against each reference, in input order
    differences: Vec<Vec<Finding>>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Compare(args) => run_compare(&args),
        Commands::Defaults => run_defaults(),
    }
}

// ── helpers ─────────────────────────────────────────────────────

fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| -> CliError {
        format!("Failed to read {}: {}", path.display(), e).into()
    })?;
    serde_json::from_str(&text).map_err(|e| -> CliError {
        format!("Failed to parse {}: {}", path.display(), e).into()
    })
}

fn write_output<T: Serialize>(value: &T, out: Option<&Path>) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)?;
            tracing::info!("Results written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

// ── analyze ─────────────────────────────────────────────────────

fn run_analyze(args: &CliAnalyzeArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());

    let image = firma_io::read_image(&args.image).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", args.image.display(), e).into()
    })?;
    tracing::info!("Image size: {}x{}", image.width(), image.height());

    let mut config: AnalysisConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(polarity) = args.polarity {
        config.polarity = polarity.to_core();
    }
    if let Some(max_dimension) = args.max_dimension {
        config.max_dimension = max_dimension;
    }

    let info = CalibrationInfo::new(args.width_mm, args.height_mm)?;
    let params = extract_parameters(&image, &info, &config)?;

    tracing::info!(
        "Mean stroke width {:.3} mm over {} components, style {:?}",
        params.stroke_width.mean_mm,
        params.connectivity.connected_components,
        params.writing.style,
    );

    write_output(&params, args.out.as_deref())
}

// ── compare ─────────────────────────────────────────────────────

fn run_compare(args: &CliCompareArgs) -> CliResult<()> {
    let questioned: SignatureParameters = read_json(&args.questioned)?;
    let references = args
        .reference
        .iter()
        .map(|p| read_json::<SignatureParameters>(p))
        .collect::<CliResult<Vec<_>>>()?;
    let weights: SimilarityWeights = match &args.weights {
        Some(path) => read_json(path)?,
        None => SimilarityWeights::default(),
    };

    let similarity = compare_signatures(&questioned, &references, &weights)?;
    let differences: Vec<Vec<Finding>> = references
        .iter()
        .map(|r| describe_differences(&questioned, r))
        .collect();

    for (i, findings) in differences.iter().enumerate() {
        let compatible = findings.iter().filter(|f| f.is_compatible()).count();
        tracing::info!(
            "Reference {}: {}/{} parameters compatible",
            i,
            compatible,
            findings.len()
        );
    }
    tracing::info!("Similarity score: {:.3}", similarity.score);

    write_output(
        &ComparisonReport {
            similarity,
            differences,
        },
        args.out.as_deref(),
    )
}

// ── defaults ────────────────────────────────────────────────────

#[derive(Serialize)]
struct Defaults {
    config: AnalysisConfig,
    weights: SimilarityWeights,
}

fn run_defaults() -> CliResult<()> {
    write_output(
        &Defaults {
            config: AnalysisConfig::default(),
            weights: SimilarityWeights::default(),
        },
        None,
    )
}
