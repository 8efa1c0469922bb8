use clap::{Args, Parser, ValueEnum};
use kenstone::MetricKind;
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for splitting sample sets with Kennard-Stone farthest-point selection.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Input file containing the sample matrix.
    ///
    /// Use '-' to read from standard input. One sample per line, features separated by
    /// whitespace or commas; blank lines and lines starting with '#' are ignored. All
    /// samples must have the same number of features.
    #[arg(value_name = "INPUT")]
    pub input: String,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub selection: SelectionOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for floating-point values.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Options for controlling the selection.
#[derive(Args)]
#[command(next_help_heading = "Selection Options")]
pub struct SelectionOptions {
    /// Number of samples to select.
    #[arg(short = 'k', long, value_name = "COUNT", conflicts_with = "fraction")]
    pub size: Option<usize>,

    /// Fraction of the sample set to select, in (0, 1].
    ///
    /// Rounded to the nearest whole number of samples.
    #[arg(short = 'r', long, value_name = "FRACTION")]
    pub fraction: Option<f64>,

    /// Pairwise distance metric.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Euclidean)]
    pub metric: MetricArg,

    /// Warm-start seed index; repeat the flag to give several.
    ///
    /// When given, selection resumes from these indices instead of the farthest pair.
    #[arg(long = "seed", value_name = "INDEX")]
    pub seeds: Vec<usize>,
}

/// Output format for the selection results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed tables with the selection order and separations.
    Pretty,
    /// Comma-separated values with columns: set, order, index, separation.
    Csv,
    /// JSON object containing the selected/remaining partitions and metadata.
    Json,
}

/// Pairwise distance metric, as exposed on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Standard L2 distance.
    Euclidean,
    /// L2 distance without the square root; same selection, cheaper per pair.
    SquaredEuclidean,
    /// L1 (city-block) distance.
    Manhattan,
    /// L-infinity (maximum coordinate difference) distance.
    Chebyshev,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Euclidean => MetricKind::Euclidean,
            MetricArg::SquaredEuclidean => MetricKind::SquaredEuclidean,
            MetricArg::Manhattan => MetricKind::Manhattan,
            MetricArg::Chebyshev => MetricKind::Chebyshev,
        }
    }
}
