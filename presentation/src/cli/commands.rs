//! CLI command definitions

use clap::{Parser, ValueEnum};
use relief_domain::{OutputFormat, ResponseTone, StressCategory};
use std::path::PathBuf;

/// Stress category choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Work or performance pressure
    Work,
    /// Relationship or emotional conflict
    Relationship,
    /// Health-related anxiety
    Health,
    /// Decision fatigue or overwhelm
    DecisionFatigue,
    /// Loneliness or isolation
    Loneliness,
    /// No specific category
    None,
}

impl From<CategoryArg> for StressCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Work => StressCategory::Work,
            CategoryArg::Relationship => StressCategory::Relationship,
            CategoryArg::Health => StressCategory::Health,
            CategoryArg::DecisionFatigue => StressCategory::DecisionFatigue,
            CategoryArg::Loneliness => StressCategory::Loneliness,
            CategoryArg::None => StressCategory::Unspecified,
        }
    }
}

/// Response tone choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToneArg {
    /// Gentle and reassuring
    Gentle,
    /// Encouraging and uplifting
    Encouraging,
    /// Soothing and calm
    Soothing,
    /// Neutral and grounding
    Grounding,
}

impl From<ToneArg> for ResponseTone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Gentle => ResponseTone::Gentle,
            ToneArg::Encouraging => ResponseTone::Encouraging,
            ToneArg::Soothing => ResponseTone::Soothing,
            ToneArg::Grounding => ResponseTone::Grounding,
        }
    }
}

/// Output format for the finished report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// The markdown document exactly as saved
    Markdown,
    /// Styled terminal rendering
    Pretty,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Markdown => OutputFormat::Markdown,
            OutputFormatArg::Pretty => OutputFormat::Pretty,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for stress-relief
#[derive(Parser, Debug)]
#[command(name = "stress-relief")]
#[command(author, version, about = "Turn a stressful moment into a calm, illustrated report")]
#[command(long_about = r#"
stress-relief reframes what is bothering you into a few supportive
paragraphs and pairs each one with a calming GIF.

The process has two stages:
1. Reframing: the model rewrites your entry as up to five short paragraphs
2. Enrichment: each paragraph gets one GIF, chosen from a Giphy search

Both an OpenAI key and a Giphy key are required. They are taken from the
command line or the interactive session only, and are never stored.

Configuration files are loaded from (in priority order):
1. --config <path>         Explicit config file
2. ./stress-relief.toml    Project-level config
3. ~/.config/stress-relief/config.toml   Global config

Example:
  stress-relief --openai-api-key sk-... --giphy-api-key ... -c work -t soothing \
      "My deadline moved up by a week and I can't sleep"
  stress-relief -f journal.txt --save
  stress-relief --interactive
"#)]
pub struct Cli {
    /// What is stressing you (not required in interactive mode)
    pub text: Option<String>,

    /// Read the entry from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Stress category
    #[arg(short, long, value_enum, default_value = "work")]
    pub category: CategoryArg,

    /// Response tone
    #[arg(short, long, value_enum, default_value = "gentle")]
    pub tone: ToneArg,

    /// OpenAI API key
    #[arg(long, value_name = "KEY")]
    pub openai_api_key: Option<String>,

    /// Giphy API key
    #[arg(long, value_name = "KEY")]
    pub giphy_api_key: Option<String>,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (defaults to the configured format, then markdown)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Save the report as markdown (default: stress_relief_report.md)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Write a JSONL transcript of prompts, replies and searches
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Model for both stages (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
