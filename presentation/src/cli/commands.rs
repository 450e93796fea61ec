//! CLI command definitions

use clap::{Parser, ValueEnum};
use ryg_application::ClassifierStrategy;
use std::path::PathBuf;

/// Classifier selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    /// Deterministic answer-count rule
    Rule,
    /// External completion service, falling back to Caution
    Service,
}

impl From<ClassifierArg> for ClassifierStrategy {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Rule => ClassifierStrategy::Rule,
            ClassifierArg::Service => ClassifierStrategy::Service,
        }
    }
}

/// CLI arguments for ryg-status
#[derive(Parser, Debug)]
#[command(name = "ryg-status")]
#[command(author, version, about = "Questionnaire service classifying respondents as Alert, Caution or Clear")]
#[command(long_about = r#"
ryg-status serves a short yes/no questionnaire and classifies each
submission into Alert (0), Caution (1) or Clear (2).

Routes:
  GET  /api/status/questions   Draw a fresh sample of questions
  POST /api/status/submit      Classify answered questions

Configuration files are loaded from (in priority order):
1. RYG_* environment variables (e.g. RYG_SERVER__BIND)
2. --config <path>                          Explicit config file
3. ./ryg-status.toml                        Project-level config
4. ~/.config/ryg-status/config.toml         Global config

Example:
  ryg-status --bind 0.0.0.0:5080
  OPENAI_API_KEY=... ryg-status --classifier service -v
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Classifier strategy (overrides classifier.strategy)
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub classifier: Option<ClassifierArg>,

    /// Question bank file (overrides questions.bank_path)
    #[arg(long, value_name = "PATH")]
    pub bank: Option<PathBuf>,

    /// Questions shown per respondent (overrides questions.sample_size)
    #[arg(long, value_name = "N")]
    pub sample_size: Option<usize>,

    /// JSONL file receiving one record per classification
    #[arg(long, value_name = "PATH")]
    pub classification_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

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
