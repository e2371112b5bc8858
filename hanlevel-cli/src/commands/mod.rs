//! CLI command implementations

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use hanlevel_core::ScriptPolicy;
use hanlevel_engine::{LadderKind, LevelClassifier};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::VocabularyLoader;

pub mod classify;
pub mod filter;
pub mod generate_config;
pub mod segment;
pub mod vocab;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate sentence files with their minimal HSK and TOCFL levels
    Classify(classify::ClassifyArgs),

    /// Show how one sentence segments against a ladder
    Segment(segment::SegmentArgs),

    /// Print word counts per vocabulary level
    Vocab(vocab::VocabArgs),

    /// Keep only rows of an annotated file at a given level
    Filter(filter::FilterArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(quiet),
            Commands::Segment(args) => args.execute(),
            Commands::Vocab(args) => args.execute(),
            Commands::Filter(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Vocabulary and segmentation options shared by several commands
#[derive(Debug, Clone, Default, Args)]
pub struct VocabularyArgs {
    /// Directory holding `{ladder}_level{n}_sorted.csv` word lists
    #[arg(short = 'd', long, value_name = "DIR")]
    pub vocab_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Which characters must be covered by vocabulary
    #[arg(long, value_enum)]
    pub script_policy: Option<PolicyArg>,
}

impl VocabularyArgs {
    /// Load the configuration file, then apply command-line overrides
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.vocab_dir {
            config.vocabulary.dir = dir.clone();
        }
        if let Some(policy) = self.script_policy {
            config.processing.script_policy = policy.into();
        }
        Ok(config)
    }

    /// Load both ladders and build a classifier
    pub fn build_classifier(&self, config: &CliConfig) -> Result<LevelClassifier> {
        config
            .engine_config(false, None)
            .validate()
            .map_err(CliError::from)?;

        let loader = VocabularyLoader::from_config(&config.vocabulary);
        log::info!("Loading vocabularies from {}", config.vocabulary.dir.display());

        let hsk = loader.load_ladder(LadderKind::Hsk)?;
        let tocfl = loader.load_ladder(LadderKind::Tocfl)?;
        let classifier = LevelClassifier::new(hsk, tocfl, config.segmenter_config())
            .map_err(CliError::from)?;
        Ok(classifier)
    }
}

/// Script policy choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Three-byte characters led by 0xE4..=0xE9
    LeadingByte,
    /// Code points U+4E00..=U+9FFF
    CodePoint,
}

impl From<PolicyArg> for ScriptPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LeadingByte => ScriptPolicy::LeadingByte,
            PolicyArg::CodePoint => ScriptPolicy::CodePoint,
        }
    }
}

/// Ladder choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LadderArg {
    /// HSK 1-7
    Hsk,
    /// TOCFL 1-5
    Tocfl,
}

impl From<LadderArg> for LadderKind {
    fn from(arg: LadderArg) -> Self {
        match arg {
            LadderArg::Hsk => LadderKind::Hsk,
            LadderArg::Tocfl => LadderKind::Tocfl,
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
