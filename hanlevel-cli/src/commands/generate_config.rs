//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Commented configuration template; every value is the built-in default
pub const CONFIG_TEMPLATE: &str = r#"# hanlevel configuration

[vocabulary]
# Directory holding one word list per ladder level
dir = "vocabCsv"
# {ladder} becomes "hsk" or "tocfl", {level} the level number
file_pattern = "{ladder}_level{level}_sorted.csv"

[processing]
# Which characters must be covered by vocabulary:
#   "leading-byte" - three-byte characters led by 0xE4..0xE9 (U+4000..U+9FFF)
#   "code-point"   - CJK Unified Ideographs only (U+4E00..U+9FFF)
script_policy = "leading-byte"
# Candidate runs are at most max_word_bytes - 1 bytes long (4..=100)
max_word_bytes = 100

[output]
# Report format: "text", "json" or "markdown"
report_format = "text"
pretty_json = true

[performance]
# Sentence count at which classification moves to the worker pool
parallel_threshold = 2000
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "hanlevel.toml")]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [vocabulary].dir at your word lists");
        println!("2. Check that every level file is found:");
        println!("   hanlevel vocab --config {}", self.output.display());
        println!("3. Use it for classification:");
        println!(
            "   hanlevel classify -i sentences.csv --config {}",
            self.output.display()
        );

        Ok(())
    }
}
