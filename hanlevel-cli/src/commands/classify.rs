//! Classify command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hanlevel_engine::{AdaptiveDispatcher, BatchReport, LevelClassifier};

use super::VocabularyArgs;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, SentenceTable};
use crate::output::{self, RecordWriter, ReportFormat};
use crate::progress::ProgressReporter;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Sentence files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Write the annotated table here instead of rewriting the input
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Report format (default from config, else text)
    #[arg(short, long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Force parallel processing even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting sentence classification");
        log::debug!("Arguments: {:?}", self);

        let config = self.vocabulary.load_config()?;
        let files = resolve_patterns(&self.input)?;
        if self.output.is_some() && files.len() > 1 {
            return Err(CliError::ConfigError(format!(
                "--output takes a single input file, {} matched",
                files.len()
            ))
            .into());
        }

        let classifier = self.vocabulary.build_classifier(&config)?;
        let dispatcher =
            AdaptiveDispatcher::new(config.engine_config(self.parallel, self.threads))
                .map_err(CliError::from)?;

        let mut report = BatchReport::default();
        for path in &files {
            let file_report = self.classify_file(path, &classifier, &dispatcher, quiet)?;
            report.merge(&file_report);
        }

        let format = self.report.unwrap_or(config.output.report_format);
        match &self.report_file {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut formatter =
                    output::create_formatter(format, BufWriter::new(file), config.output.pretty_json);
                output::write_report(formatter.as_mut(), &report)?;
            }
            None => {
                let stdout = io::stdout();
                let mut formatter =
                    output::create_formatter(format, stdout.lock(), config.output.pretty_json);
                output::write_report(formatter.as_mut(), &report)?;
            }
        }

        Ok(())
    }

    /// Classify one file and write its annotated table
    fn classify_file(
        &self,
        path: &Path,
        classifier: &LevelClassifier,
        dispatcher: &AdaptiveDispatcher,
        quiet: bool,
    ) -> Result<BatchReport> {
        let content = FileReader::read_bytes(path)?;
        let table = SentenceTable::parse(&content);
        if table.skipped > 0 {
            log::warn!(
                "{}: skipped {} rows with fewer than 3 fields or invalid UTF-8",
                path.display(),
                table.skipped
            );
        }

        let sentences = table.sentences();
        let mut progress = ProgressReporter::new(quiet);
        progress.init_sentences(sentences.len() as u64, &path.display().to_string());
        let batch = dispatcher
            .classify_batch(classifier, &sentences, &progress)
            .map_err(CliError::from)?;
        progress.finish();

        let write_table = |out: &mut dyn Write| -> Result<()> {
            let mut writer = RecordWriter::new(out);
            if let Some(header) = table.output_header() {
                writer.write_header(&header)?;
            }
            for (record, levels) in table.records.iter().zip(&batch.levels) {
                writer.write_record(record, levels)?;
            }
            writer.finish()?;
            log::info!("{}: wrote {} rows", path.display(), writer.rows());
            Ok(())
        };

        match &self.output {
            Some(output) => {
                let file = File::create(output)
                    .with_context(|| format!("Failed to create {}", output.display()))?;
                write_table(&mut BufWriter::new(file))?;
            }
            None => FileReader::replace_with(path, write_table)?,
        }

        Ok(batch.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vocab_dir(root: &Path) -> PathBuf {
        let dir = root.join("vocab");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("hsk_level1_sorted.csv"),
            "Word,Pinyin\n我,wǒ\n是,shì\n你,nǐ\n好,hǎo\n",
        )
        .unwrap();
        fs::write(dir.join("hsk_level2_sorted.csv"), "Word,Pinyin\n学生,xuéshēng\n").unwrap();
        fs::write(
            dir.join("tocfl_level1_sorted.csv"),
            "Word,Pinyin\n我,wǒ\n是,shì\n你,nǐ\n好,hǎo\n",
        )
        .unwrap();
        fs::write(dir.join("tocfl_level3_sorted.csv"), "Word,Pinyin\n學生,xuéshēng\n").unwrap();
        dir
    }

    fn args(input: &Path, vocab: PathBuf, output: Option<PathBuf>) -> ClassifyArgs {
        ClassifyArgs {
            input: vec![input.display().to_string()],
            output,
            vocabulary: VocabularyArgs {
                vocab_dir: Some(vocab),
                ..VocabularyArgs::default()
            },
            report: Some(ReportFormat::Json),
            report_file: Some(input.with_extension("report.json")),
            parallel: false,
            threads: None,
        }
    }

    #[test]
    fn test_rewrites_input_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let vocab = vocab_dir(temp_dir.path());
        let input = temp_dir.path().join("sentences.csv");
        fs::write(
            &input,
            "Characters,Pinyin,Meaning,HSK Level,TOCFL Level\n\
             你好,nǐ hǎo,hello,7,7\n\
             我是学生,wǒ shì xuéshēng,I am a student\n\
             我是學生,wǒ shì xuéshēng,\"I am a student, traditional\"\n",
        )
        .unwrap();

        args(&input, vocab, None).execute(true).unwrap();

        let rewritten = fs::read_to_string(&input).unwrap();
        assert_eq!(
            rewritten,
            "Characters,Pinyin,Meaning,HSK Level,TOCFL Level\n\
             你好,nǐ hǎo,hello,1,1\n\
             我是学生,wǒ shì xuéshēng,I am a student,2,0\n\
             我是學生,wǒ shì xuéshēng,\"I am a student, traditional\",0,3\n"
        );

        let report = fs::read_to_string(input.with_extension("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["ladders"][0]["total"], 3);
    }

    #[test]
    fn test_output_file_leaves_input_alone() {
        let temp_dir = TempDir::new().unwrap();
        let vocab = vocab_dir(temp_dir.path());
        let input = temp_dir.path().join("sentences.csv");
        let output = temp_dir.path().join("annotated.csv");
        let original = "Characters,Pinyin,Meaning\n你好,nǐ hǎo,hello\n";
        fs::write(&input, original).unwrap();

        args(&input, vocab, Some(output.clone()))
            .execute(true)
            .unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), original);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Characters,Pinyin,Meaning,HSK Level,TOCFL Level\n你好,nǐ hǎo,hello,1,1\n"
        );
    }

    #[test]
    fn test_invalid_utf8_row_is_dropped_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let vocab = vocab_dir(temp_dir.path());
        let input = temp_dir.path().join("sentences.csv");
        let mut content = "Characters,Pinyin,Meaning\n你好,nǐ hǎo,hello\n".as_bytes().to_vec();
        content.extend_from_slice(b"\xff\xfe,bad,row\n");
        content.extend_from_slice("我是学生,wǒ shì xuéshēng,I am a student\n".as_bytes());
        fs::write(&input, content).unwrap();

        args(&input, vocab, None).execute(true).unwrap();

        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            "Characters,Pinyin,Meaning,HSK Level,TOCFL Level\n\
             你好,nǐ hǎo,hello,1,1\n\
             我是学生,wǒ shì xuéshēng,I am a student,2,0\n"
        );
        let report = fs::read_to_string(input.with_extension("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["ladders"][0]["total"], 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let vocab = vocab_dir(temp_dir.path());
        let input = temp_dir.path().join("sentences.csv");
        fs::write(&input, "Characters,Pinyin,Meaning\n你好,nǐ hǎo,hello\n").unwrap();
        fs::set_permissions(&input, fs::Permissions::from_mode(0o644)).unwrap();

        args(&input, vocab, None).execute(true).unwrap();

        let mode = fs::metadata(&input).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_output_with_many_inputs_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let vocab = vocab_dir(temp_dir.path());
        fs::write(temp_dir.path().join("a.csv"), "h\n").unwrap();
        fs::write(temp_dir.path().join("b.csv"), "h\n").unwrap();

        let mut args = args(
            &temp_dir.path().join("*.csv"),
            vocab,
            Some(temp_dir.path().join("out.csv")),
        );
        args.report_file = None;

        let err = args.execute(true).unwrap_err();
        assert!(err.to_string().contains("--output takes a single input file"));
    }
}
