//! Report command: readability metrics, top words, report file.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readease_core::config::Config;
use readease_core::metrics::{self, MetricsOptions, MetricsReport};
use readease_core::report::{self, ReportFormat};

use super::{prompt_for_file, read_input_file};

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Text file to analyze (prompted for when omitted).
    pub file: Option<Utf8PathBuf>,

    /// Number of most frequent words to include.
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Report file to write (default: report.csv, or report.json with --format json).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Report file format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Print the summary without writing a report file.
    #[arg(long)]
    pub no_write: bool,
}

/// Score a file and write its report.
///
/// Nothing is written when the text has no words or sentences. A grade
/// over the maximum is reported as an error after the file is written.
#[instrument(name = "cmd_report", skip_all, fields(file = ?args.file))]
pub fn cmd_report(args: ReportArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(top = ?args.top, output = ?args.output, "executing report command");

    let file = match args.file {
        Some(file) => file,
        None => prompt_for_file(std::io::stdin().lock(), std::io::stderr())?,
    };
    let content = read_input_file(&file, config.input_limit())?;

    let options = MetricsOptions {
        top_n: args.top.unwrap_or_else(|| config.top_words_or_default()),
        max_grade: args.max_grade.or(config.max_grade),
    };
    let report = metrics::analyze(&content, options)
        .with_context(|| format!("failed to compute metrics for {file}"))?;

    let written = if args.no_write {
        None
    } else {
        let format = args.format.unwrap_or_else(|| config.report_format_or_default());
        let output = args.output.unwrap_or_else(|| config.report_path_for(format));
        report::write_report(&report, &output, format)
            .with_context(|| format!("failed to write report for {file}"))?;
        Some(output)
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&file, &report, written.as_deref());
    }

    if report.over_max {
        let max = report.max_grade.unwrap_or(0.0);
        bail!(
            "{file} scores grade {:.1} (max: {max:.1}). Shorten sentences or use simpler words.",
            report.flesch_kincaid_grade,
        );
    }

    Ok(())
}

fn print_summary(file: &Utf8Path, report: &MetricsReport, written: Option<&Utf8Path>) {
    println!("{}", file.bold());
    println!("{:<12} {}", "Syllables:".dimmed(), report.total_syllables);
    println!("{:<12} {}", "Words:".dimmed(), report.total_words);
    println!("{:<12} {}", "Sentences:".dimmed(), report.total_sentences);
    println!();
    println!(
        "{:<14} {:.2} ({})",
        "Reading ease:".dimmed(),
        report.flesch_reading_ease,
        report.ease_band.cyan(),
    );
    match report.max_grade {
        Some(max) if report.over_max => println!(
            "{:<14} {:.2} {}",
            "Grade level:".dimmed(),
            report.flesch_kincaid_grade,
            format!("(max: {max:.1})").red(),
        ),
        Some(max) => println!(
            "{:<14} {:.2} {}",
            "Grade level:".dimmed(),
            report.flesch_kincaid_grade,
            format!("(max: {max:.1})").green(),
        ),
        None => println!(
            "{:<14} {:.2}",
            "Grade level:".dimmed(),
            report.flesch_kincaid_grade
        ),
    }

    if !report.top_words.is_empty() {
        println!();
        println!("{}", "Top words".bold().underline());
        for wc in &report.top_words {
            println!("{:>6}  {}", wc.count, wc.word);
        }
    }

    if let Some(path) = written {
        println!();
        println!("{} {}", "Report written to".dimmed(), path.cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(contents: &str) -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let file = Utf8PathBuf::try_from(tmp.path().join("input.txt")).unwrap();
        std::fs::write(file.as_std_path(), contents).unwrap();
        (tmp, file)
    }

    #[test]
    fn writes_csv_report() {
        let (tmp, file) = setup("The cat sat on the mat. The dog ran fast.");
        let output = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();
        let args = ReportArgs {
            file: Some(file),
            output: Some(output.clone()),
            top: Some(2),
            ..ReportArgs::default()
        };

        cmd_report(args, false, &Config::default()).unwrap();

        let csv = std::fs::read_to_string(output.as_std_path()).unwrap();
        assert!(csv.starts_with("syllables,words,sentences,reading_ease,grade_level\n10,10,2,"));
        assert!(csv.ends_with("count,word\n3,the\n1,cat\n"));
    }

    #[test]
    fn empty_text_writes_nothing() {
        let (tmp, file) = setup("   ");
        let output = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();
        let args = ReportArgs {
            file: Some(file),
            output: Some(output.clone()),
            ..ReportArgs::default()
        };

        let err = cmd_report(args, true, &Config::default()).unwrap_err();

        assert!(format!("{err:#}").contains("without words and sentences"));
        assert!(!output.as_std_path().exists());
    }

    #[test]
    fn config_supplies_defaults() {
        let (tmp, file) = setup("Hi. Bye. Hi.");
        let output = Utf8PathBuf::try_from(tmp.path().join("metrics.json")).unwrap();
        let config = Config {
            top_words: Some(1),
            report_path: Some(output.clone()),
            report_format: Some(ReportFormat::Json),
            ..Config::default()
        };
        let args = ReportArgs {
            file: Some(file),
            ..ReportArgs::default()
        };

        cmd_report(args, true, &config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output.as_std_path()).unwrap()).unwrap();
        assert_eq!(json["total_sentences"], 3);
        assert_eq!(json["top_words"].as_array().unwrap().len(), 1);
        assert_eq!(json["top_words"][0]["word"], "hi");
    }

    #[test]
    fn over_max_grade_fails_after_writing() {
        let (tmp, file) = setup(
            "Comprehensive organizational restructuring necessitated interdepartmental \
             communication protocols facilitating procedural documentation dissemination.",
        );
        let output = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();
        let args = ReportArgs {
            file: Some(file),
            output: Some(output.clone()),
            max_grade: Some(6.0),
            ..ReportArgs::default()
        };

        let err = cmd_report(args, false, &Config::default()).unwrap_err();

        assert!(err.to_string().contains("max: 6.0"));
        assert!(output.as_std_path().exists());
    }

    #[test]
    fn no_write_skips_file() {
        let (tmp, file) = setup("Hi. Bye.");
        let output = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();
        let args = ReportArgs {
            file: Some(file),
            output: Some(output.clone()),
            no_write: true,
            ..ReportArgs::default()
        };

        cmd_report(args, false, &Config::default()).unwrap();

        assert!(!output.as_std_path().exists());
    }
}
