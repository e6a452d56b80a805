//! cv-export CLI - export CV markup to PDF, Word, or Markdown

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use export::{ExportFormat, ExportMetadata, ExportOptions, ExportOrchestrator, GuideRepository};
use store::{ExportSettings, FileSink, SettingsManager};

#[derive(Parser)]
#[command(name = "cv-export")]
#[command(version)]
#[command(about = "Export CV markup to PDF, Word, or Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a markup file
    Export {
        /// Input markup file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format: pdf, word (docx), or markdown (md)
        #[arg(short, long, value_parser = parse_format)]
        format: ExportFormat,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Name of the service that produced the content
        #[arg(long)]
        service: Option<String>,

        /// Output file name without extension
        #[arg(long)]
        file_name: Option<String>,

        /// Score out of 100
        #[arg(long)]
        score: Option<f64>,

        /// Letter grade shown next to the score
        #[arg(long)]
        grade: Option<String>,

        /// Improvement since the previous version, in percent
        #[arg(long, allow_hyphen_values = true)]
        improvement: Option<f64>,

        /// Export settings JSON file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show format guides
    Guide {
        /// Format to describe (all formats if omitted)
        #[arg(value_parser = parse_format)]
        format: Option<ExportFormat>,

        /// Guide catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown format '{}' (expected pdf, word, or markdown)", s))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Export {
            input,
            format,
            out_dir,
            title,
            service,
            file_name,
            score,
            grade,
            improvement,
            config,
        } => {
            let metadata = (score.is_some() || grade.is_some() || improvement.is_some()).then(|| {
                ExportMetadata {
                    score,
                    grade,
                    improvement_percent: improvement,
                }
            });
            let options = ExportOptions {
                title,
                service_name: service,
                file_name: file_name.or_else(|| default_file_stem(&input)),
                metadata,
            };

            let settings = load_settings(config.as_deref()).await?;
            let content = read_input(&input)?;
            let orchestrator = ExportOrchestrator::new(&settings, Arc::new(FileSink::new(&out_dir)));

            if orchestrator.generate_format(&content, format, &options).await? {
                println!(
                    "{}",
                    out_dir
                        .join(format!("{}.{}", options.file_stem(), format.extension()))
                        .display()
                );
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Nothing exported: input is empty");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Guide { format, catalog } => {
            let mut repo = match catalog {
                Some(path) => GuideRepository::from_file(path),
                None => GuideRepository::builtin(),
            };
            repo.load().await?;

            let guides: Vec<_> = repo
                .guides()
                .iter()
                .filter(|g| format.map_or(true, |f| g.format == f))
                .collect();
            if guides.is_empty() {
                eprintln!("No guide available");
                return Ok(ExitCode::FAILURE);
            }
            for guide in guides {
                println!("{} ({})", guide.title, guide.format.extension());
                println!("  {}", guide.description);
                if !guide.best_for.is_empty() {
                    println!("  Best for: {}", guide.best_for.join(", "));
                }
                for tip in &guide.tips {
                    println!("  - {}", tip);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn load_settings(config: Option<&Path>) -> anyhow::Result<ExportSettings> {
    match config {
        Some(path) => {
            let mut manager = SettingsManager::with_path(path);
            manager
                .load()
                .await
                .with_context(|| format!("reading settings from {}", path.display()))?;
            Ok(manager.into_settings())
        }
        None => Ok(ExportSettings::default()),
    }
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
    }
}

/// Input file stem, used when no file name is given
fn default_file_stem(input: &Path) -> Option<String> {
    if input == Path::new("-") {
        return None;
    }
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from([
            "cv-export", "export", "cv.md", "--format", "DOCX", "--score", "82", "--improvement", "-3.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                format,
                score,
                improvement,
                out_dir,
                ..
            } => {
                assert_eq!(format, ExportFormat::Word);
                assert_eq!(score, Some(82.0));
                assert_eq!(improvement, Some(-3.5));
                assert_eq!(out_dir, PathBuf::from("."));
            }
            Commands::Guide { .. } => panic!("expected export"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["cv-export", "export", "cv.md", "--format", "html"]).is_err());
    }

    #[test]
    fn test_default_file_stem() {
        assert_eq!(default_file_stem(Path::new("notes/cv-review.md")).as_deref(), Some("cv-review"));
        assert_eq!(default_file_stem(Path::new("-")), None);
    }
}
