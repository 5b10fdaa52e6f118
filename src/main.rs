use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use curation_verdict::engine::derive::derived_flags;
use curation_verdict::engine::pipeline::{ImportError, run_import, run_save_pipeline};
use curation_verdict::engine::rules::allowed_verdicts;
use curation_verdict::model::custom::{CustomFlag, CustomFlagRegistry, RegistryError};
use curation_verdict::model::flags::{FlagCategory, flag_order};
use curation_verdict::model::result::ResultRecord;
use curation_verdict::report::csv::render_results_csv;
use curation_verdict::report::json::render_results_json;

#[derive(Parser)]
#[command(name = "curation-verdict", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the built-in flag catalogue
    Flags,
    /// Validate curation results against the verdict rules
    Check {
        /// Result file (a single record or an array of records)
        #[arg(long)]
        input: PathBuf,
        /// Custom-flag registry file
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// All-or-nothing batch import of curation results
    Import {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Where to write the validated records (JSON)
        #[arg(long)]
        out: PathBuf,
    },
    /// Export validated results as CSV or JSON
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        registry: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        })
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("{failed} of {total} results failed validation")]
    ChecksFailed { failed: usize, total: usize },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Flags => {
            print_flags();
            Ok(())
        }
        Command::Check { input, registry } => {
            let records = read_records(&input)?;
            let registry = load_registry(registry.as_deref())?;
            check_records(&records, &registry)
        }
        Command::Import {
            input,
            registry,
            out,
        } => {
            let records = read_records(&input)?;
            let registry = load_registry(registry.as_deref())?;
            let imported = run_import(&records, &registry)?;
            let rendered = render_results_json(&imported).map_err(|source| CliError::Json {
                path: out.clone(),
                source,
            })?;
            write_file(&out, &rendered)?;
            println!("imported {} results", imported.len());
            Ok(())
        }
        Command::Export {
            input,
            registry,
            format,
            out,
        } => {
            let records = read_records(&input)?;
            let registry = load_registry(registry.as_deref())?;
            let rendered = match format {
                ExportFormat::Csv => render_results_csv(&records, &registry),
                ExportFormat::Json => {
                    render_results_json(&records).map_err(|source| CliError::Json {
                        path: out.clone(),
                        source,
                    })?
                }
            };
            write_file(&out, &rendered)?;
            Ok(())
        }
    }
}

fn print_flags() {
    for flag in flag_order() {
        let category = match flag.category() {
            FlagCategory::Technical => "technical",
            FlagCategory::Impact => "impact",
            FlagCategory::Comment => "comment",
        };
        let derived = if derived_flags().iter().any(|(d, _)| d == flag) {
            " (derived)"
        } else {
            ""
        };
        println!(
            "{:<40} {:<10} {:<3} {}{}",
            flag.name(),
            category,
            flag.shortcut().unwrap_or("--"),
            flag.label(),
            derived,
        );
    }
}

fn check_records(records: &[ResultRecord], registry: &CustomFlagRegistry) -> Result<(), CliError> {
    let mut failed = 0usize;
    for record in records {
        match run_save_pipeline(&record.result, registry) {
            Ok(saved) => {
                let allowed = allowed_verdicts(&saved.flags)
                    .iter()
                    .map(|v| v.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "{} {}: ok (allowed verdicts: {})",
                    record.curator, record.variant_id, allowed
                );
            }
            Err(err) => {
                failed += 1;
                println!("{} {}: {err}", record.curator, record.variant_id);
            }
        }
    }
    if failed > 0 {
        return Err(CliError::ChecksFailed {
            failed,
            total: records.len(),
        });
    }
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<ResultRecord>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let json_error = |source| CliError::Json {
        path: path.to_path_buf(),
        source,
    };
    if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ResultRecord>>(&content).map_err(json_error)
    } else {
        serde_json::from_str::<ResultRecord>(&content)
            .map(|record| vec![record])
            .map_err(json_error)
    }
}

fn load_registry(path: Option<&Path>) -> Result<CustomFlagRegistry, CliError> {
    let Some(path) = path else {
        return Ok(CustomFlagRegistry::new());
    };
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let flags =
        serde_json::from_str::<Vec<CustomFlag>>(&content).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(CustomFlagRegistry::from_flags(flags)?)
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
