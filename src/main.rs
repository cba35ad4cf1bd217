use std::{fs::read_to_string, path::{Path, PathBuf}, process::ExitCode};

use clap::{Parser, ValueEnum};
use log::{error, info};
use typechecker::{check_source, format_error};

/// Report format
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    /// Indented proof tree
    #[default]
    Text,
    /// One JSON object per file
    Json,
}

/// Type checks Java-subset source files and explains the verdict as a proof tree
#[derive(Parser)]
#[command(name = "typechecker")]
#[command(version)]
struct Cli {
    /// Source files to check
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the verdict for each file
    #[arg(short, long)]
    quiet: bool,
}

/// What checking one file came to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Outcome {
    WellTyped,
    IllTyped,
    Fatal,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::WellTyped => ExitCode::SUCCESS,
            Outcome::IllTyped => ExitCode::from(1),
            Outcome::Fatal => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = cli
        .inputs
        .iter()
        .map(|input| check_file(input, cli.format, cli.quiet))
        .max()
        .unwrap_or(Outcome::WellTyped);

    outcome.exit_code()
}

fn check_file(input: &Path, format: Format, quiet: bool) -> Outcome {
    let file_name = input.display().to_string();
    info!("checking {}", file_name);

    let source = match read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", file_name, err);
            eprintln!("Error: could not read {}: {}", file_name, err);
            return Outcome::Fatal;
        }
    };

    let (_, result) = match check_source(&source, &file_name) {
        Ok(checked) => checked,
        Err(err) => {
            match format {
                Format::Text => eprint!("{}", format_error(&err, &source)),
                Format::Json => println!(
                    "{}",
                    serde_json::json!({
                        "file": file_name,
                        "error": err.get_error_name(),
                        "message": err.to_string(),
                        "position": err.get_position().0,
                    })
                ),
            }
            return Outcome::Fatal;
        }
    };

    let verdict = if result.well_typed { "well typed" } else { "ill typed" };
    match format {
        Format::Text => {
            println!("{}: {}", file_name, verdict);
            if !quiet {
                print!("{}", result.root);
            }
        }
        Format::Json => {
            let report = if quiet {
                serde_json::json!({ "file": file_name, "well_typed": result.well_typed })
            } else {
                serde_json::json!({ "file": file_name, "result": result })
            };
            println!("{}", report);
        }
    }

    if result.well_typed {
        Outcome::WellTyped
    } else {
        Outcome::IllTyped
    }
}
