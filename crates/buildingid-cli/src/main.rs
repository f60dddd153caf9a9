use anyhow::Context;
use buildingid_core::grouping::{group_by_building, parse_records};
use buildingid_core::{check_identifier, normalize_for_matching};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// buildingid — building identifier normalization and matching
///
/// Normalize addresses, validate identifiers, and group registrations by building.
#[derive(Parser)]
#[command(name = "buildingid", version, about, long_about = None)]
struct Cli {
    /// Suppress human-readable output (exit code only)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the identifier for an address and postcode
    Normalize {
        /// Building address, without the flat number
        #[arg(allow_hyphen_values = true)]
        address: String,
        /// Postcode, in any casing or spacing
        #[arg(allow_hyphen_values = true)]
        postcode: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a string is a well-formed identifier
    Validate {
        #[arg(allow_hyphen_values = true)]
        identifier: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group registrations by building
    Group {
        /// JSON file holding an array of {"address", "postcode"} records
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let quiet = cli.quiet;

    let exit_code = match cli.command {
        Commands::Normalize {
            address,
            postcode,
            json,
        } => cmd_normalize(&address, &postcode, json, quiet),
        Commands::Validate { identifier, json } => cmd_validate(&identifier, json, quiet),
        Commands::Group { file, json } => match cmd_group(&file, json, quiet) {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(error = ?e, "group failed");
                eprintln!("{} {:#}", "error:".red().bold(), e);
                EXIT_ERROR
            }
        },
        Commands::Version => {
            println!(
                "buildingid {} (buildingid-core {})",
                env!("CARGO_PKG_VERSION"),
                buildingid_core::VERSION
            );
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

fn cmd_normalize(address: &str, postcode: &str, json: bool, quiet: bool) -> i32 {
    let identifier = normalize_for_matching(address, postcode);
    let valid = !identifier.is_empty();
    tracing::debug!(%identifier, valid, "normalized address");

    if json {
        let output = serde_json::json!({
            "address": address,
            "postcode": postcode,
            "identifier": identifier,
            "valid": valid,
        });
        println!("{}", output);
    } else if !quiet {
        if valid {
            println!("{}", identifier);
        } else {
            eprintln!(
                "{} address and postcode normalize to an empty identifier",
                "error:".red().bold()
            );
        }
    }

    if valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn cmd_validate(identifier: &str, json: bool, quiet: bool) -> i32 {
    let result = check_identifier(identifier);
    tracing::debug!(identifier, problems = result.diagnostics.len(), "checked identifier");

    if json {
        let output = serde_json::json!({
            "identifier": identifier,
            "valid": result.is_valid(),
            "diagnostics": result.diagnostics,
        });
        println!("{}", output);
    } else if !quiet {
        if result.is_valid() {
            println!("{} {}", "✓".green().bold(), "valid".green());
        } else {
            for diag in &result.diagnostics {
                eprintln!("{}", diag.to_string().red());
            }
            eprintln!(
                "{} {} problem(s) found",
                "✗".red().bold(),
                result.diagnostics.len()
            );
        }
    }

    if result.is_valid() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn cmd_group(file: &Path, json: bool, quiet: bool) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let records =
        parse_records(&text).with_context(|| format!("cannot parse {}", file.display()))?;

    let groups = group_by_building(&records);
    tracing::info!(
        records = records.len(),
        groups = groups.groups.len(),
        unmatched = groups.unmatched.len(),
        "grouped registrations"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if !quiet {
        for group in &groups.groups {
            let label = if group.records.len() > 1 {
                group.identifier.as_str().yellow().bold()
            } else {
                group.identifier.as_str().normal()
            };
            println!("{}  {:?}", label, group.records);
        }
        if !groups.unmatched.is_empty() {
            println!("{}  {:?}", "(unmatched)".dimmed(), groups.unmatched);
        }
    }

    Ok(EXIT_OK)
}
