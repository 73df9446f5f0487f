use std::path::Path;

use clap::{Parser, Subcommand};

use elb_cli::commands::convert_ops::OutputOptions;
use elb_cli::commands::{config_ops, convert_ops};
use elb_cli::settings;

#[derive(Parser)]
#[command(name = "elbtool", about = "Convert between Arabic and Elbonian numerals")]
struct Cli {
    /// Path to a custom settings TOML file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Directory for JSONL trace output (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a number given in either form and print both
    Convert {
        /// Arabic integer (1-2999) or Elbonian numeral
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Include the per-symbol value breakdown
        #[arg(long)]
        breakdown: bool,
    },
    /// Show the per-symbol value breakdown of a number
    Explain {
        /// Arabic integer (1-2999) or Elbonian numeral
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a numeral is well-formed (exit status 1 if not)
    Check {
        /// Elbonian numeral
        #[arg(allow_hyphen_values = true)]
        numeral: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the symbol table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    elbonian::init_tracing(cli.trace_dir.as_deref().map(Path::new));

    if let Some(path) = &cli.config {
        config_ops::settings_install(path);
    }
    let output = &settings::settings().output;

    match cli.command {
        Command::Convert {
            input,
            json,
            breakdown,
        } => convert_ops::convert_cmd(&input, OutputOptions::resolve(json, breakdown, output)),
        Command::Explain { input, json } => {
            convert_ops::explain_cmd(&input, OutputOptions::resolve(json, false, output))
        }
        Command::Check { numeral, json } => {
            convert_ops::check_cmd(&numeral, OutputOptions::resolve(json, false, output))
        }
        Command::Table { json } => {
            convert_ops::table_cmd(OutputOptions::resolve(json, false, output))
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
