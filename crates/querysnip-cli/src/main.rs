//! querysnip CLI.
//!
//! Developer tool around the snippet generator: feed it a query description
//! as JSON, get back the fluent call chain to paste into console code.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use querysnip::domain::FilterOperator;
use querysnip::QueryDescription;

#[derive(Parser)]
#[command(name = "querysnip")]
#[command(about = "Generate fluent-API code snippets from console query JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a snippet from a query description
    Generate {
        /// Input JSON file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Write the snippet to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a query description without generating code
    Check {
        /// Input JSON file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// List the search filter operators and their signs
    Operators,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => generate(input, output),
        Commands::Check { input } => check(input),
        Commands::Operators => {
            operators();
            Ok(())
        }
    }
}

fn generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let raw = read_input(input)?;
    let snippet = querysnip::generate(&raw)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &snippet)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} snippet written to {}",
                style("✓").green().bold(),
                style(path.display()).cyan()
            );
        }
        None => println!("{snippet}"),
    }
    Ok(())
}

fn check(input: Option<PathBuf>) -> Result<()> {
    let raw = read_input(input)?;
    let description = QueryDescription::parse(&raw)?;

    let joins = description.join.map_or(0, |j| j.len());
    eprintln!(
        "{} valid query description ({} join {})",
        style("✓").green().bold(),
        joins,
        if joins == 1 { "entry" } else { "entries" }
    );
    Ok(())
}

fn operators() {
    println!("{}", style("operator      sign").dim());
    for op in FilterOperator::ALL {
        println!("{:<13} {}", op.as_str(), op.sign());
    }
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .into_diagnostic()
                .wrap_err("Failed to read stdin")?;
            Ok(raw)
        }
    }
}
