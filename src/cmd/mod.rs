mod graph;
mod schema;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "model-viz")]
#[command(version)]
#[command(about = "Render ORM model associations as Mermaid entity-relationship diagrams", long_about = None)]
pub struct Cli {
    /// Log level: off, error, warn, info, debug, trace (default: RUST_LOG, else warn)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an ER diagram from a model manifest exported by the host application
    Graph {
        /// Model manifest file (.json, .yml, .yaml) or `-` for stdin
        manifest: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: mermaid, html, json (inferred from --output if not specified)
        #[arg(short, long)]
        format: Option<String>,

        /// Diagram mode: relations (default) or columns
        #[arg(short, long)]
        mode: Option<String>,

        /// Manifest format: json or yaml (inferred from extension if not specified)
        #[arg(long)]
        input_format: Option<String>,

        /// Only include models matching these globs (comma-separated, e.g. "Billing::*")
        #[arg(long)]
        only: Option<String>,

        /// Exclude models matching these globs (comma-separated)
        #[arg(short, long)]
        exclude: Option<String>,

        /// Page title for HTML output
        #[arg(long)]
        title: Option<String>,

        /// YAML config file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output JSON instead of a diagram (same as --format json)
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of the model manifest format
    Schema,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Graph {
            manifest,
            output,
            format,
            mode,
            input_format,
            only,
            exclude,
            title,
            config,
            json,
        } => graph::run(
            manifest,
            output,
            format,
            mode,
            input_format,
            only,
            exclude,
            title,
            config,
            json,
        ),
        Commands::Schema => schema::run(),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "model-viz", &mut io::stdout());
            Ok(())
        }
    }
}
