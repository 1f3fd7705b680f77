//! # popdep CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use popdep_cli::{check, query};

/// Population by French department, from the INSEE estimates CSV.
#[derive(Parser, Debug)]
#[command(name = "popdep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print every listed department.
    List(query::ListArgs),
    /// Print one department by code.
    Get(query::GetArgs),
    /// Print national totals.
    France(query::FranceArgs),
    /// Load the file and report its header and row counts.
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List(args) => {
            let table = args.data.load()?;
            query::list(&table, &mut out, args.data.compact)
        }
        Commands::Get(args) => {
            let table = args.data.load()?;
            query::get(&table, &args.code, &mut out, args.data.compact)
        }
        Commands::France(args) => {
            let table = args.data.load()?;
            query::france(&table, &mut out, args.data.compact)
        }
        Commands::Check(args) => check::run(&args, &mut out),
    }
}
