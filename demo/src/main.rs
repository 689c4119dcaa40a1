//! Command-line demonstrations of the `chiolab` matrices and lists

mod lists;
mod matrices;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "chiolab-demo", version, about = "Matrices, Chio determinants and linked lists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Demo>,

    /// Seed for the random matrix cross-check
    #[arg(long, global = true, default_value_t = 1)]
    seed: u64,

    /// Size of the random matrix used by the cross-check
    #[arg(long, global = true, default_value_t = 6)]
    size: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Demo {
    /// Transpose, add and multiply the sample matrices
    Matrix,
    /// Chio determinants of the reference matrices and a random cross-check
    Chio,
    /// Persistent list operations on the sample universities
    Persistent,
    /// Mutable list operations on the sample universities
    Mutable,
    /// Run every demonstration
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::default()
        .filter_level(level)
        .parse_env(env_logger::Env::default())
        .init();

    let demo = cli.command.unwrap_or(Demo::All);
    log::info!("running {} demonstration(s)", if demo == Demo::All { "all" } else { "one" });

    if matches!(demo, Demo::Matrix | Demo::All) {
        matrices::arithmetic()?;
    }
    if matches!(demo, Demo::Chio | Demo::All) {
        matrices::chio(cli.seed, cli.size)?;
    }
    if matches!(demo, Demo::Persistent | Demo::All) {
        lists::persistent()?;
    }
    if matches!(demo, Demo::Mutable | Demo::All) {
        lists::mutable()?;
    }
    Ok(())
}
