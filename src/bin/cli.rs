//! hashkv CLI
//!
//! Command-line interface for inspecting and mutating a store directory.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashkv::{Config, Result, Store};

/// hashkv CLI
#[derive(Parser, Debug)]
#[command(name = "hashkv-cli")]
#[command(about = "CLI for the hashkv file-backed key-value store")]
struct Args {
    /// Store directory (created if absent)
    #[arg(short, long, default_value = "./hashkv_data")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// The key to read
        key: String,
    },

    /// Store a value under a key
    Set {
        /// The key to write
        key: String,

        /// The value to store
        value: String,
    },

    /// Delete the value stored under a key
    Del {
        /// The key to delete
        key: String,
    },

    /// Check whether a key has a stored value
    Has {
        /// The key to check
        key: String,
    },

    /// Delete every entry in the store
    Clear,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let store = Store::open(Config::builder().dir(&args.dir).build())?;

    match args.command {
        Commands::Get { key } => {
            let value = store.get(&key)?;
            io::stdout().write_all(&value)?;
            println!();
        }
        Commands::Set { key, value } => {
            store.put(&key, value.into_bytes())?;
        }
        Commands::Del { key } => {
            store.remove(&key)?;
        }
        Commands::Has { key } => {
            println!("{}", store.contains(&key)?);
        }
        Commands::Clear => {
            store.clear()?;
        }
    }

    store.close();
    Ok(())
}
