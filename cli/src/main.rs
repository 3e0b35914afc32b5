use clap::{Parser, Subcommand};

mod candid;
mod error;
mod output;
mod u1;
mod utils;

use error::Result;

use crate::candid::CandidCommands;
use crate::u1::U1Commands;

#[derive(Parser)]
#[command(name = "creds")]
#[command(about = "Serialize and deserialize stored macaroon credentials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Candid macaroon credentials
    Candid {
        #[command(subcommand)]
        command: CandidCommands,
    },
    /// Ubuntu One root and discharge macaroons
    U1 {
        #[command(subcommand)]
        command: U1Commands,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Candid { command } => match command {
            CandidCommands::Marshal { config } => {
                candid::marshal::execute(config)?;
            }
            CandidCommands::Unmarshal { config } => {
                candid::unmarshal::execute(config)?;
            }
        },
        Commands::U1 { command } => match command {
            U1Commands::Marshal { config } => {
                u1::marshal::execute(config)?;
            }
            U1Commands::Unmarshal { config } => {
                u1::unmarshal::execute(config)?;
            }
            U1Commands::Refresh { config } => {
                u1::refresh::execute(config)?;
            }
        },
    }

    Ok(())
}
