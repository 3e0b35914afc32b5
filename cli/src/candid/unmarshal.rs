use candid::CandidCredential;
use clap::Args;
use creds::decoder::Decoder;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the stored credentials. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let stored = read_input(config.file.as_deref())?;
    let credential: CandidCredential = stored.decode()?;
    println!("{credential}");
    Ok(())
}
