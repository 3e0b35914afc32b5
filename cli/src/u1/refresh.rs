use clap::Args;
use creds::decoder::Decoder;
use ubuntu_one::UbuntuOneMacaroons;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the stored credentials. If not specified, reads from stdin
    file: Option<String>,

    /// The new discharge macaroon
    #[arg(long)]
    discharge: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let stored = read_input(config.file.as_deref())?;
    let current: UbuntuOneMacaroons = stored.decode()?;
    log::info!("replacing discharge macaroon");
    println!("{}", current.with_discharge(config.discharge).marshal());
    Ok(())
}
