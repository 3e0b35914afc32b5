use clap::Args;
use ubuntu_one::UbuntuOneMacaroons;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct Config {
    /// The root macaroon
    #[arg(long)]
    root: String,

    /// The discharge macaroon
    #[arg(long)]
    discharge: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let macaroons = UbuntuOneMacaroons::new(config.root, config.discharge);
    println!("{}", macaroons.marshal());
    Ok(())
}
