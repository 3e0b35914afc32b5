use candid::CandidCredential;
use clap::Args;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct Config {
    /// The Candid macaroon
    value: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    println!("{}", CandidCredential::new(config.value).marshal());
    Ok(())
}
