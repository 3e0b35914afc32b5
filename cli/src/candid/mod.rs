pub(crate) mod marshal;
pub(crate) mod unmarshal;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CandidCommands {
    /// Serialize a Candid macaroon for storage
    Marshal {
        #[command(flatten)]
        config: marshal::Config,
    },
    /// Read back a stored Candid macaroon, in any known form
    Unmarshal {
        #[command(flatten)]
        config: unmarshal::Config,
    },
}
