pub(crate) mod marshal;
pub(crate) mod refresh;
pub(crate) mod unmarshal;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum U1Commands {
    /// Serialize a root and discharge macaroon pair for storage
    Marshal {
        #[command(flatten)]
        config: marshal::Config,
    },
    /// Read back a stored Ubuntu One macaroon pair
    Unmarshal {
        #[command(flatten)]
        config: unmarshal::Config,
    },
    /// Replace the discharge macaroon of a stored pair
    Refresh {
        #[command(flatten)]
        config: refresh::Config,
    },
}
