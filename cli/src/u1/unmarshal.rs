use clap::Args;
use creds::decoder::Decoder;
use ubuntu_one::UbuntuOneMacaroons;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the stored credentials. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let stored = read_input(config.file.as_deref())?;
    let macaroons: UbuntuOneMacaroons = stored.decode()?;

    match config.output {
        OutputFormat::Text => {
            println!("root: {}", macaroons.root());
            println!("discharge: {}", macaroons.discharge());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&macaroons)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&macaroons)?);
        }
    }

    Ok(())
}
