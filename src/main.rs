use anyhow::{Context, Result};
use clap::crate_version;
use env_logger::Builder;
use log::LevelFilter;

use genet;
use genet::genet_framework::genet_command::GENET_COMMANDS;

pub fn main() -> Result<()> {

    //enable debugging
    Builder::new().filter_level(LevelFilter::Trace).init();

    let command = GENET_COMMANDS.build_cli();
    let command = command.version(crate_version!());
    let cli_matches = command.get_matches();

    log::info!("Genet starting");

    GENET_COMMANDS.execute(&cli_matches).context("Executing Genet")
}
