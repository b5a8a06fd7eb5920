//! This crate contains the source code for the binary of the mazerunner maze solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazerunner::{init_logging, App, Cli};

fn main() -> Result<()> {
    install()?;
    init_logging()?;

    App::from(Cli::parse()).run(&mut io::stdout().lock())
}
