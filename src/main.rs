//! Initial Point Command-Line Interface
//!
//! Computes the starting parameters of a UCC ansatz for a molecular system
//! described in a YAML configuration file.

use color_eyre::eyre::Result;

mod app;

use app::InitialPointApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    InitialPointApplication::from_cli()?.run()
}
