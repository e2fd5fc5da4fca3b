//! Command-line argument parsing for initial point calculations

use clap::Parser;

/// MP2 (or HF) initial point of a UCC ansatz from a YAML system description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override initial point method (mp2 or hf)
    #[arg(long)]
    pub method: Option<String>,

    /// Override amplitude threshold
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Override index convention (occupied_modulo or spatial_modulo)
    #[arg(long)]
    pub index_convention: Option<String>,

    /// Write a YAML report with energies and parameters to this file
    #[arg(short, long)]
    pub result: Option<String>,
}
