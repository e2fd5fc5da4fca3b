mod report;
mod runner;

pub use runner::{run_initial_point, InitialPointOutcome};

use self::report::{report_summary, InitialPointReport};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use initial_point::config::{Args, Config};
use initial_point::io::{build_grouped_property, setup_output, write_yaml_report};
use initial_point::IndexConvention;
use std::fs;
use std::sync::Arc;
use tracing::info;

pub struct InitialPointApplication {
    args: Args,
    config: Config,
}

impl InitialPointApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded from: {}", self.args.config_file);

        let method = MethodSelection::determine(&self.args, &self.config)?;
        let grouped_property = build_grouped_property(&self.config.system)
            .wrap_err("Unable to build the molecular properties")?;

        let outcome = run_initial_point(method, &self.config, Arc::new(grouped_property))?;
        report_summary(&outcome);

        if let Some(path) = &self.args.result {
            write_yaml_report(path, &InitialPointReport::from(&outcome))?;
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MethodSelection {
    Mp2 {
        threshold: f64,
        index_convention: IndexConvention,
    },
    Hf,
}

impl MethodSelection {
    fn determine(args: &Args, config: &Config) -> Result<Self> {
        let method = args.method.clone().unwrap_or_else(|| config.method());

        match method.to_lowercase().as_str() {
            "mp2" => {
                let threshold = args.threshold.unwrap_or_else(|| config.threshold());
                let index_convention = match &args.index_convention {
                    Some(convention) => convention.parse()?,
                    None => config.index_convention(),
                };
                Ok(MethodSelection::Mp2 {
                    threshold,
                    index_convention,
                })
            }
            "hf" => Ok(MethodSelection::Hf),
            other => Err(eyre!("Unknown initial point method: {} (expected mp2 or hf)", other)),
        }
    }
}
