use clap::Parser;
use anyhow::{ Context, Result, };
use crate::config::Config;
use std::path::PathBuf;




/// AR Quiz Maker: turn a quiz file into an html page under `outputs/`
#[derive(Debug, Parser)]
#[command(about)]
pub struct Cli {
    /// input quiz file
    pub input: PathBuf,
    /// json file overriding the java binary, classpath, main class or strictness
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// directory the generated page is moved into [default: outputs]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn args() -> Self {
        Cli::parse()
    }

    pub fn config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())
            .context("loading configuration")?;
        Ok(config.with_output_dir(self.output_dir.clone()))
    }
}
