use anyhow::Result;
use env_logger::Env;
use ar_quiz_maker::{
    cli::Cli,
    generator::JavaGenerator,
    shim::run,
};

fn main() -> Result<()> {

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::args();
    let config = cli.config()?;
    let generator = JavaGenerator::new(&config)?;

    run(&config, &cli.input, &generator)?;

    Ok(())

}
