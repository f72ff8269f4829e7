use anyhow::Result;
use markdown_lumen_cli::{parse_args, run};
use markdown_lumen_config::Config;
use std::{env, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let invocation = parse_args(env::args().skip(1))?;

    let config = Config::load()?.unwrap_or_default();
    log::debug!("Config: {config:?}");

    run(&invocation, &config)?;
    Ok(())
}
