use std::io;

use anyhow::Result;
use clap::Parser;
use dynvec_cli::{Config, Session};
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("DYNVEC_LOG", "warn"))
        .init();

    let config = Config::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()?;

    Ok(())
}
