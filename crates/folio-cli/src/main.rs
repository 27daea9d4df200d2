use anyhow::Result;
use clap::Parser;

use folio_cli::{Cli, log_level, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let output = run(cli.command)?;
    println!("{output}");
    Ok(())
}
