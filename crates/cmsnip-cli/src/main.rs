use anyhow::Result;
use clap::Parser;

use cmsnip::RealEnv;
use cmsnip_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let output = cmsnip_cli::run(&cli, &RealEnv)?;
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}
