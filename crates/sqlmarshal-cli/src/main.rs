use clap::Parser;
use sqlmarshal_cli::{init_tracing, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    init_tracing(&config);

    println!("{}", cli.run(&config)?);
    Ok(())
}
