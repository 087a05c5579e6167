use anyhow::Result;
use clap::Parser;
use tripnorm::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
