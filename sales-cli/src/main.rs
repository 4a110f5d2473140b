//! Sales CLI - Command line tool for reporting over a paper sales CSV.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sales-cli",
    version,
    about = "Paper sales analytics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sales_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sales_cmd::run(cli.command)
}
