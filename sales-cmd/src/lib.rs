//! Command implementations for the sales CLI.
//!
//! Provides subcommands for aggregating a sales CSV over a date range
//! and for inspecting the dataset's regions and date bounds.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate sales over a date range and print a report
    Report {
        /// Path to the sales CSV (Date,Region,Color,Units,Sales)
        #[arg(short = 's', long)]
        sales_csv: String,

        /// Start of the date range (YYYY-MM-DD); defaults to the dataset minimum
        #[arg(long)]
        start_date: Option<String>,

        /// End of the date range (YYYY-MM-DD); defaults to the dataset maximum
        #[arg(long)]
        end_date: Option<String>,

        /// Region for the color breakdown; defaults to the first region in the file
        #[arg(long)]
        region: Option<String>,
    },

    /// List distinct regions and the dataset date bounds
    Regions {
        /// Path to the sales CSV (Date,Region,Color,Units,Sales)
        #[arg(short = 's', long)]
        sales_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            sales_csv,
            start_date,
            end_date,
            region,
        } => report::run_report(
            &sales_csv,
            start_date.as_deref(),
            end_date.as_deref(),
            region.as_deref(),
        ),
        Command::Regions { sales_csv } => report::run_regions(&sales_csv),
    }
}
