use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Date and age calculators.
#[derive(Parser)]
#[command(name = "datewise", version, about = "Date and age calculators")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./datewise.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this date (YYYY-MM-DD) as today instead of the local date.
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Age, totals, next birthday and zodiac sign for a birth date.
    Age(AgeArgs),
    /// Calendar difference between two dates.
    Diff(PairArgs),
    /// Elapsed time between two date-times (YYYY-MM-DDTHH:MM[:SS]).
    Time(PairArgs),
    /// Week of year, day of year and quarter for a date.
    Week(DateArg),
    /// Compare the ages of two people.
    Compare(PairArgs),
    /// How long ago (or ahead) a date is.
    Historical(DateArg),
    /// Countdown to a date.
    Countdown(DateArg),
    /// Continuously print time alive since a birth date.
    Live(LiveArgs),
}

#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD).
    pub birth_date: String,

    /// Start the live counter after printing the age.
    #[arg(long)]
    pub live: bool,

    /// Stop the live counter after this many updates.
    #[arg(long)]
    pub ticks: Option<u64>,
}

#[derive(clap::Args)]
pub struct PairArgs {
    /// First value.
    pub first: String,
    /// Second value.
    pub second: String,
}

#[derive(clap::Args)]
pub struct DateArg {
    /// Date (YYYY-MM-DD).
    pub date: String,
}

#[derive(clap::Args)]
pub struct LiveArgs {
    /// Birth date (YYYY-MM-DD).
    pub birth_date: String,

    /// Stop after this many updates (default: run until Ctrl-C).
    #[arg(long)]
    pub ticks: Option<u64>,
}
