mod cli;
mod logging;

use std::io::Write;
use std::ops::ControlFlow;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;
use serde::Serialize;

use datewise::config::Config;
use datewise::{
    age, compare, countdown, diff, historical, input, live, render, time_between, week,
};

use crate::cli::{Cli, Command};

struct Session {
    config: Config,
    json: bool,
}

impl Session {
    fn emit<T: Serialize>(&self, report: &T, card: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            let text =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{text}");
        } else {
            print!("{}", card(report));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let today = match cli.today.as_deref() {
        Some(text) => input::parse_date(text).context("Invalid --today")?,
        None => Local::now().date_naive(),
    };
    let session = Session {
        json: cli.json || config.json,
        config,
    };
    tracing::debug!(%today, json = session.json, "starting");

    match cli.command {
        Command::Age(args) => {
            let birth = input::parse_birth_date(&args.birth_date, today)?;
            let report = age::age_report(birth, today, session.config.lifespan_years);
            session.emit(&report, render::age_card)?;
            if args.live {
                run_live(&session, birth, args.ticks).await?;
            }
        }
        Command::Diff(args) => {
            let a = input::parse_date(&args.first)?;
            let b = input::parse_date(&args.second)?;
            session.emit(&diff::diff_report(a, b), render::diff_card)?;
        }
        Command::Time(args) => {
            let a = input::parse_datetime(&args.first)?;
            let b = input::parse_datetime(&args.second)?;
            session.emit(&time_between::time_between(a, b), render::time_card)?;
        }
        Command::Week(args) => {
            let date = input::parse_date(&args.date)?;
            session.emit(&week::week_info(date), render::week_card)?;
        }
        Command::Compare(args) => {
            let first = input::parse_birth_date(&args.first, today).context("Person 1")?;
            let second = input::parse_birth_date(&args.second, today).context("Person 2")?;
            session.emit(
                &compare::compare_ages(first, second, today),
                render::compare_card,
            )?;
        }
        Command::Historical(args) => {
            let date = input::parse_date(&args.date)?;
            session.emit(
                &historical::historical_report(date, today),
                render::historical_card,
            )?;
        }
        Command::Countdown(args) => {
            let target = input::parse_date(&args.date)?;
            session.emit(&countdown::countdown(target, today), render::countdown_card)?;
        }
        Command::Live(args) => {
            let birth = input::parse_birth_date(&args.birth_date, today)?;
            run_live(&session, birth, args.ticks).await?;
        }
    }

    Ok(())
}

async fn run_live(session: &Session, birth: NaiveDate, ticks: Option<u64>) -> Result<()> {
    let birth = birth.and_time(NaiveTime::MIN);
    let period = Duration::from_millis(session.config.live.tick_millis);
    let json = session.json;
    let mut stdout = std::io::stdout();
    let mut write_error = None;

    let emitted = live::run_live(
        birth,
        period,
        ticks,
        || Local::now().naive_local(),
        |totals| {
            let line = if json {
                serde_json::to_string(totals).unwrap_or_default() + "\n"
            } else {
                format!("\r{}", render::live_line(totals))
            };
            match stdout.write_all(line.as_bytes()).and_then(|_| stdout.flush()) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => {
                    write_error = Some(e);
                    ControlFlow::Break(())
                }
            }
        },
        tokio::signal::ctrl_c(),
    )
    .await
    .context("Failed to listen for Ctrl-C")?;

    tracing::info!(emitted, "live counter stopped");
    if let Some(e) = write_error {
        return Err(e).context("Failed to write live counter");
    }
    if !json {
        writeln!(stdout).context("Failed to write live counter")?;
    }
    Ok(())
}
