//! Battleplan -- finds a line-up of troop groups that beats an opponent.
//!
//! Reads the own army and the opponent army from stdin, one line each, in
//! `Class#Count;Class#Count;...` notation, then prints the winning
//! arrangement and its battle log.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use battleplan::board::STANDARD_RULES;
use battleplan::config::PlannerConfig;
use battleplan::protocol::{parse_force, write_json, write_report};
use battleplan::search::search_with;

#[derive(Parser)]
#[command(name = "battleplan")]
#[command(about = "Find an arrangement of your army that wins a majority of battles")]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads for the search
    #[arg(short, long)]
    threads: Option<usize>,

    /// Search time budget in milliseconds
    #[arg(long)]
    movetime: Option<u64>,

    /// Maximum number of orderings to evaluate
    #[arg(long)]
    max_orderings: Option<u64>,

    /// Output the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None => PlannerConfig::default(),
        };
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if self.movetime.is_some() {
            config.movetime_ms = self.movetime;
        }
        if self.max_orderings.is_some() {
            config.max_orderings = self.max_orderings;
        }
        config.json |= self.json;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = cli.planner_config()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    writeln!(out, "Battle Strategy Planner")?;
    writeln!(out, "Enter your army:")?;
    out.flush()?;
    let own_line = lines.next().transpose()?.unwrap_or_default();
    writeln!(out, "Enter opponent army:")?;
    out.flush()?;
    let opp_line = lines.next().transpose()?.unwrap_or_default();

    let parsed = parse_force(&own_line).and_then(|own| Ok((own, parse_force(&opp_line)?)));
    let (own, opponent) = match parsed {
        Ok(forces) => forces,
        Err(e) => {
            warn!("rejected army input: {e}");
            writeln!(
                out,
                "Invalid input format. Please follow Class#Count;Class#Count;..."
            )?;
            out.flush()?;
            return Ok(());
        }
    };

    let outcome = search_with(
        &own,
        &opponent,
        &STANDARD_RULES,
        &config.search_config(),
        &AtomicBool::new(false),
    );

    if config.json {
        write_json(&mut out, &outcome).context("failed to write JSON outcome")?;
    } else {
        write_report(&mut out, &outcome, &opponent).context("failed to write report")?;
    }
    Ok(())
}
