//! Prop Rules - Prop-Firm Evaluation Rule Guide CLI
//!
//! Renders account configurations, derived thresholds, and per-phase rule
//! cards for a prop-trading evaluation program.

mod adapters;
mod content;
mod domain;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::cli::{
    render_accounts, render_rules, render_summary, AccountsCmd, CliApp, Command, ShowCmd,
    SummaryCmd,
};
use crate::content::{
    generate_rules, phase_overview, quick_reference, AccountSummary, Phase,
};
use crate::domain::{derive, lookup, ACCOUNT_CONFIGS};

fn main() -> Result<()> {
    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Accounts(cmd) => accounts_command(cmd),
        Command::Show(cmd) => show_command(cmd),
        Command::Summary(cmd) => summary_command(cmd),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
}

fn accounts_command(cmd: AccountsCmd) -> Result<()> {
    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(ACCOUNT_CONFIGS)
                .context("Failed to serialize account table")?
        );
    } else {
        print!("{}", render_accounts(ACCOUNT_CONFIGS));
    }
    Ok(())
}

fn show_command(cmd: ShowCmd) -> Result<()> {
    let cfg = lookup(&cmd.account).context("Account lookup failed")?;
    let derived = derive(cfg);
    let phase: Phase = cmd.phase.into();
    tracing::debug!(account = cfg.id, ?phase, "generating rule cards");

    let rules = generate_rules(phase, cfg, &derived);
    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rules).context("Failed to serialize rule cards")?
        );
    } else {
        print!("{}", render_rules(&phase_overview(phase, cfg), &rules));
    }
    Ok(())
}

fn summary_command(cmd: SummaryCmd) -> Result<()> {
    let cfg = lookup(&cmd.account).context("Account lookup failed")?;
    let derived = derive(cfg);

    let summary = AccountSummary::from_config(cfg);
    let reference = quick_reference(cfg, &derived);
    if cmd.json {
        let body = serde_json::json!({
            "summary": summary,
            "quick_reference": reference,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).context("Failed to serialize summary")?
        );
    } else {
        print!("{}", render_summary(&summary, &reference));
    }
    Ok(())
}
