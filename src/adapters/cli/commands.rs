//! CLI Command Definitions
//!
//! clap surface for the rule guide: list accounts, show a phase's rules,
//! print an account summary. Rendering itself lives in `render`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::content::Phase;

/// Prop-firm evaluation rule guide
#[derive(Parser, Debug)]
#[command(
    name = "prop-rules",
    version = env!("CARGO_PKG_VERSION"),
    about = "Prop-firm evaluation rule guide",
    long_about = "Renders the rule set of a prop-trading evaluation program: account \
                  configurations, derived thresholds, and per-phase rule cards."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available account configurations
    Accounts(AccountsCmd),

    /// Show the rule cards for an account and phase
    Show(ShowCmd),

    /// Show the header figures and quick reference for an account
    Summary(SummaryCmd),
}

#[derive(Parser, Debug)]
pub struct AccountsCmd {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowCmd {
    /// Account identifier (e.g. 100k, 100k-static)
    #[arg(short, long, default_value = "100k")]
    pub account: String,

    /// Progression phase
    #[arg(short, long, value_enum, default_value = "pa")]
    pub phase: PhaseArg,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SummaryCmd {
    /// Account identifier (e.g. 100k, 100k-static)
    #[arg(short, long, default_value = "100k")]
    pub account: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// CLI spelling of the progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    /// Phase 1: Evaluation
    Eval,
    /// Phase 2: Performance Account
    Pa,
    /// Phase 3: Live Prop
    Live,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Eval => Phase::Evaluation,
            PhaseArg::Pa => Phase::PerformanceAccount,
            PhaseArg::Live => Phase::Live,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        CliApp::command().debug_assert();
    }

    #[test]
    fn test_phase_arg_mapping() {
        assert_eq!(Phase::from(PhaseArg::Eval), Phase::Evaluation);
        assert_eq!(Phase::from(PhaseArg::Pa), Phase::PerformanceAccount);
        assert_eq!(Phase::from(PhaseArg::Live), Phase::Live);
    }

    #[test]
    fn test_show_defaults() {
        let app = CliApp::try_parse_from(["prop-rules", "show"]).unwrap();
        match app.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.account, "100k");
                assert_eq!(cmd.phase, PhaseArg::Pa);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
