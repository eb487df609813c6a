//! CLI Adapter
//!
//! The crate's own rendering surface: clap command definitions and a
//! plain-text renderer over the content layer.

pub mod commands;
pub mod render;

pub use commands::{AccountsCmd, CliApp, Command, PhaseArg, ShowCmd, SummaryCmd};
pub use render::{render_accounts, render_rules, render_summary};
