#![allow(dead_code, unused_imports, unused_variables)]
//! Prop Rules - Prop-Firm Evaluation Rule Guide Library
//!
//! A pure, stateless computation library describing the rule set of a
//! prop-trading evaluation program: account configurations, derived
//! thresholds, and generated rule content per progression phase.
//!
//! # Modules
//!
//! - `domain`: Fixed account table, derived values, rule formulas, money formatting
//! - `content`: Rule card generation per phase, summaries, quick reference
//! - `adapters`: Rendering surfaces (CLI)

pub mod adapters;
pub mod content;
pub mod domain;

pub use content::{generate_rules, Phase, RuleEntry};
pub use domain::{derive, lookup, AccountConfig, AccountError, DerivedValues, DrawdownType};
