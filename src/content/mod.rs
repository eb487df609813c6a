//! Content Layer - Rule generation per phase
//!
//! Turns a selected account configuration and its derived values into the
//! ordered rule cards a rendering surface displays. Pure and deterministic;
//! the same inputs always produce the same entries.
//!
//! - `rule`: the generated value types (`RuleEntry`, `Example`, `Phase`)
//! - `shared`: cards common to the Evaluation and Performance phases
//! - `evaluation` / `performance` / `live`: one builder per phase
//! - `summary`: account header figures and quick-reference panels

pub mod rule;
pub mod summary;

mod evaluation;
mod live;
mod performance;
mod shared;

pub use rule::{CardColor, Detail, Example, ExampleKind, Phase, RuleEntry};
pub use summary::{
    phase_overview, quick_reference, AccountSummary, PhaseOverview, PhaseSummary, QuickReference,
};

use crate::domain::{AccountConfig, DerivedValues};

/// Generate the ordered rule list for one phase of one account.
pub fn generate_rules(
    phase: Phase,
    cfg: &AccountConfig,
    derived: &DerivedValues,
) -> Vec<RuleEntry> {
    match phase {
        Phase::Evaluation => evaluation::rules(cfg, derived),
        Phase::PerformanceAccount => performance::rules(cfg, derived),
        Phase::Live => live::rules(cfg, derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive, lookup, ACCOUNT_CONFIGS};

    #[test]
    fn test_entry_counts_per_phase() {
        for cfg in ACCOUNT_CONFIGS {
            let derived = derive(cfg);
            assert_eq!(generate_rules(Phase::Evaluation, cfg, &derived).len(), 6);
            assert_eq!(generate_rules(Phase::PerformanceAccount, cfg, &derived).len(), 14);
            assert_eq!(generate_rules(Phase::Live, cfg, &derived).len(), 8);
        }
    }

    #[test]
    fn test_ids_unique_within_each_phase() {
        let cfg = lookup("100k").unwrap();
        let derived = derive(cfg);
        for phase in [Phase::Evaluation, Phase::PerformanceAccount, Phase::Live] {
            let rules = generate_rules(phase, cfg, &derived);
            let mut ids: Vec<&str> = rules.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), rules.len(), "{phase:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let cfg = lookup("50k").unwrap();
        let derived = derive(cfg);
        let a = generate_rules(Phase::PerformanceAccount, cfg, &derived);
        let b = generate_rules(Phase::PerformanceAccount, cfg, &derived);
        assert_eq!(a, b);
    }
}
