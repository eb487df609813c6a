//! Account Summaries and Quick Reference
//!
//! The header-panel figures for a selected account and the per-phase
//! quick-reference bullet lists. Same computation model as the rule cards:
//! pure functions of the configuration and its derived values.

use serde::Serialize;

use crate::domain::{usd, AccountConfig, DerivedValues, DrawdownType};

use super::rule::Phase;

/// Header-panel figures for one account, plus the STATIC-account caution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub label: String,
    pub size: u64,
    pub max_contracts: u32,
    pub drawdown: u64,
    pub safety_net: u64,
    pub profit_goal: u64,
    pub monthly_fee: u64,
    pub static_note: Option<String>,
}

impl AccountSummary {
    pub fn from_config(cfg: &AccountConfig) -> Self {
        let static_note = match cfg.drawdown_type {
            DrawdownType::Static => Some(
                "STATIC account: the drawdown is fixed and does NOT move with the balance"
                    .to_string(),
            ),
            DrawdownType::Full => None,
        };
        Self {
            label: cfg.display_label(),
            size: cfg.size,
            max_contracts: cfg.max_contracts,
            drawdown: cfg.drawdown,
            safety_net: cfg.safety_net,
            profit_goal: cfg.profit_goal,
            monthly_fee: cfg.monthly_fee,
            static_note,
        }
    }
}

/// Banner heading for one phase of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseOverview {
    pub heading: &'static str,
    pub subtitle: String,
}

pub fn phase_overview(phase: Phase, cfg: &AccountConfig) -> PhaseOverview {
    match phase {
        Phase::Evaluation => PhaseOverview {
            heading: Phase::Evaluation.label(),
            subtitle: format!(
                "Trial phase - only the {} rule, no consistency restrictions",
                match cfg.drawdown_type {
                    DrawdownType::Static => "fixed drawdown",
                    DrawdownType::Full => "trailing drawdown",
                }
            ),
        },
        Phase::PerformanceAccount => PhaseOverview {
            heading: Phase::PerformanceAccount.label(),
            subtitle: "All consistency rules active - disciplined, professional trading required"
                .to_string(),
        },
        Phase::Live => PhaseOverview {
            heading: Phase::Live.label(),
            subtitle: "Progressive removal of restrictions - benefits unlock gradually"
                .to_string(),
        },
    }
}

/// One phase column of the quick-reference panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub bullets: Vec<String>,
}

/// The three-column quick-reference panel for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReference {
    pub account: String,
    pub phases: Vec<PhaseSummary>,
}

pub fn quick_reference(cfg: &AccountConfig, derived: &DerivedValues) -> QuickReference {
    let drawdown_bullet = match cfg.drawdown_type {
        DrawdownType::Static => "Fixed drawdown".to_string(),
        DrawdownType::Full => "Trailing drawdown".to_string(),
    };
    let pa_contracts = match cfg.drawdown_type {
        DrawdownType::Static => format!("{} contracts after the Safety Net", cfg.max_contracts),
        DrawdownType::Full => format!(
            "{} contracts until {}",
            derived.half_contracts,
            usd(cfg.safety_net)
        ),
    };

    QuickReference {
        account: cfg.id.to_uppercase(),
        phases: vec![
            PhaseSummary {
                phase: Phase::Evaluation,
                bullets: vec![
                    drawdown_bullet,
                    format!("{} contracts available", cfg.max_contracts),
                    "No consistency rules".to_string(),
                    "7 minimum trading days".to_string(),
                    format!("Goal: {}", usd(cfg.profit_goal)),
                ],
            },
            PhaseSummary {
                phase: Phase::PerformanceAccount,
                bullets: vec![
                    "8 trading days (5 with $50+)".to_string(),
                    pa_contracts,
                    "Consistency rules active".to_string(),
                    "Safety net for the first 3 payouts".to_string(),
                    format!("Max payout: {}", usd(cfg.max_payout_first5)),
                ],
            },
            PhaseSummary {
                phase: Phase::Live,
                bullets: vec![
                    "Payout 4: no safety net".to_string(),
                    "Payout 6: no limits".to_string(),
                    "Live Prop invitation".to_string(),
                    "100%/90% split".to_string(),
                    "More flexibility".to_string(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive, lookup};

    #[test]
    fn test_static_note_only_for_static_accounts() {
        let fixed = AccountSummary::from_config(lookup("100k-static").unwrap());
        assert!(fixed.static_note.is_some());

        let full = AccountSummary::from_config(lookup("100k").unwrap());
        assert!(full.static_note.is_none());
    }

    #[test]
    fn test_evaluation_overview_branches_on_type() {
        let full = phase_overview(Phase::Evaluation, lookup("100k").unwrap());
        assert!(full.subtitle.contains("trailing drawdown"));

        let fixed = phase_overview(Phase::Evaluation, lookup("100k-static").unwrap());
        assert!(fixed.subtitle.contains("fixed drawdown"));
    }

    #[test]
    fn test_quick_reference_has_three_phases() {
        let cfg = lookup("100k").unwrap();
        let qr = quick_reference(cfg, &derive(cfg));
        assert_eq!(qr.account, "100K");
        assert_eq!(qr.phases.len(), 3);
        assert!(qr.phases[1].bullets[1].contains("7 contracts until $103,100"));
    }
}
