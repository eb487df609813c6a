//! Live Phase Rules
//!
//! Phase 3 content: progressive relaxation keyed to the payout counter.
//! Payout 4 drops the safety-net requirement; payout 6 drops both the 30%
//! consistency rule and the per-payout cap. The enhanced MAE card quotes
//! [`enhanced_mae_threshold`] and the split card quotes [`payout_amount`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::domain::{
    enhanced_mae_threshold, payout_amount, safety_net_offset, usd, AccountConfig, DerivedValues,
};

use super::rule::{CardColor, Detail, Example, RuleEntry};

/// Build the ordered Live rule list (8 entries).
pub(super) fn rules(cfg: &AccountConfig, _derived: &DerivedValues) -> Vec<RuleEntry> {
    vec![
        invitation_rule(),
        payout4_rule(cfg),
        full_contracts_rule(cfg),
        enhanced_mae_rule(cfg),
        payout6_consistency_rule(),
        payout6_uncapped_rule(cfg),
        payout_split_rule(),
        timeline_rule(cfg),
    ]
}

fn invitation_rule() -> RuleEntry {
    RuleEntry {
        id: "invitation",
        title: "Live Prop Invitation".to_string(),
        color: CardColor::Purple,
        summary: "By invitation only".to_string(),
        details: vec![
            Detail::new(
                "Process",
                "You are contacted when you meet the criteria (it cannot be requested)",
            ),
            Detail::new("Criteria", "Consistency, discipline, rule compliance"),
            Detail::new(
                "No timeline",
                "The help desk has no information on when you will be considered",
            ),
            Detail::new("Patience", "Keep trading well - you'll be contacted when you qualify"),
        ],
        examples: Vec::new(),
    }
}

fn payout4_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "payout4-safety-net",
        title: "Payout 4: Safety Net Removed".to_string(),
        color: CardColor::Green,
        summary: format!("You no longer need to hold {}", usd(cfg.safety_net)),
        details: vec![
            Detail::new("Removed", "The safety-net restriction disappears"),
            Detail::new("Flexibility", "More flexibility in withdrawal amounts"),
            Detail::new(
                "Minimum",
                "You only need enough balance to stay off the drawdown",
            ),
            Detail::new("Freedom", "Larger withdrawals become much easier"),
        ],
        examples: Vec::new(),
    }
}

fn full_contracts_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "full-contracts",
        title: "Permanent Full Contracts".to_string(),
        color: CardColor::Blue,
        summary: format!(
            "You already have {} contracts unlocked since the Safety Net",
            cfg.max_contracts
        ),
        details: vec![
            Detail::new(
                "Unlocked",
                format!("You unlocked this in PA by reaching {}", usd(cfg.safety_net)),
            ),
            Detail::new("Carries over", "The benefit carries into Live Prop"),
            Detail::new("Scaling", "Scale positions according to your strategy"),
            Detail::new("Permanent", "The 50% restriction is gone for good"),
        ],
        examples: Vec::new(),
    }
}

fn enhanced_mae_rule(cfg: &AccountConfig) -> RuleEntry {
    let cushion = cfg.drawdown + safety_net_offset(cfg.drawdown_type);
    let upgrade_at = enhanced_mae_threshold(cfg.drawdown, cfg.drawdown_type);
    RuleEntry {
        id: "enhanced-mae",
        title: "Enhanced MAE (50%)".to_string(),
        color: CardColor::Indigo,
        summary: "The loss limit grows with your account".to_string(),
        details: vec![
            Detail::new(
                "Threshold",
                format!(
                    "If your profit doubles the safety net cushion ({}+), the limit rises to 50%",
                    usd(upgrade_at)
                ),
            ),
            Detail::new(
                "Calculation",
                "With doubled profit -> max loss: 50% of the profit",
            ),
            Detail::new(
                "Example",
                format!(
                    "Balance {} -> max loss {} (50%)",
                    usd(cfg.size + upgrade_at),
                    usd(upgrade_at / 2)
                ),
            ),
            Detail::new(
                "Scaling",
                "As you grow, your risk margin grows proportionally",
            ),
        ],
        examples: vec![
            Example::info(format!(
                "Profit {}-{} -> 30% limit",
                usd(cushion),
                usd(upgrade_at - 1)
            )),
            Example::info(format!("Profit {}+ -> 50% limit", usd(upgrade_at))),
            Example::info(format!(
                "Balance {} (profit $10K) -> max loss $5,000",
                usd(cfg.size + 10_000)
            )),
        ],
    }
}

fn payout6_consistency_rule() -> RuleEntry {
    RuleEntry {
        id: "payout6-consistency",
        title: "Payout 6: 30% Consistency Rule Removed".to_string(),
        color: CardColor::Yellow,
        summary: "Windfall restriction lifted".to_string(),
        details: vec![
            Detail::new("Removed", "The 30% consistency rule no longer applies"),
            Detail::new("Big days", "Large profit days carry no restriction"),
            Detail::new(
                "Freedom",
                "It no longer matters if one day produces 50% or 80% of the profit",
            ),
            Detail::new(
                "Milestone",
                "Also lifted if you move to a Live Prop account before the 6th payout",
            ),
        ],
        examples: Vec::new(),
    }
}

fn payout6_uncapped_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "payout6-uncapped",
        title: "Payout 6: No Maximum Amount".to_string(),
        color: CardColor::Green,
        summary: format!("No more {} cap per payout", usd(cfg.max_payout_first5)),
        details: vec![
            Detail::new(
                "No cap",
                format!(
                    "The {} per-payout maximum no longer applies",
                    usd(cfg.max_payout_first5)
                ),
            ),
            Detail::new(
                "Condition",
                "As long as you keep the minimum balance after withdrawing",
            ),
            Detail::new("Frequency", "You can request every 8 trading days"),
            Detail::new(
                "Amounts",
                "Withdraw what you need (respecting the minimum balance)",
            ),
        ],
        examples: vec![
            Example::pass("You can withdraw $5,000"),
            Example::pass("You can withdraw $10,000"),
            Example::pass("You can withdraw $15,000+"),
            Example::warn("Just keep enough balance after the withdrawal"),
        ],
    }
}

fn payout_split_rule() -> RuleEntry {
    let paid = payout_amount(dec!(30000)).round_dp(0).to_u64().unwrap_or(0);
    RuleEntry {
        id: "payout-split",
        title: "Payout Split".to_string(),
        color: CardColor::Emerald,
        summary: "100% of the first $25K, then 90%".to_string(),
        details: vec![
            Detail::new("First $25,000", "100% of the first $25,000 per account"),
            Detail::new("After that", "90% of profit beyond the first $25,000"),
            Detail::new("Per account", "Applies per individual account"),
            Detail::new(
                "Example",
                format!(
                    "Withdrawing $30,000 total: $25,000 (100%) + $5,000 (90% = $4,500) = {} paid",
                    usd(paid)
                ),
            ),
        ],
        examples: Vec::new(),
    }
}

fn timeline_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "timeline",
        title: "Progression Timeline".to_string(),
        color: CardColor::Pink,
        summary: "The full progression path".to_string(),
        details: vec![
            Detail::new("Fastest path", "Minimum 48 trading days (6 payouts x 8 days)"),
            Detail::new(
                "Payouts 1-3",
                format!("Safety net + {} max", usd(cfg.max_payout_first5)),
            ),
            Detail::new(
                "Payouts 4-5",
                format!("No safety net + {} max", usd(cfg.max_payout_first5)),
            ),
            Detail::new("Payout 6+", "No safety net + no cap + no 30% rule"),
            Detail::new(
                "Live Prop",
                "Or an invitation to Live Prop (lifts several restrictions)",
            ),
        ],
        examples: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive, lookup};

    #[test]
    fn test_eight_entries_in_order() {
        let cfg = lookup("100k").unwrap();
        let rules = rules(cfg, &derive(cfg));
        let ids: Vec<&str> = rules.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "invitation",
                "payout4-safety-net",
                "full-contracts",
                "enhanced-mae",
                "payout6-consistency",
                "payout6-uncapped",
                "payout-split",
                "timeline",
            ]
        );
    }

    #[test]
    fn test_enhanced_mae_threshold_full_vs_static() {
        let full = enhanced_mae_rule(lookup("100k").unwrap());
        assert!(full.details[0].text.contains("$6,200"));

        let fixed = enhanced_mae_rule(lookup("100k-static").unwrap());
        assert!(fixed.details[0].text.contains("$5,250"));
    }

    #[test]
    fn test_payout_split_example_uses_formula() {
        let rule = payout_split_rule();
        assert!(rule.details[3].text.contains("$29,500"));
    }
}
