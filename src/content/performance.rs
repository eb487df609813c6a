//! Performance Account Phase Rules
//!
//! Phase 2 content: the full restriction set. Contract scaling and the MAE
//! rule branch on the drawdown type; the consistency card quotes the windfall
//! formula through [`min_total_profit`] rather than baked-in figures.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    enhanced_mae_threshold, min_total_profit, usd, AccountConfig, DerivedValues, DrawdownType,
    safety_net_offset,
};

use super::rule::{CardColor, Detail, Example, RuleEntry};
use super::shared::{close_time_rule, drawdown_rule};

/// Build the ordered Performance Account rule list (14 entries).
pub(super) fn rules(cfg: &AccountConfig, derived: &DerivedValues) -> Vec<RuleEntry> {
    vec![
        drawdown_rule(cfg, derived),
        close_time_rule(),
        trading_days_rule(),
        contract_scaling_rule(cfg, derived),
        mae_rule(cfg, derived),
        risk_reward_rule(),
        consistency_rule(),
        hedging_rule(),
        safety_net_rule(cfg),
        max_contracts_rule(cfg),
        contract_consistency_rule(cfg),
        payout_requirements_rule(cfg),
        post_payout_trading_rule(cfg),
        prohibited_activities_rule(),
    ]
}

/// Whole-dollar rendering of the windfall minimum for a given best day.
fn min_total_whole(best_day: u64) -> u64 {
    min_total_profit(Decimal::from(best_day))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

fn trading_days_rule() -> RuleEntry {
    RuleEntry {
        id: "trading-days",
        title: "Required Trading Days".to_string(),
        color: CardColor::Indigo,
        summary: "Day requirements before requesting a payout".to_string(),
        details: vec![
            Detail::new("Minimum", "8 completed trading days"),
            Detail::new("Profitable days", "5 of those 8 days must show $50 or more of profit"),
            Detail::new(
                "Verification",
                "If you miss the minimum days, your request is NOT verified",
            ),
            Detail::new(
                "Cycle",
                "After each approved payout, you need another 8 days for the next one",
            ),
        ],
        examples: vec![
            Example::pass("8 trading days, 5 with +$50 profit = eligible"),
            Example::pass("10 trading days, 6 with +$50 profit = eligible"),
            Example::fail("8 days but only 4 with +$50 = NOT eligible"),
            Example::fail("Only 6 trading days = request not verified"),
        ],
    }
}

fn contract_scaling_rule(cfg: &AccountConfig, derived: &DerivedValues) -> RuleEntry {
    let (summary, details, examples) = match cfg.drawdown_type {
        DrawdownType::Static => (
            format!("Full contracts after {}", usd(cfg.safety_net)),
            vec![
                Detail::new(
                    "Restriction",
                    format!(
                        "Full contracts ({}) are available after reaching {}",
                        cfg.max_contracts,
                        usd(cfg.safety_net)
                    ),
                ),
                Detail::new(
                    "Safety net",
                    format!(
                        "Safety Net = {} + {} + $2,000 = {}",
                        usd(cfg.size),
                        usd(cfg.drawdown),
                        usd(cfg.safety_net)
                    ),
                ),
                Detail::new(
                    "Keeps",
                    "Once unlocked, you keep the full limit even if the balance drops",
                ),
            ],
            vec![
                Example::pass(format!(
                    "Balance {} -> wait until the safety net",
                    usd(cfg.size)
                )),
                Example::pass(format!(
                    "EOD balance {}+ -> {} contracts unlocked",
                    usd(cfg.safety_net),
                    cfg.max_contracts
                )),
            ],
        ),
        DrawdownType::Full => (
            "Maximum 50% of contracts until the Safety Net".to_string(),
            vec![
                Detail::new(
                    "Restriction",
                    format!(
                        "You may trade at most {} contracts (50% of the maximum)",
                        derived.half_contracts
                    ),
                ),
                Detail::new(
                    "Unlock",
                    format!(
                        "When your end-of-day balance reaches {} (starting balance + {} drawdown + $100)",
                        usd(cfg.safety_net),
                        usd(cfg.drawdown)
                    ),
                ),
                Detail::new(
                    "After",
                    format!(
                        "Past that level you can use the full {} contracts",
                        cfg.max_contracts
                    ),
                ),
                Detail::new(
                    "Keeps",
                    "Once unlocked, you keep the full limit even if the balance drops",
                ),
                Detail::new(
                    "Penalty",
                    "Violating this rule = payout denied + reset to the previous day's balance",
                ),
            ],
            vec![
                Example::pass(format!(
                    "Balance: {} -> at most {} contracts",
                    usd(cfg.size),
                    derived.half_contracts
                )),
                Example::pass(format!(
                    "EOD balance: {}+ -> {} contracts unlocked",
                    usd(cfg.safety_net),
                    cfg.max_contracts
                )),
                Example::fail(format!(
                    "Using {} contracts before {}",
                    derived.half_contracts + 2,
                    usd(cfg.safety_net)
                )),
                Example::fail("Not closing the excess immediately = penalty"),
            ],
        ),
    };

    RuleEntry {
        id: "contract-scaling",
        title: "Contract Scaling".to_string(),
        color: CardColor::Blue,
        summary,
        details,
        examples,
    }
}

fn mae_rule(cfg: &AccountConfig, derived: &DerivedValues) -> RuleEntry {
    let upgrade_at = enhanced_mae_threshold(cfg.drawdown, cfg.drawdown_type);
    let (details, examples) = match cfg.drawdown_type {
        DrawdownType::Static => (
            vec![
                Detail::new(
                    "Below safety net",
                    format!(
                        "Below {}: max loss {} (30% of {})",
                        usd(cfg.safety_net),
                        usd(derived.mae30),
                        usd(cfg.drawdown)
                    ),
                ),
                Detail::new(
                    "Above safety net",
                    "Above the safety net: 30% of the current profit in the account",
                ),
                Detail::new(
                    "Example",
                    format!(
                        "Balance {} (profit $3,000) -> max loss: $900 (30%)",
                        usd(cfg.size + 3_000)
                    ),
                ),
                Detail::new("Per trade", "The limit is PER TRADE, not a daily loss total"),
            ],
            vec![
                Example::pass(format!(
                    "Balance {} -> max loss: {}",
                    usd(cfg.size),
                    usd(derived.mae30)
                )),
                Example::pass(format!(
                    "Balance {} (profit $3K) -> max loss: $900",
                    usd(cfg.size + 3_000)
                )),
                Example::fail("Letting ONE trade go beyond the limit"),
            ],
        ),
        DrawdownType::Full => (
            vec![
                Detail::new("Per trade", "The limit is PER TRADE, not a daily loss total"),
                Detail::new(
                    "New account",
                    format!(
                        "New account or low profit: 30% of the trailing threshold ({}) = {} max",
                        usd(cfg.drawdown),
                        usd(derived.mae30)
                    ),
                ),
                Detail::new(
                    "With profit",
                    "With profit established: 30% of the profit balance at the day's open",
                ),
                Detail::new(
                    "Upgrade",
                    format!(
                        "If you double the safety net ({}+ profit): the limit rises to 50%",
                        usd(upgrade_at)
                    ),
                ),
                Detail::new("Monitoring", "You must watch open positions CONSTANTLY"),
                Detail::new(
                    "Brief overshoot",
                    "Temporary overshoots corrected quickly don't trigger an automatic penalty",
                ),
            ],
            vec![
                Example::pass(format!(
                    "Balance {} (no profit) -> max loss: {}",
                    usd(cfg.size),
                    usd(derived.mae30)
                )),
                Example::pass(format!(
                    "Balance {} (profit $4K) -> max loss: $1,200 (30%)",
                    usd(cfg.size + 4_000)
                )),
                Example::pass(format!(
                    "Balance {}+ (profit {}+) -> max loss: {} (50%)",
                    usd(cfg.size + upgrade_at),
                    usd(upgrade_at),
                    usd(upgrade_at / 2)
                )),
                Example::fail("Letting ONE trade go beyond the limit"),
                Example::info("Touching 32% and closing fast = OK, no penalty"),
            ],
        ),
    };

    RuleEntry {
        id: "mae",
        title: "30% Negative P&L Rule (MAE)".to_string(),
        color: CardColor::Red,
        summary: "Maximum loss per trade: 30% of FLOATING profit".to_string(),
        details,
        examples,
    }
}

fn risk_reward_rule() -> RuleEntry {
    RuleEntry {
        id: "risk-reward",
        title: "5:1 Risk-Reward Ratio".to_string(),
        color: CardColor::Green,
        summary: "Maximum stop loss: 5x your profit target".to_string(),
        details: vec![
            Detail::new("Rule", "For every dollar you aim to make, you may risk at most $5"),
            Detail::new("Calculation", "Target $100 -> maximum stop loss $500"),
            Detail::new("Ticks", "Aiming for 10 ticks of profit -> maximum stop 50 ticks"),
            Detail::new("Mental stops", "Mental stops are allowed (unless you are on probation)"),
            Detail::new(
                "Trailing",
                "You may move stops forward (protecting profit), never backward",
            ),
        ],
        examples: vec![
            Example::pass("Target: $200 | Stop: $800 (4:1 ratio)"),
            Example::pass("Target: 20 ticks | Stop: 80 ticks (4:1 ratio)"),
            Example::fail("Target: $100 | Stop: $1,000 (10:1 ratio)"),
            Example::fail("Target: 5 ticks | Stop: 150 ticks (30:1 ratio)"),
        ],
    }
}

fn consistency_rule() -> RuleEntry {
    RuleEntry {
        id: "consistency",
        title: "30% Consistency Rule (Windfall)".to_string(),
        color: CardColor::Yellow,
        summary: "No single day may exceed 30% of total profit".to_string(),
        details: vec![
            Detail::new(
                "Rule",
                "A single trading day may not produce more than 30% of your accumulated profit",
            ),
            Detail::new(
                "Calculation",
                "Formula: best day's profit / 0.3 = minimum total profit required",
            ),
            Detail::new("Reset", "Resets after every approved payout"),
            Detail::new(
                "Expires",
                "Removed at the 6th payout, or on moving to a Live Prop account",
            ),
            Detail::new(
                "Period",
                "Measured since the last approved payout (or account start for the first)",
            ),
        ],
        examples: vec![
            Example::info(format!(
                "Best day: $1,500 -> you need {} total profit",
                usd(min_total_whole(1_500))
            )),
            Example::info(format!(
                "Best day: $2,000 -> you need {} total profit",
                usd(min_total_whole(2_000))
            )),
            Example::info(format!(
                "Formula: $1,500 / 0.3 = {} minimum",
                usd(min_total_whole(1_500))
            )),
            Example::pass("Total profit $6,000 with a best day of $1,500 = OK"),
            Example::fail("Total profit $4,000 with a best day of $1,500 = NOT eligible"),
        ],
    }
}

fn hedging_rule() -> RuleEntry {
    RuleEntry {
        id: "hedging",
        title: "No Hedging".to_string(),
        color: CardColor::Purple,
        summary: "One direction at a time - no simultaneous long and short".to_string(),
        details: vec![
            Detail::new("Rule", "You may not hold long and short positions at the same time"),
            Detail::new(
                "Correlation",
                "Also banned across correlated instruments (ES + YM, NQ + ES, ...)",
            ),
            Detail::new("Direction", "Directional trading only - one direction at a time"),
            Detail::new(
                "Sizes",
                "You cannot go long in minis and short in micros simultaneously",
            ),
            Detail::new("News", "During news events: one direction only"),
        ],
        examples: vec![
            Example::pass("Long ES only"),
            Example::pass("Short NQ only"),
            Example::fail("Long ES + short YM (correlated)"),
            Example::fail("Long minis + short micros"),
            Example::fail("Long NQ + short ES"),
        ],
    }
}

fn safety_net_rule(cfg: &AccountConfig) -> RuleEntry {
    let offset = safety_net_offset(cfg.drawdown_type);
    RuleEntry {
        id: "safety-net",
        title: "Safety Net (First 3 Payouts)".to_string(),
        color: CardColor::Indigo,
        summary: format!("Keep a minimum balance of {} for payouts", usd(cfg.safety_net)),
        details: vec![
            Detail::new("Applies", "Only applies to the first 3 APPROVED payouts"),
            Detail::new(
                "Definition",
                format!(
                    "{} + {} (drawdown) + {} = {}",
                    usd(cfg.size),
                    usd(cfg.drawdown),
                    usd(offset),
                    usd(cfg.safety_net)
                ),
            ),
            Detail::new(
                "Minimum payout",
                format!("At {} you can withdraw the $500 minimum", usd(cfg.safety_net)),
            ),
            Detail::new(
                "More than $500",
                "To withdraw more than $500, your balance must exceed the safety net by the extra amount",
            ),
            Detail::new("Expires", "After the 3rd approved payout, this rule goes away"),
        ],
        examples: vec![
            Example::pass(format!(
                "Balance {} -> you can withdraw $500 (leaving {})",
                usd(cfg.safety_net),
                usd(cfg.safety_net - 500)
            )),
            Example::pass(format!(
                "Balance {} -> you can withdraw $1,200",
                usd(cfg.safety_net + 700)
            )),
            Example::info("Calculation: $500 base + $700 extra = $1,200"),
            Example::info(format!(
                "You need: {} + $700 = {}",
                usd(cfg.safety_net),
                usd(cfg.safety_net + 700)
            )),
            Example::fail(format!(
                "Balance {} -> you cannot request a payout",
                usd(cfg.safety_net - 100)
            )),
            Example::info("From payout 4 onward: no safety net!"),
        ],
    }
}

fn max_contracts_rule(cfg: &AccountConfig) -> RuleEntry {
    let sixty_pct = cfg.max_contracts * 6 / 10;
    let seventy_pct = cfg.max_contracts * 7 / 10;
    RuleEntry {
        id: "max-contracts",
        title: "Maximum Contract Limit".to_string(),
        color: CardColor::Cyan,
        summary: format!("Do not exceed {} total contracts", cfg.max_contracts),
        details: vec![
            Detail::new(
                "Limit",
                format!("At most {} contracts in total at any moment", cfg.max_contracts),
            ),
            Detail::new(
                "Across instruments",
                format!(
                    "You cannot hold {} in ES + {} in YM = {} total",
                    cfg.max_contracts,
                    cfg.max_contracts,
                    cfg.max_contracts * 2
                ),
            ),
            Detail::new("Micros", "Don't use micros to dodge the contract limit"),
            Detail::new("Violation", "Violation = payout disqualification + profit removal"),
        ],
        examples: vec![
            Example::pass(format!("{} contracts in ES", cfg.max_contracts)),
            Example::pass(format!("{} contracts in NQ", sixty_pct)),
            Example::fail(format!(
                "{} in ES + {} in YM = {} total",
                seventy_pct,
                seventy_pct,
                seventy_pct * 2
            )),
            Example::fail("Abusing micros to exceed the limit"),
        ],
    }
}

fn contract_consistency_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "contract-size-consistency",
        title: "Contract Size Consistency".to_string(),
        color: CardColor::Orange,
        summary: "Keep sizes consistent - no manipulation".to_string(),
        details: vec![
            Detail::new(
                "Principle",
                "Contract sizes must stay consistent with your strategy",
            ),
            Detail::new("Scaling up", "Increasing size as the balance grows = OK"),
            Detail::new("Scaling down", "Reducing after losses or after a payout = OK"),
            Detail::new(
                "Prohibited",
                "Large sizes early, tiny sizes later = manipulation",
            ),
            Detail::new(
                "Proof",
                "You may need 8 consistent trading days to demonstrate stability",
            ),
        ],
        examples: vec![
            Example::pass("Start with 2 contracts, scale to 4-6 as the balance grows"),
            Example::pass("After a payout, reducing from 8 to 4 contracts"),
            Example::fail(format!(
                "Days 1-2: {} contracts | days 3-8: 2 contracts",
                cfg.max_contracts
            )),
            Example::fail("Going all-in early, then cutting size drastically"),
        ],
    }
}

fn payout_requirements_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "payout-requirements",
        title: "Payout Request Requirements".to_string(),
        color: CardColor::Emerald,
        summary: "Conditions you must meet before withdrawing".to_string(),
        details: vec![
            Detail::new(
                "Minimum days",
                "8 trading days completed since the last payout (or account start)",
            ),
            Detail::new("Profitable days", "5 of those 8 days with $50+ profit"),
            Detail::new(
                "Minimum balance",
                format!("Minimum balance: {} (first 3 payouts)", usd(cfg.safety_net)),
            ),
            Detail::new("Minimum amount", format!("Minimum amount: {}", usd(cfg.min_payout))),
            Detail::new(
                "Maximum amount",
                format!(
                    "Maximum amount: {} (first 5 payouts)",
                    usd(cfg.max_payout_first5)
                ),
            ),
            Detail::new(
                "Consistency",
                "Meet the 30% consistency rule (first 5 payouts)",
            ),
            Detail::new(
                "After requesting",
                "After requesting: you can keep trading IMMEDIATELY",
            ),
        ],
        examples: vec![
            Example::pass(format!(
                "8 days, 5 with $50+, balance {}+ = eligible",
                usd(cfg.safety_net)
            )),
            Example::pass(format!(
                "You request {} and keep trading without waiting for approval",
                usd(cfg.min_payout)
            )),
            Example::fail("Only 7 days completed = request not verified"),
            Example::fail(format!(
                "Balance drops under {} after requesting = payout DENIED",
                usd(cfg.safety_net)
            )),
        ],
    }
}

fn post_payout_trading_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "post-payout-trading",
        title: "Trading After a Payout Request".to_string(),
        color: CardColor::Blue,
        summary: "Critical rules after requesting a withdrawal".to_string(),
        details: vec![
            Detail::new(
                "Keep trading",
                "You can keep trading IMMEDIATELY - no need to wait for approval",
            ),
            Detail::new(
                "Critical",
                "Trade as if the money had ALREADY left your balance",
            ),
            Detail::new(
                "Minimum balance",
                format!(
                    "If your balance falls under {} after requesting = PAYOUT DENIED",
                    usd(cfg.safety_net)
                ),
            ),
            Detail::new(
                "No cancelling",
                "No need to cancel or edit - the request is denied automatically if you don't qualify",
            ),
            Detail::new(
                "Recommendation",
                "Trade conservatively, or take a break until approval",
            ),
        ],
        examples: vec![
            Example::info(format!(
                "Balance {}, you request {} -> you can keep trading",
                usd(cfg.safety_net + 1_000),
                usd(cfg.min_payout)
            )),
            Example::warn(format!(
                "After requesting, balance drops to {} -> payout DENIED",
                usd(cfg.safety_net - 200)
            )),
            Example::pass("Trade as if the $500 were already out of the account"),
            Example::fail(format!(
                "Balance {}, you request {}, you dip to {} = denied",
                usd(cfg.safety_net),
                usd(cfg.min_payout),
                usd(cfg.safety_net - 100)
            )),
        ],
    }
}

fn prohibited_activities_rule() -> RuleEntry {
    RuleEntry {
        id: "prohibited-activities",
        title: "Strictly Prohibited Activities".to_string(),
        color: CardColor::Red,
        summary: "Any violation results in immediate account closure and total loss of funds"
            .to_string(),
        details: vec![
            Detail::new(
                "Risk management",
                "Trading without a defined stop loss or a clear risk management plan",
            ),
            Detail::new(
                "HFT",
                "High-frequency trading, or any attempt to exploit or manipulate the simulated environment",
            ),
            Detail::new(
                "Automation",
                "Bots, algorithms, AI, or fully automated (full-auto) systems",
            ),
            Detail::new(
                "Threshold as stop",
                "Using the trailing threshold / trailing drawdown as a stop-loss substitute",
            ),
            Detail::new(
                "Unsustainable strategies",
                "Strategies that don't demonstrate consistent growth, sustainability, or adequate risk control",
            ),
            Detail::new(
                "Professional standards",
                "Traders must apply strategies and risk management consistent with a personal account at a regulated broker",
            ),
            Detail::new(
                "Copy trading",
                "Copy trading, trade mirroring, or third-party automated systems",
            ),
            Detail::new(
                "Sharing",
                "Sharing or reusing IPs, MAC addresses, computers, or credit cards",
            ),
            Detail::new(
                "Multiple users",
                "Letting another person trade or access your account",
            ),
            Detail::new(
                "Account sharing",
                "Creating or using multiple user accounts (serious, bannable offense)",
            ),
            Detail::new(
                "Stockpiling",
                "Buying multiple discounted evaluation accounts just to burn through them",
            ),
        ],
        examples: vec![
            Example::fail("Running a bot that trades on its own"),
            Example::fail("Practicing HFT or exploiting simulator latency"),
            Example::fail("Letting a third party trade your account"),
            Example::fail("Sharing an IP, MAC, or device with another trader"),
            Example::fail("Trading without a stop loss or risk control"),
            Example::fail("Creating or using multiple user accounts"),
            Example::warn("Result: account closure + total loss of funds"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive, lookup, ACCOUNT_CONFIGS};

    const EXPECTED_IDS: [&str; 14] = [
        "trailing-drawdown",
        "close-time",
        "trading-days",
        "contract-scaling",
        "mae",
        "risk-reward",
        "consistency",
        "hedging",
        "safety-net",
        "max-contracts",
        "contract-size-consistency",
        "payout-requirements",
        "post-payout-trading",
        "prohibited-activities",
    ];

    #[test]
    fn test_fourteen_entries_in_order_for_every_account() {
        for cfg in ACCOUNT_CONFIGS {
            let rules = rules(cfg, &derive(cfg));
            let ids: Vec<&str> = rules.iter().map(|r| r.id).collect();
            assert_eq!(ids, EXPECTED_IDS, "{}", cfg.id);
        }
    }

    #[test]
    fn test_contract_scaling_branches() {
        let full = lookup("100k").unwrap();
        let rule = contract_scaling_rule(full, &derive(full));
        assert!(rule.summary.contains("50%"));
        assert!(rule.details.iter().any(|d| d.text.contains("7 contracts")));

        let fixed = lookup("100k-static").unwrap();
        let rule = contract_scaling_rule(fixed, &derive(fixed));
        assert!(rule.summary.contains("$102,600"));
        assert!(rule.details.iter().any(|d| d.text.contains("$2,000")));
    }

    #[test]
    fn test_mae_three_tiers_for_full() {
        let cfg = lookup("100k").unwrap();
        let rule = mae_rule(cfg, &derive(cfg));
        // tier 1: 30% of the trailing threshold, tier 2: day-open profit,
        // tier 3: 50% once profit doubles the safety net cushion
        assert!(rule.details.iter().any(|d| d.text.contains("$900")));
        assert!(rule.details.iter().any(|d| d.text.contains("day's open")));
        assert!(rule.details.iter().any(|d| d.text.contains("$6,200")));
        assert!(rule.examples.iter().any(|e| e.text.contains("(50%)")));
    }

    #[test]
    fn test_mae_two_tiers_for_static() {
        let cfg = lookup("100k-static").unwrap();
        let rule = mae_rule(cfg, &derive(cfg));
        assert!(rule.details.iter().any(|d| d.text.contains("$188")));
        assert!(rule.details.iter().any(|d| d.text.contains("current profit")));
        assert!(!rule.details.iter().any(|d| d.text.contains("50%")));
    }

    #[test]
    fn test_consistency_quotes_formula_output() {
        let rule = consistency_rule();
        assert!(rule.examples[0].text.contains("$5,000"));
        assert!(rule.examples[1].text.contains("$6,667"));
    }

    #[test]
    fn test_safety_net_offset_wording() {
        let full = safety_net_rule(lookup("100k").unwrap());
        assert!(full.details[1].text.contains("$100 ="));

        let fixed = safety_net_rule(lookup("100k-static").unwrap());
        assert!(fixed.details[1].text.contains("$2,000"));
    }
}
