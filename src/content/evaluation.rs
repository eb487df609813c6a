//! Evaluation Phase Rules
//!
//! Phase 1 content: the drawdown rule plus schedule and profit-goal cards.
//! The evaluation phase intentionally carries no consistency, contract-scaling
//! or hedging restrictions, and the content says so.

use crate::domain::{usd, AccountConfig, DerivedValues};

use super::rule::{CardColor, Detail, Example, RuleEntry};
use super::shared::{close_time_rule, drawdown_rule};

/// Build the ordered Evaluation rule list (6 entries).
pub(super) fn rules(cfg: &AccountConfig, derived: &DerivedValues) -> Vec<RuleEntry> {
    vec![
        drawdown_rule(cfg, derived),
        min_trading_days_rule(cfg),
        close_time_rule(),
        holiday_trading_rule(),
        no_restrictions_rule(cfg),
        profit_goal_rule(cfg),
    ]
}

fn min_trading_days_rule(cfg: &AccountConfig) -> RuleEntry {
    let account = cfg.id.to_uppercase();
    RuleEntry {
        id: "min-trading-days",
        title: "Minimum Trading Days".to_string(),
        color: CardColor::Indigo,
        summary: "7 trading days to pass the evaluation".to_string(),
        details: vec![
            Detail::new("Minimum", "7 completed trading days (not consecutive)"),
            Detail::new("No maximum", "There is no maximum - take as long as you need"),
            Detail::new(
                "Profit goal",
                format!(
                    "You must reach the profit goal ({} for {})",
                    usd(cfg.profit_goal),
                    account
                ),
            ),
            Detail::new(
                "Hold it",
                "If you hit the goal before 7 days, keep the balance above it until the days are done",
            ),
        ],
        examples: vec![
            Example::pass(format!(
                "7 trading days + {} profit = evaluation passed",
                usd(cfg.profit_goal)
            )),
            Example::pass("Days off are fine - they don't have to be consecutive"),
            Example::fail("Only 6 trading days = no pass, even with the profit"),
            Example::warn(format!(
                "You reach {} on day 4 -> keep trading until 7 days are complete",
                usd(cfg.profit_goal)
            )),
        ],
    }
}

fn holiday_trading_rule() -> RuleEntry {
    RuleEntry {
        id: "holiday-trading",
        title: "Holiday Trading".to_string(),
        color: CardColor::Purple,
        summary: "You can trade holidays, but half-days don't count".to_string(),
        details: vec![
            Detail::new(
                "Full days",
                "A holiday with a full market session counts as a trading day",
            ),
            Detail::new("Half days", "Half-day holidays do NOT count as a separate trading day"),
            Detail::new("Combined", "A half day is combined with the next trading day"),
            Detail::new(
                "Sundays",
                "Sunday trading counts as part of Monday (6:00 PM Sunday - 4:59 PM Monday)",
            ),
        ],
        examples: vec![
            Example::pass("Holiday with a full session -> counts as 1 day"),
            Example::fail("Half-day holiday -> does not count separately"),
            Example::info("Trading Sunday 8:00 PM -> counts as Monday"),
            Example::info("A trading day runs 6:00 PM ET one day to 4:59 PM ET the next"),
        ],
    }
}

fn no_restrictions_rule(cfg: &AccountConfig) -> RuleEntry {
    RuleEntry {
        id: "no-restrictions",
        title: "No Consistency Rules".to_string(),
        color: CardColor::Green,
        summary: "Total freedom to reach the goal".to_string(),
        details: vec![
            Detail::new(
                "No limits",
                "No contract limits, negative P&L limits, or consistency rules",
            ),
            Detail::new("Focus", "Your only job is to stay off the drawdown"),
            Detail::new(
                "Contracts",
                format!(
                    "You can use the full {} contracts from day one",
                    cfg.max_contracts
                ),
            ),
            Detail::new(
                "Free trading",
                "Any strategy that respects the drawdown is allowed",
            ),
            Detail::new(
                "All in",
                "All-in trades are allowed if you want them - there are no restrictions",
            ),
        ],
        examples: Vec::new(),
    }
}

fn profit_goal_rule(cfg: &AccountConfig) -> RuleEntry {
    let account = cfg.id.to_uppercase();
    RuleEntry {
        id: "profit-goal",
        title: "Profit Goal".to_string(),
        color: CardColor::Green,
        summary: format!("{} net profit (after commissions)", usd(cfg.profit_goal)),
        details: vec![
            Detail::new(
                "Target",
                format!(
                    "You need {} of profit for the {} account",
                    usd(cfg.profit_goal),
                    account
                ),
            ),
            Detail::new("Net of costs", "Profit is NET of commissions and all costs"),
            Detail::new(
                "Real time",
                "Your P&L is visible in real time in RTrader/Tradovate",
            ),
            Detail::new(
                "Hold it",
                "Once reached, keep the balance above it until 7 days are complete",
            ),
        ],
        examples: vec![
            Example::pass(format!(
                "Balance {}+ = {} profit reached",
                usd(cfg.size + cfg.profit_goal),
                usd(cfg.profit_goal)
            )),
            Example::info("Commissions are already deducted from the displayed balance"),
            Example::warn(format!(
                "If you hit {} on day 5, stay above it 2 more days",
                usd(cfg.size + cfg.profit_goal)
            )),
        ],
    }
}
