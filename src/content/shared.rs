//! Shared Rule Cards
//!
//! The drawdown and session-close cards appear verbatim in both the
//! Evaluation and Performance Account phases, so they are built here once.

use crate::domain::{usd, AccountConfig, DerivedValues, DrawdownType};

use super::rule::{CardColor, Detail, Example, RuleEntry};

/// The trailing/static drawdown card. Wording, not just figures, follows the
/// drawdown type: STATIC describes a fixed liquidation level, FULL a
/// high-water-mark-following level that locks at the safety net.
pub(super) fn drawdown_rule(cfg: &AccountConfig, derived: &DerivedValues) -> RuleEntry {
    let (summary, details, examples) = match cfg.drawdown_type {
        DrawdownType::Static => (
            "Fixed drawdown - the primary rule for this account".to_string(),
            vec![
                Detail::new(
                    "Fixed level",
                    format!("Drawdown FIXED at {}", usd(cfg.size - cfg.drawdown)),
                ),
                Detail::new(
                    "No movement",
                    "The drawdown does NOT move - it stays at the same level for the account's life",
                ),
                Detail::new(
                    "Liquidation",
                    "If your balance touches this level, the account is liquidated",
                ),
                Detail::new(
                    "Monitoring",
                    "Watch it constantly on the RTrader/Tradovate dashboard",
                ),
            ],
            vec![
                Example::pass(format!(
                    "Balance {} -> drawdown FIXED at {}",
                    usd(cfg.size),
                    usd(cfg.size - cfg.drawdown)
                )),
                Example::pass(format!(
                    "Balance rises to {} -> drawdown stays at {}",
                    usd(cfg.size + 2_000),
                    usd(cfg.size - cfg.drawdown)
                )),
                Example::fail(format!(
                    "Balance touches {} = account liquidated",
                    usd(cfg.size - cfg.drawdown)
                )),
            ],
        ),
        DrawdownType::Full => (
            "Trailing drawdown - the primary rule for this account".to_string(),
            vec![
                Detail::new(
                    "Starts at",
                    format!(
                        "Begins at {} (starting balance - {} drawdown)",
                        usd(derived.trailing_start),
                        usd(cfg.drawdown)
                    ),
                ),
                Detail::new(
                    "Movement",
                    "Moves upward following your peak balance (high-water mark)",
                ),
                Detail::new(
                    "Live value",
                    "Tracks the highest LIVE value reached during trades, NOT closed trades",
                ),
                Detail::new(
                    "Stops trailing",
                    format!(
                        "Stops once you reach {} (Safety Net = {} + {} + $100)",
                        usd(cfg.safety_net),
                        usd(cfg.size),
                        usd(cfg.drawdown)
                    ),
                ),
                Detail::new(
                    "Liquidation",
                    "If your balance touches the trailing drawdown, the account is liquidated",
                ),
                Detail::new(
                    "Monitoring",
                    "Watch it constantly on the RTrader/Tradovate dashboard",
                ),
            ],
            vec![
                Example::pass(format!(
                    "Balance {} -> trailing at {}",
                    usd(cfg.size),
                    usd(derived.trailing_start)
                )),
                Example::pass(format!(
                    "Trade peaks at {}, you close at {} -> trailing at {} (follows the peak)",
                    usd(cfg.size + 2_000),
                    usd(cfg.size + 1_500),
                    usd(cfg.size + 2_000 - cfg.drawdown)
                )),
                Example::pass(format!(
                    "Balance reaches {}+ -> trailing locks permanently at {}",
                    usd(cfg.safety_net),
                    usd(cfg.size + 100)
                )),
                Example::fail("Balance touches the trailing level = immediate liquidation"),
            ],
        ),
    };

    RuleEntry {
        id: "trailing-drawdown",
        title: "Trailing Drawdown".to_string(),
        color: CardColor::Blue,
        summary,
        details,
        examples,
    }
}

/// The session close card. Identical in both phases; no account figures.
pub(super) fn close_time_rule() -> RuleEntry {
    RuleEntry {
        id: "close-time",
        title: "Session Close".to_string(),
        color: CardColor::Red,
        summary: "All positions must be closed before 4:59 PM ET".to_string(),
        details: vec![
            Detail::new(
                "Deadline",
                "Close every position and cancel pending orders before 4:59 PM ET",
            ),
            Detail::new(
                "Auto close",
                "Positions are flattened automatically at 4:59 PM, but do NOT rely on it",
            ),
            Detail::new(
                "Manual step",
                "Orders NOT attached to a position must be cancelled by hand",
            ),
            Detail::new(
                "Gap risk",
                "Positions left open can gap and liquidate your account",
            ),
            Detail::new(
                "Holidays",
                "On early-close holidays, close by the market's early close time",
            ),
        ],
        examples: vec![
            Example::pass("You flatten everything at 4:30 PM ET"),
            Example::fail("Relying on the auto close as your main strategy"),
            Example::fail("Leaving pending orders with no attached position"),
            Example::warn("Holiday with a 1:00 PM close -> close by that time"),
        ],
    }
}
