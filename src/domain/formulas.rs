//! Rule Formulas
//!
//! The computable relations quoted inside the generated rule text. These are
//! the exact formulas the program publishes, so they live here as functions
//! rather than pre-baked figures.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::account::DrawdownType;

/// Windfall divisor: no single day may exceed 30% of total profit.
const CONSISTENCY_FRACTION: Decimal = dec!(0.30);

/// Payout tranche paid at 100% per account; the remainder pays 90%.
const FULL_SPLIT_TRANCHE: Decimal = dec!(25000);
const SPLIT_FRACTION: Decimal = dec!(0.90);

/// Minimum total profit required so that a best day of `best_day_profit`
/// stays within the 30% consistency rule: `best_day / 0.30`, rounded to
/// cents. A $1,500 best day needs $5,000 total.
pub fn min_total_profit(best_day_profit: Decimal) -> Decimal {
    (best_day_profit / CONSISTENCY_FRACTION)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Payable amount of a withdrawal of `requested` from a single account:
/// 100% of the first $25,000, 90% of the rest.
pub fn payout_amount(requested: Decimal) -> Decimal {
    let base = requested.min(FULL_SPLIT_TRANCHE);
    let excess = (requested - FULL_SPLIT_TRANCHE).max(Decimal::ZERO);
    base + excess * SPLIT_FRACTION
}

/// Dollar cushion above `size + drawdown` built into each account's safety
/// net: $2,000 for static-drawdown accounts, $100 for trailing ones.
pub fn safety_net_offset(drawdown_type: DrawdownType) -> u64 {
    match drawdown_type {
        DrawdownType::Static => 2_000,
        DrawdownType::Full => 100,
    }
}

/// Accumulated profit at which the per-trade loss cap rises from 30% to 50%:
/// `2 * (drawdown + offset)`. The trailing-account form `(drawdown + 100) * 2`
/// is published as-is by the program.
pub fn enhanced_mae_threshold(drawdown: u64, drawdown_type: DrawdownType) -> u64 {
    (drawdown + safety_net_offset(drawdown_type)) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_total_profit() {
        assert_eq!(min_total_profit(dec!(1500)), dec!(5000.00));
        assert_eq!(min_total_profit(dec!(2000)), dec!(6666.67));
        assert_eq!(min_total_profit(dec!(0)), dec!(0.00));
    }

    #[test]
    fn test_payout_amount_below_tranche() {
        assert_eq!(payout_amount(dec!(500)), dec!(500));
        assert_eq!(payout_amount(dec!(25000)), dec!(25000));
    }

    #[test]
    fn test_payout_amount_above_tranche() {
        // 25,000 at 100% + 5,000 at 90%
        assert_eq!(payout_amount(dec!(30000)), dec!(29500.0));
        assert_eq!(payout_amount(dec!(26000)), dec!(25900.0));
    }

    #[test]
    fn test_safety_net_offset() {
        assert_eq!(safety_net_offset(DrawdownType::Full), 100);
        assert_eq!(safety_net_offset(DrawdownType::Static), 2_000);
    }

    #[test]
    fn test_enhanced_mae_threshold() {
        // 100k trailing: (3000 + 100) * 2
        assert_eq!(enhanced_mae_threshold(3_000, DrawdownType::Full), 6_200);
        // 100k static: (625 + 2000) * 2
        assert_eq!(enhanced_mae_threshold(625, DrawdownType::Static), 5_250);
    }
}
