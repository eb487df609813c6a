//! Derived Values
//!
//! Secondary quantities computed from a selected account configuration.
//! Pure and total: every row of the fixed table satisfies the preconditions
//! (`max_contracts >= 1`, `drawdown >= 0`), so there is no error case.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::account::AccountConfig;

/// Quantities derived from one [`AccountConfig`]. Recomputed on every
/// selection change; never cached across selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    /// Ceiling of half the contract limit, the cap before the safety net
    /// is reached (14 -> 7, 15 -> 8).
    pub half_contracts: u32,
    /// Initial trailing threshold level: `size - drawdown`.
    pub trailing_start: u64,
    /// 30% of the drawdown amount, rounded half away from zero.
    pub mae30: u64,
    /// 50% of the drawdown amount, rounded half away from zero.
    pub mae50: u64,
}

impl DerivedValues {
    pub fn from_config(cfg: &AccountConfig) -> Self {
        Self {
            half_contracts: cfg.max_contracts.div_ceil(2),
            trailing_start: cfg.size - cfg.drawdown,
            mae30: pct_of(cfg.drawdown, Decimal::new(30, 2)),
            mae50: pct_of(cfg.drawdown, Decimal::new(50, 2)),
        }
    }
}

/// Compute a convenience alias matching the public operation name.
pub fn derive(cfg: &AccountConfig) -> DerivedValues {
    DerivedValues::from_config(cfg)
}

/// `amount * fraction`, rounded to the nearest whole dollar with ties away
/// from zero (the source's rounding primitive).
fn pct_of(amount: u64, fraction: Decimal) -> u64 {
    (Decimal::from(amount) * fraction)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
