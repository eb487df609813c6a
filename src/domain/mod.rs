//! Domain Layer - Pure account data and math
//!
//! This module contains the fixed account configuration table and the pure
//! functions computed from it. No I/O, no shared state; every function is
//! referentially transparent and safe to call from any thread.
//!
//! - `account`: the fixed configuration table and `lookup`
//! - `derived`: per-selection derived values (`derive`)
//! - `formulas`: the computable relations quoted in rule text
//! - `money`: thousands-separator currency formatting

pub mod account;
pub mod derived;
pub mod formulas;
pub mod money;

pub use account::{account_ids, lookup, AccountConfig, AccountError, DrawdownType, ACCOUNT_CONFIGS};
pub use derived::{derive, DerivedValues};
pub use formulas::{enhanced_mae_threshold, min_total_profit, payout_amount, safety_net_offset};
pub use money::{fmt_usd, usd};
