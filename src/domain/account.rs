//! Account Configurations
//!
//! The fixed table of evaluation-program account types and their numeric
//! parameters. The table is defined once at compile time and never mutated;
//! every other computation in the crate keys off a row of this table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the loss threshold behaves over the life of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawdownType {
    /// Threshold trails the account's high-water mark upward, then locks
    /// once the safety net is reached.
    Full,
    /// Threshold is fixed at `size - drawdown` for the account's lifetime.
    Static,
}

impl DrawdownType {
    pub fn label(&self) -> &'static str {
        match self {
            DrawdownType::Full => "FULL",
            DrawdownType::Static => "STATIC",
        }
    }
}

/// One row of the account configuration table.
///
/// All currency fields are whole dollars. Invariants (held by every row of
/// [`ACCOUNT_CONFIGS`]): `safety_net > size`, `drawdown < size`,
/// `max_payout_first5 >= min_payout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountConfig {
    /// Identifier as shown in the account selector, e.g. "100k".
    pub id: &'static str,
    /// Nominal starting balance.
    pub size: u64,
    /// Upper bound on simultaneous contracts.
    pub max_contracts: u32,
    /// Currency amount defining the trailing/static loss threshold.
    pub drawdown: u64,
    /// Balance that unlocks full contract size and early-payout eligibility.
    pub safety_net: u64,
    /// Minimum withdrawal request.
    pub min_payout: u64,
    /// Maximum withdrawal request during the first 5 payouts.
    pub max_payout_first5: u64,
    /// Profit target to exit the evaluation phase.
    pub profit_goal: u64,
    /// Subscription cost, display only.
    pub monthly_fee: u64,
    pub drawdown_type: DrawdownType,
}

impl AccountConfig {
    /// Selector label, e.g. "100K FULL - $100,000".
    pub fn display_label(&self) -> String {
        // "100k-static" and "100k" both display as "100K"; the drawdown type
        // carries the distinction.
        let base = self.id.split('-').next().unwrap_or(self.id);
        format!(
            "{} {} - ${}",
            base.to_uppercase(),
            self.drawdown_type.label(),
            crate::domain::money::fmt_usd(self.size)
        )
    }
}

/// The 8 supported account configurations, in selector order.
pub const ACCOUNT_CONFIGS: &[AccountConfig] = &[
    AccountConfig {
        id: "25k",
        size: 25_000,
        max_contracts: 4,
        drawdown: 1_500,
        safety_net: 26_600,
        min_payout: 500,
        max_payout_first5: 1_500,
        profit_goal: 1_500,
        monthly_fee: 157,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "50k",
        size: 50_000,
        max_contracts: 10,
        drawdown: 2_500,
        safety_net: 52_600,
        min_payout: 500,
        max_payout_first5: 2_000,
        profit_goal: 3_000,
        monthly_fee: 177,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "75k",
        size: 75_000,
        max_contracts: 12,
        drawdown: 2_750,
        safety_net: 77_850,
        min_payout: 500,
        max_payout_first5: 2_250,
        profit_goal: 4_500,
        monthly_fee: 187,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "100k",
        size: 100_000,
        max_contracts: 14,
        drawdown: 3_000,
        safety_net: 103_100,
        min_payout: 500,
        max_payout_first5: 2_500,
        profit_goal: 6_000,
        monthly_fee: 297,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "150k",
        size: 150_000,
        max_contracts: 20,
        drawdown: 5_000,
        safety_net: 155_100,
        min_payout: 500,
        max_payout_first5: 2_750,
        profit_goal: 9_000,
        monthly_fee: 397,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "250k",
        size: 250_000,
        max_contracts: 30,
        drawdown: 6_500,
        safety_net: 256_600,
        min_payout: 500,
        max_payout_first5: 3_000,
        profit_goal: 15_000,
        monthly_fee: 497,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "300k",
        size: 300_000,
        max_contracts: 35,
        drawdown: 7_500,
        safety_net: 307_600,
        min_payout: 500,
        max_payout_first5: 3_500,
        profit_goal: 18_000,
        monthly_fee: 597,
        drawdown_type: DrawdownType::Full,
    },
    AccountConfig {
        id: "100k-static",
        size: 100_000,
        max_contracts: 10,
        drawdown: 625,
        safety_net: 102_600,
        min_payout: 500,
        max_payout_first5: 1_000,
        profit_goal: 2_000,
        monthly_fee: 137,
        drawdown_type: DrawdownType::Static,
    },
];

/// Errors raised by the account table.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Unknown account id '{0}' (expected one of: 25k, 50k, 75k, 100k, 150k, 250k, 300k, 100k-static)")]
    UnknownAccountId(String),
}

/// Look up a configuration by its identifier.
pub fn lookup(id: &str) -> Result<&'static AccountConfig, AccountError> {
    ACCOUNT_CONFIGS
        .iter()
        .find(|cfg| cfg.id == id)
        .ok_or_else(|| AccountError::UnknownAccountId(id.to_string()))
}

/// All known account identifiers, in selector order.
pub fn account_ids() -> Vec<&'static str> {
    ACCOUNT_CONFIGS.iter().map(|cfg| cfg.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_eight_rows() {
        assert_eq!(ACCOUNT_CONFIGS.len(), 8);
        assert_eq!(account_ids().len(), 8);
    }

    #[test]
    fn test_lookup_known_ids() {
        for cfg in ACCOUNT_CONFIGS {
            let found = lookup(cfg.id).unwrap();
            assert_eq!(found, cfg);
        }
    }

    #[test]
    fn test_lookup_unknown_id() {
        let err = lookup("unknown-id").unwrap_err();
        assert!(matches!(err, AccountError::UnknownAccountId(ref id) if id == "unknown-id"));
    }

    #[test]
    fn test_100k_row_values() {
        let cfg = lookup("100k").unwrap();
        assert_eq!(cfg.size, 100_000);
        assert_eq!(cfg.max_contracts, 14);
        assert_eq!(cfg.drawdown, 3_000);
        assert_eq!(cfg.safety_net, 103_100);
        assert_eq!(cfg.drawdown_type, DrawdownType::Full);
    }

    #[test]
    fn test_static_row_is_static() {
        let cfg = lookup("100k-static").unwrap();
        assert_eq!(cfg.drawdown_type, DrawdownType::Static);
        assert_eq!(cfg.drawdown, 625);
        assert_eq!(cfg.safety_net, 102_600);
    }

    #[test]
    fn test_table_invariants() {
        for cfg in ACCOUNT_CONFIGS {
            assert!(cfg.safety_net > cfg.size, "{}: safety net must exceed size", cfg.id);
            assert!(cfg.drawdown < cfg.size, "{}: drawdown must be below size", cfg.id);
            assert!(
                cfg.max_payout_first5 >= cfg.min_payout,
                "{}: payout bounds inverted",
                cfg.id
            );
            assert!(cfg.max_contracts >= 1, "{}: need at least one contract", cfg.id);
        }
    }

    #[test]
    fn test_display_label() {
        let cfg = lookup("100k-static").unwrap();
        assert_eq!(cfg.display_label(), "100K STATIC - $100,000");
        let cfg = lookup("25k").unwrap();
        assert_eq!(cfg.display_label(), "25K FULL - $25,000");
    }
}
