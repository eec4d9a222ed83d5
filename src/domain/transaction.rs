use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payee recorded on every deposit.
pub const DEPOSIT_PAYEE: &str = "Deposit";

/// A single immutable ledger entry.
///
/// Deposits carry a positive amount and the [`DEPOSIT_PAYEE`] label, charges a
/// negative amount and the caller's payee. No validation happens here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    amount: Decimal,
    payee: String,
    date: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    pub fn new(amount: Decimal, payee: impl Into<String>) -> Self {
        Self::at(amount, payee, Utc::now())
    }

    fn at(amount: Decimal, payee: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            amount,
            payee: payee.into(),
            date,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
