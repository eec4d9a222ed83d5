use super::account::{AccountNumber, Balance};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Snapshot of an account: its header, current balance and every
/// transaction in insertion order.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Statement {
    pub account_number: AccountNumber,
    pub owner: String,
    pub balance: Balance,
    pub lines: Vec<StatementLine>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct StatementLine {
    pub date: DateTime<Utc>,
    pub payee: String,
    pub amount: Decimal,
    /// Balance right after this transaction.
    pub balance: Balance,
}
