use super::amount::Amount;
use super::audit::{AuditLog, TracingAudit};
use super::statement::{Statement, StatementLine};
use super::transaction::{DEPOSIT_PAYEE, Transaction};
use crate::error::AccountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Represents the signed sum of an account's transactions.
///
/// This is a wrapper around `rust_decimal::Decimal` so balances cannot be
/// confused with the amounts that produce them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Opaque account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub fn new(number: u64) -> Self {
        Self(number)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single-owner account backed by an append-only transaction log.
///
/// The balance is never stored: it is recomputed from the log on every call.
/// Every accepted or rejected operation is reported to the audit log `L`.
#[derive(Debug, Clone)]
pub struct Account<L = TracingAudit> {
    account_number: AccountNumber,
    owner: String,
    transactions: Vec<Transaction>,
    audit: L,
}

impl Account {
    pub fn new(account_number: AccountNumber, owner: impl Into<String>) -> Self {
        Self::with_audit(account_number, owner, TracingAudit)
    }
}

impl<L: AuditLog> Account<L> {
    pub fn with_audit(
        account_number: AccountNumber,
        owner: impl Into<String>,
        audit: L,
    ) -> Self {
        Self::restore(account_number, owner, Vec::new(), audit)
    }

    /// Rebuilds an account from transactions it accepted earlier.
    ///
    /// The history is trusted as-is and is not validated again.
    pub fn restore(
        account_number: AccountNumber,
        owner: impl Into<String>,
        history: Vec<Transaction>,
        audit: L,
    ) -> Self {
        Self {
            account_number,
            owner: owner.into(),
            transactions: history,
            audit,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> Balance {
        Balance::new(self.transactions.iter().map(Transaction::amount).sum())
    }

    /// Credits the account with a strictly positive amount.
    pub fn deposit<A>(&mut self, amount: A) -> Result<&Transaction, AccountError>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let transaction = self.validate_deposit(amount)?;
        Ok(self.record(transaction))
    }

    /// Debits the account by the magnitude of `amount`.
    ///
    /// The sign of `amount` is ignored, so a charge can never credit the
    /// account. Charging the entire balance is allowed.
    pub fn charge<A>(
        &mut self,
        payee: impl Into<String>,
        amount: A,
    ) -> Result<&Transaction, AccountError>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let transaction = self.validate_charge(payee, amount)?;
        Ok(self.record(transaction))
    }

    /// Runs every deposit check and returns the transaction that would be
    /// appended, without appending it.
    ///
    /// Every accepted deposit keeps the balance representable, so summing
    /// the log can never overflow.
    pub(crate) fn validate_deposit<A>(&self, amount: A) -> Result<Transaction, AccountError>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let amount: Amount = amount.try_into().map_err(|e| self.reject(e))?;
        if amount.value() <= Decimal::ZERO {
            return Err(self.reject(AccountError::NonPositiveAmount));
        }
        if self.balance().value().checked_add(amount.value()).is_none() {
            return Err(self.reject(AccountError::BalanceOverflow));
        }

        Ok(Transaction::new(amount.value(), DEPOSIT_PAYEE))
    }

    /// Runs every charge check and returns the transaction that would be
    /// appended, without appending it.
    pub(crate) fn validate_charge<A>(
        &self,
        payee: impl Into<String>,
        amount: A,
    ) -> Result<Transaction, AccountError>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let amount: Amount = amount.try_into().map_err(|e| self.reject(e))?;
        if self.balance() < Balance::new(amount.magnitude()) {
            return Err(self.reject(AccountError::InsufficientFunds));
        }

        Ok(Transaction::new(-amount.magnitude(), payee))
    }

    /// Lists every transaction alongside the balance right after it.
    pub fn statement(&self) -> Statement {
        let mut running = Balance::ZERO;
        let lines = self
            .transactions
            .iter()
            .map(|tx| {
                running += Balance::new(tx.amount());
                StatementLine {
                    date: tx.date(),
                    payee: tx.payee().to_string(),
                    amount: tx.amount(),
                    balance: running,
                }
            })
            .collect();

        Statement {
            account_number: self.account_number,
            owner: self.owner.clone(),
            balance: self.balance(),
            lines,
        }
    }

    fn reject(&self, error: AccountError) -> AccountError {
        self.audit.rejected(self.account_number, &error);
        error
    }

    pub(crate) fn record(&mut self, transaction: Transaction) -> &Transaction {
        self.audit.recorded(self.account_number, &transaction);
        let index = self.transactions.len();
        self.transactions.push(transaction);
        &self.transactions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingAudit {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl AuditLog for RecordingAudit {
        fn recorded(&self, account: AccountNumber, transaction: &Transaction) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{account}: {}", transaction.amount()));
        }

        fn rejected(&self, account: AccountNumber, error: &AccountError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{account}: {error}"));
        }
    }

    fn mozzie() -> Account {
        Account::new(AccountNumber::new(12345), "Mozzie")
    }

    #[test]
    fn test_balance_arithmetic() {
        let b1 = Balance::new(dec!(10.0));
        let b2 = Balance::new(dec!(5.0));
        assert_eq!(b1 + b2, Balance::new(dec!(15.0)));
        assert_eq!(b1 - b2, Balance::new(dec!(5.0)));
        assert_eq!(b2.to_string(), "5.0");
    }

    #[test]
    fn test_account_has_number_and_owner() {
        let account = mozzie();
        assert_eq!(account.account_number(), AccountNumber::new(12345));
        assert_eq!(account.owner(), "Mozzie");
        assert!(account.transactions().is_empty());
        assert_eq!(account.balance(), Balance::ZERO);
    }

    #[test]
    fn test_deposit_records_transaction() {
        let mut account = mozzie();
        let tx = account.deposit(dec!(50.00)).unwrap();
        assert_eq!(tx.amount(), dec!(50.00));
        assert_eq!(tx.payee(), DEPOSIT_PAYEE);
        assert_eq!(account.balance(), Balance::new(dec!(50.00)));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_deposit_rejects_non_numeric() {
        let mut account = mozzie();
        assert_eq!(account.deposit("abc"), Err(AccountError::InvalidInput));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = mozzie();
        assert_eq!(
            account.deposit(dec!(-50.00)),
            Err(AccountError::NonPositiveAmount)
        );
        assert_eq!(account.deposit(dec!(0)), Err(AccountError::NonPositiveAmount));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_deposit_rejects_nan_before_sign_check() {
        let mut account = mozzie();
        assert_eq!(account.deposit(f64::NAN), Err(AccountError::InvalidInput));
        assert_eq!(
            account.deposit(f64::NEG_INFINITY),
            Err(AccountError::InvalidInput)
        );
    }

    #[test]
    fn test_deposit_rejects_balance_overflow() {
        let mut account = mozzie();
        account.deposit(Decimal::MAX).unwrap();

        assert_eq!(
            account.deposit(Decimal::MAX),
            Err(AccountError::BalanceOverflow)
        );
        assert_eq!(
            account.deposit(dec!(1)),
            Err(AccountError::BalanceOverflow)
        );
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(account.balance(), Balance::new(Decimal::MAX));
        assert_eq!(account.statement().balance, Balance::new(Decimal::MAX));
    }

    #[test]
    fn test_charge_at_maximum_balance() {
        let mut account = mozzie();
        account.deposit(Decimal::MAX).unwrap();

        let tx = account.charge("Everything", Decimal::MIN).unwrap();
        assert_eq!(tx.amount(), Decimal::MIN);
        assert_eq!(account.balance(), Balance::ZERO);
    }

    #[test]
    fn test_validation_does_not_append() {
        let mut account = mozzie();
        account.deposit(dec!(10)).unwrap();

        let pending = account.validate_charge("Vet", dec!(4)).unwrap();
        assert_eq!(pending.amount(), dec!(-4));
        assert_eq!(account.transactions().len(), 1);

        assert_eq!(
            account.validate_deposit(dec!(0)),
            Err(AccountError::NonPositiveAmount)
        );

        account.record(pending);
        assert_eq!(account.balance(), Balance::new(dec!(6)));
    }

    #[test]
    fn test_charge_success() {
        let mut account = mozzie();
        account.deposit(dec!(50.00)).unwrap();
        let tx = account.charge("All the treats", dec!(25.50)).unwrap();
        assert_eq!(tx.amount(), dec!(-25.50));
        assert_eq!(tx.payee(), "All the treats");
        assert_eq!(account.balance(), Balance::new(dec!(24.50)));
        assert_eq!(account.transactions().len(), 2);
    }

    #[test]
    fn test_charge_insufficient_funds() {
        let mut account = mozzie();
        account.deposit(dec!(50.00)).unwrap();
        assert_eq!(
            account.charge("All the treats", dec!(52.50)),
            Err(AccountError::InsufficientFunds)
        );
        assert_eq!(account.balance(), Balance::new(dec!(50.00)));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_charge_entire_balance() {
        let mut account = mozzie();
        account.deposit(dec!(50.00)).unwrap();
        assert!(account.charge("Rent", dec!(50.00)).is_ok());
        assert_eq!(account.balance(), Balance::ZERO);
    }

    #[test]
    fn test_charge_normalizes_negative_amount() {
        let mut account = mozzie();
        account.deposit(dec!(30)).unwrap();
        let tx = account.charge("Toys", dec!(-10)).unwrap();
        assert_eq!(tx.amount(), dec!(-10));
        assert_eq!(account.balance(), Balance::new(dec!(20)));

        assert_eq!(
            account.charge("Toys", dec!(-25)),
            Err(AccountError::InsufficientFunds)
        );
    }

    #[test]
    fn test_charge_rejects_non_numeric() {
        let mut account = mozzie();
        account.deposit(dec!(10)).unwrap();
        assert_eq!(
            account.charge("All the treats", "abc"),
            Err(AccountError::InvalidInput)
        );
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_audit_log_receives_outcomes() {
        let audit = RecordingAudit::default();
        let mut account =
            Account::with_audit(AccountNumber::new(7), "Mozzie", audit.clone());

        account.deposit(dec!(5)).unwrap();
        let _ = account.deposit("abc");
        let _ = account.charge("Vet", dec!(6));

        let events = audit.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "7: 5".to_string(),
                "7: Please enter a number".to_string(),
                "7: You do not have enough funds to process this transaction".to_string(),
            ]
        );
    }

    #[test]
    fn test_restore_trusts_history() {
        let history = vec![
            Transaction::new(dec!(10), DEPOSIT_PAYEE),
            Transaction::new(dec!(-4), "Vet"),
        ];
        let account = Account::restore(
            AccountNumber::new(1),
            "Mozzie",
            history.clone(),
            TracingAudit,
        );
        assert_eq!(account.transactions(), history.as_slice());
        assert_eq!(account.balance(), Balance::new(dec!(6)));
    }

    #[test]
    fn test_statement_running_balance() {
        let mut account = mozzie();
        account.deposit(dec!(50.00)).unwrap();
        account.charge("All the treats", dec!(25.50)).unwrap();
        account.deposit(dec!(1)).unwrap();

        let statement = account.statement();
        assert_eq!(statement.account_number, AccountNumber::new(12345));
        assert_eq!(statement.owner, "Mozzie");
        assert_eq!(statement.balance, Balance::new(dec!(25.50)));

        let running: Vec<Balance> = statement.lines.iter().map(|l| l.balance).collect();
        assert_eq!(
            running,
            vec![
                Balance::new(dec!(50.00)),
                Balance::new(dec!(24.50)),
                Balance::new(dec!(25.50)),
            ]
        );
        assert_eq!(statement.lines[1].payee, "All the treats");
    }
}
