use crate::domain::account::{Account, AccountNumber, Balance};
use crate::domain::amount::Amount;
use crate::domain::audit::{AuditLog, TracingAudit};
use crate::domain::ports::TransactionStoreBox;
use crate::domain::statement::Statement;
use crate::domain::transaction::Transaction;
use crate::error::{AccountError, Result};

/// An operation requested from outside the process.
///
/// Amounts stay raw text until they reach the account, which performs the
/// numeric check.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Deposit { amount: String },
    Charge { payee: String, amount: String },
}

/// Drives a single account and mirrors every accepted transaction into a
/// [`TransactionStore`](crate::domain::ports::TransactionStore).
///
/// Every mutation takes `&mut self`, so checking the balance and appending
/// the resulting transaction happen without any interleaving. A transaction
/// reaches the account only after the store has accepted it.
pub struct Teller<L = TracingAudit> {
    account: Account<L>,
    store: TransactionStoreBox,
}

impl Teller {
    /// Opens an account, replaying whatever history the store already holds.
    pub async fn open(
        account_number: AccountNumber,
        owner: impl Into<String>,
        store: TransactionStoreBox,
    ) -> Result<Self> {
        Self::open_with_audit(account_number, owner, store, TracingAudit).await
    }
}

impl<L: AuditLog> Teller<L> {
    pub async fn open_with_audit(
        account_number: AccountNumber,
        owner: impl Into<String>,
        store: TransactionStoreBox,
        audit: L,
    ) -> Result<Self> {
        let history = store.load_all(account_number).await?;
        tracing::debug!(
            account = %account_number,
            transactions = history.len(),
            "account opened"
        );

        Ok(Self {
            account: Account::restore(account_number, owner, history, audit),
            store,
        })
    }

    pub async fn deposit<A>(&mut self, amount: A) -> Result<()>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let tx = self.account.validate_deposit(amount)?;
        self.commit(tx).await
    }

    pub async fn charge<A>(&mut self, payee: impl Into<String>, amount: A) -> Result<()>
    where
        A: TryInto<Amount, Error = AccountError>,
    {
        let tx = self.account.validate_charge(payee, amount)?;
        self.commit(tx).await
    }

    pub async fn apply(&mut self, operation: Operation) -> Result<()> {
        match operation {
            Operation::Deposit { amount } => self.deposit(amount.as_str()).await,
            Operation::Charge { payee, amount } => self.charge(payee, amount.as_str()).await,
        }
    }

    async fn commit(&mut self, tx: Transaction) -> Result<()> {
        self.store
            .append(self.account.account_number(), tx.clone())
            .await?;
        self.account.record(tx);
        Ok(())
    }

    pub fn account(&self) -> &Account<L> {
        &self.account
    }

    pub fn balance(&self) -> Balance {
        self.account.balance()
    }

    pub fn statement(&self) -> Statement {
        self.account.statement()
    }
}
