use super::account::AccountNumber;
use super::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only history of accepted transactions, keyed by account.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn append(&self, account: AccountNumber, tx: Transaction) -> Result<()>;
    /// Returns the history in insertion order, empty for unknown accounts.
    async fn load_all(&self, account: AccountNumber) -> Result<Vec<Transaction>>;
}

pub type TransactionStoreBox = Box<dyn TransactionStore>;
