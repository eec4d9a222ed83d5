use crate::domain::account::AccountNumber;
use crate::domain::ports::TransactionStore;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory transaction history.
///
/// Uses `Arc<RwLock<HashMap<AccountNumber, Vec<Transaction>>>>`, so clones
/// share the same histories. Nothing survives the process.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    histories: Arc<RwLock<HashMap<AccountNumber, Vec<Transaction>>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn append(&self, account: AccountNumber, tx: Transaction) -> Result<()> {
        let mut histories = self.histories.write().await;
        histories.entry(account).or_default().push(tx);
        Ok(())
    }

    async fn load_all(&self, account: AccountNumber) -> Result<Vec<Transaction>> {
        let histories = self.histories.read().await;
        Ok(histories.get(&account).cloned().unwrap_or_default())
    }
}
