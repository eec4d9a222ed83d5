use super::account::AccountNumber;
use super::transaction::Transaction;
use crate::error::AccountError;

/// Observer notified of every outcome of an account operation.
///
/// Injected into the account instead of writing to a global console, so the
/// functional result never depends on where the messages end up.
pub trait AuditLog {
    fn recorded(&self, _account: AccountNumber, _transaction: &Transaction) {}

    fn rejected(&self, account: AccountNumber, error: &AccountError);
}

/// Default audit log: emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditLog for TracingAudit {
    fn recorded(&self, account: AccountNumber, transaction: &Transaction) {
        tracing::debug!(
            %account,
            amount = %transaction.amount(),
            payee = transaction.payee(),
            "transaction recorded"
        );
    }

    fn rejected(&self, account: AccountNumber, error: &AccountError) {
        tracing::info!(%account, reason = ?error, "{error}");
    }
}
