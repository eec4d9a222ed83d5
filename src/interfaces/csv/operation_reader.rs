use crate::application::teller::Operation;
use crate::error::{LedgerError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum OperationType {
    Deposit,
    Charge,
}

/// Raw CSV row. The amount is kept as text; deposits leave `payee` blank.
#[derive(Debug, Deserialize)]
struct OperationRow {
    r#type: OperationType,
    #[serde(default)]
    payee: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

impl OperationRow {
    fn into_operation(self) -> Result<Operation> {
        let amount = self.amount.unwrap_or_default();
        match self.r#type {
            OperationType::Deposit => Ok(Operation::Deposit { amount }),
            OperationType::Charge => match self.payee {
                Some(payee) => Ok(Operation::Charge { payee, amount }),
                None => Err(LedgerError::MalformedRow(format!(
                    "charge of '{amount}' has no payee"
                ))),
            },
        }
    }
}

/// Reads account operations from a CSV source with headers
/// `type,payee,amount`.
///
/// Whitespace is trimmed and short rows are accepted.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one operation per data row.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize::<OperationRow>()
            .map(|result| {
                result
                    .map_err(LedgerError::from)
                    .and_then(OperationRow::into_operation)
            })
    }
}
