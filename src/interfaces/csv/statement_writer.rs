use crate::domain::statement::Statement;
use crate::error::Result;
use chrono::SecondsFormat;
use std::io::Write;

const HEADERS: [&str; 4] = ["date", "payee", "amount", "balance"];

/// Renders a [`Statement`] as CSV lines or as a JSON document.
pub struct StatementWriter<W: Write> {
    inner: W,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one `date,payee,amount,balance` row per transaction, header
    /// included even when the statement is empty.
    pub fn write_csv(&mut self, statement: &Statement) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.inner);
        writer.write_record(HEADERS)?;
        for line in &statement.lines {
            writer.write_record([
                line.date.to_rfc3339_opts(SecondsFormat::Secs, true),
                line.payee.clone(),
                line.amount.to_string(),
                line.balance.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, statement: &Statement) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.inner, statement)?;
        writeln!(self.inner)?;
        self.inner.flush()?;
        Ok(())
    }
}
