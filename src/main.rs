use bankbook::application::teller::Teller;
use bankbook::domain::account::AccountNumber;
use bankbook::infrastructure::in_memory::InMemoryTransactionStore;
use bankbook::interfaces::csv::operation_reader::OperationReader;
use bankbook::interfaces::csv::statement_writer::StatementWriter;
use bankbook::observability;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operations CSV file (`type,payee,amount`)
    input: PathBuf,

    /// Account number the operations are applied to
    #[arg(long, default_value_t = 1)]
    account_number: u64,

    /// Account owner shown on the statement
    #[arg(long, default_value = "Owner")]
    owner: String,

    /// Statement output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_json);

    let store = Box::new(InMemoryTransactionStore::new());
    let mut teller = Teller::open(AccountNumber::new(cli.account_number), cli.owner, store)
        .await
        .into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);
    for (index, operation) in reader.operations().enumerate() {
        let row = index + 1;
        match operation {
            Ok(operation) => {
                if let Err(e) = teller.apply(operation).await {
                    eprintln!("Rejected operation on row {row}: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading operation on row {row}: {e}");
            }
        }
    }
    tracing::info!(balance = %teller.balance(), "operations processed");

    let statement = teller.statement();
    let stdout = io::stdout();
    let mut writer = StatementWriter::new(stdout.lock());
    match cli.format {
        Format::Csv => writer.write_csv(&statement),
        Format::Json => writer.write_json(&statement),
    }
    .into_diagnostic()?;

    Ok(())
}
