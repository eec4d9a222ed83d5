use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes an operations CSV (`type,payee,amount`) with the given rows.
pub fn write_operations(path: &Path, rows: &[[&str; 3]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "payee", "amount"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
