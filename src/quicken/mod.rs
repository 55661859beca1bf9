use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::transaction::Transaction;
use crate::error::Result;

/// Column order Quicken expects; every column must be present even when
/// blank, so the importer keeps its fixed positions.
const COLUMNS: [&str; 10] = [
    "Date",
    "Payee",
    "FI Payee",
    "Amount",
    "Debit/Credit",
    "Category",
    "Account",
    "Tag",
    "Memo",
    "Chknum",
];

/// One output row; field order mirrors [`COLUMNS`].
#[derive(Debug, Serialize)]
struct QuickenRecord<'a> {
    date: &'a str,
    payee: &'a str,
    fi_payee: &'a str,
    amount: String,
    debit_credit: &'a str,
    category: &'a str,
    account: &'a str,
    tag: &'a str,
    memo: &'a str,
    chknum: &'a str,
}

/// Serialize `transactions` as Quicken CSV.
///
/// The header row is always written, so a run that parsed nothing still
/// produces a well-formed (empty-body) file. The debit/credit column stays
/// blank; the signed amount carries the direction.
pub fn write(account_name: &str, transactions: &[Transaction], writer: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(COLUMNS)?;
    for tx in transactions {
        writer.serialize(QuickenRecord {
            date: &tx.date,
            payee: &tx.payee,
            fi_payee: "",
            amount: format!("{:.2}", tx.amount),
            debit_credit: "",
            category: "",
            account: account_name,
            tag: "",
            memo: &tx.memo,
            chknum: "",
        })?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_file(path: &Path, account_name: &str, transactions: &[Transaction]) -> Result<()> {
    let file = File::create(path)?;
    write(account_name, transactions, file)
}
