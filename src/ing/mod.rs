//! Parsing of ING (Germany) CSV exports.
//!
//! An export carries a variable-length metadata preamble (account holder,
//! IBAN, date range) before the transaction table, so the table is located
//! by scanning for its header row instead of assuming a fixed offset.
//! Transaction rows are semicolon-separated:
//! 0 Buchung, 1 Wertstellung, 2 Auftraggeber/Empfaenger, 3 Buchungstext,
//! 4 Verwendungszweck, 5 Saldo, 6 Waehrung, 7 Betrag, 8 Waehrung.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::transaction::Transaction;
use crate::error::{Error, Result};
use crate::normalize::to_ascii;

const DELIMITER: char = ';';

/// First field of the preamble line declaring the account name.
const ACCOUNT_LABEL: &str = "kontoname";

/// The transaction table header starts with this field and names the amount
/// column further right; matching on both avoids umlaut-bearing fields.
const TABLE_PREFIX: &str = "Buchung;";
const AMOUNT_COLUMN: &str = ";Betrag";

/// The account declaration sits in the preamble, never past the first lines.
const PREAMBLE_LINES: usize = 20;

/// Columns up to and including Betrag.
const MIN_COLUMNS: usize = 8;

/// Account name declared by the export itself, e.g. `Kontoname;Girokonto`.
///
/// Returns `default_account` when no declaration is found or its value is
/// empty. The conversion pipeline keys the output on the configured account
/// name instead, so this only reports what the export claims.
pub fn extract_account_name(lines: &[String], default_account: &str) -> String {
    for line in lines.iter().take(PREAMBLE_LINES) {
        let mut fields = line.split(DELIMITER);
        let (Some(label), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        if !label.trim().to_lowercase().starts_with(ACCOUNT_LABEL) {
            continue;
        }
        let name = value.trim().trim_end_matches(',');
        if name.is_empty() {
            break;
        }
        return name.to_string();
    }
    default_account.to_string()
}

/// Index of the first row after the transaction table header, or `None` when
/// the buffer contains no such header.
pub fn find_table_start(lines: &[String]) -> Option<usize> {
    lines
        .iter()
        .position(|line| {
            let header = line.trim();
            header.starts_with(TABLE_PREFIX) && header.contains(AMOUNT_COLUMN)
        })
        .map(|idx| idx + 1)
}

/// Parse all transaction rows below the table header, in input order.
///
/// Rows that are blank, under-populated, or carry an unparseable amount are
/// skipped; a missing table header fails the whole run.
pub fn parse_transactions(lines: &[String]) -> Result<Vec<Transaction>> {
    let start = find_table_start(lines).ok_or(Error::MissingTableHeader)?;

    let mut transactions = Vec::new();
    for raw in &lines[start..] {
        let line = raw.trim();
        if line.is_empty() || !line.contains(DELIMITER) {
            continue;
        }
        let cols: Vec<&str> = line.split(DELIMITER).collect();
        if cols.len() < MIN_COLUMNS {
            continue;
        }

        let booking_date = cols[0].trim();
        // Concatenated exports repeat the table header mid-file.
        if booking_date.to_lowercase().starts_with("buchung") {
            continue;
        }

        let Some(amount) = parse_amount(cols[7]) else {
            continue;
        };

        let booking_text = to_ascii(cols[3]);
        let purpose = to_ascii(cols[4]);

        transactions.push(Transaction {
            date: format_booking_date(booking_date),
            payee: to_ascii(cols[2]),
            amount,
            memo: build_memo(&booking_text, &purpose),
        });
    }

    Ok(transactions)
}

/// Parse a German-formatted amount such as `-1.770,00` or `250,00`.
///
/// Stray characters (currency codes, spaces) are discarded before the
/// thousands dots are dropped and the decimal comma swapped for a dot. An
/// empty or sign-only remainder counts as zero; anything else that still
/// fails to parse returns `None` so the caller can drop the row.
fn parse_amount(text: &str) -> Option<Decimal> {
    let kept: String = text
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
        .collect();
    let clean = kept.replace('.', "").replace(',', ".");
    if matches!(clean.as_str(), "" | "+" | "-") {
        return Some(Decimal::ZERO);
    }
    clean.parse().ok()
}

/// Reformat `14.08.2025` (or `14.08.25`) to Quicken's `08/14/2025`.
///
/// The pattern is chosen by the width of the year segment so a two-digit
/// year goes through the century pivot instead of parsing literally. Dates
/// that fit neither pattern pass through unchanged; Quicken will likely
/// reject them, but the data is preserved.
fn format_booking_date(text: &str) -> String {
    let pattern = match text.rsplit('.').next().map(str::len) {
        Some(4) => "%d.%m.%Y",
        Some(2) => "%d.%m.%y",
        _ => return text.to_string(),
    };
    match NaiveDate::parse_from_str(text, pattern) {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => text.to_string(),
    }
}

/// Join booking text and purpose, skipping an empty or duplicated purpose.
fn build_memo(booking_text: &str, purpose: &str) -> String {
    let mut parts = Vec::new();
    if !booking_text.is_empty() {
        parts.push(booking_text);
    }
    if !purpose.is_empty() && purpose != booking_text {
        parts.push(purpose);
    }
    parts.join(" | ")
}
