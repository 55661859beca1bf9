use rust_decimal::Decimal;

/// One booking row lifted out of the export.
///
/// Text fields are already ASCII-normalized and the date already carries the
/// Quicken `MM/DD/YYYY` form (or the untouched source text when it did not
/// parse).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub date: String,
    pub payee: String,
    pub amount: Decimal,
    pub memo: String,
}
