use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read input file")]
    FileError(#[from] std::io::Error),
    #[error("could not decode {} with any supported encoding", .path.display())]
    DecodeError { path: PathBuf },
    #[error("could not locate transaction header row starting with 'Buchung;' in input file")]
    MissingTableHeader,
    #[error("could not write Quicken CSV rows")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
