use std::fs;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{Error, Result};

/// Read an export into decoded lines.
///
/// Bank exports arrive in whatever encoding the download path produced, so
/// decoding tries strict UTF-8 first (a leading BOM is sniffed and dropped)
/// and falls back to WINDOWS-1252 for the legacy latin-1 exports. Exhausting
/// the chain is a [`Error::DecodeError`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes).ok_or_else(|| Error::DecodeError {
        path: path.to_path_buf(),
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

fn decode(bytes: &[u8]) -> Option<String> {
    for encoding in [UTF_8, WINDOWS_1252] {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8() {
        assert_eq!(decode("Bäckerei".as_bytes()).unwrap(), "Bäckerei");
    }

    #[test]
    fn strips_utf8_bom() {
        assert_eq!(decode(b"\xef\xbb\xbfKontoname;X").unwrap(), "Kontoname;X");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Bäckerei" with a latin-1 a-umlaut, invalid as UTF-8.
        assert_eq!(decode(b"B\xe4ckerei").unwrap(), "Bäckerei");
    }

    #[test]
    fn read_lines_splits_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        fs::write(&path, "a;b\r\nc;d\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a;b", "c;d"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_lines(Path::new("/nonexistent/export.csv")).is_err());
    }
}
