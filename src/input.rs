//! Loading tables from CSV input.
//!
//! Only `text/csv` input reaches the transform; anything else is rejected up
//! front with [`InputError::UnsupportedType`].

use crate::models::Table;
use csv::ReaderBuilder;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CSV_MEDIA_TYPE: &str = "text/csv";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Sorry, currently we only support csv files. Please try another file.")]
    UnsupportedType { media_type: Option<String> },
    #[error("could not parse CSV: {reason}")]
    Parse { reason: String },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `text/csv` for a `.csv` file name (any case), `None` for everything else.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    ext.eq_ignore_ascii_case("csv").then_some(CSV_MEDIA_TYPE)
}

/// Reject everything that is not `text/csv`.
///
/// Parameters after `;` (e.g. `text/csv; charset=utf-8`) are ignored.
pub fn ensure_csv(media_type: Option<&str>) -> Result<(), InputError> {
    let essence = media_type.map(|m| m.split(';').next().unwrap_or("").trim().to_ascii_lowercase());
    match essence.as_deref() {
        Some(CSV_MEDIA_TYPE) => Ok(()),
        _ => Err(InputError::UnsupportedType {
            media_type: media_type.map(str::to_string),
        }),
    }
}

/// Parse raw CSV bytes into rows of text cells.
///
/// No header handling: the first record is row 0 of the table. Rows may have
/// different lengths.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = Table::new();
    for record in rdr.records() {
        let record = record.map_err(|e| InputError::Parse {
            reason: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!("parsed {} CSV rows", rows.len());
    Ok(rows)
}

/// Check the media type, then parse.
pub fn table_from_bytes(media_type: Option<&str>, bytes: &[u8]) -> Result<Table, InputError> {
    ensure_csv(media_type)?;
    parse_csv(bytes)
}

/// Read and parse a `.csv` file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table, InputError> {
    let path = path.as_ref();
    ensure_csv(media_type_for_path(path))?;
    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_types_from_extension() {
        assert_eq!(media_type_for_path(Path::new("a/b.CSV")), Some(CSV_MEDIA_TYPE));
        assert_eq!(media_type_for_path(Path::new("b.json")), None);
        assert_eq!(media_type_for_path(Path::new("c.tsv")), None);
        assert_eq!(media_type_for_path(Path::new("noext")), None);
    }

    #[test]
    fn only_csv_passes() {
        assert!(ensure_csv(Some("text/csv")).is_ok());
        assert!(ensure_csv(Some("text/csv; charset=utf-8")).is_ok());
        assert!(matches!(
            ensure_csv(Some("application/json")),
            Err(InputError::UnsupportedType { .. })
        ));
        assert!(ensure_csv(None).is_err());
    }

    #[test]
    fn ragged_rows_are_kept() {
        let t = parse_csv(b"a,b,c\n1,2\n3,4,5,6\n").unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t[1], vec!["1", "2"]);
        assert_eq!(t[2].len(), 4);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = parse_csv(b"a,b\n\xff\xfe,1\n").unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }
}
