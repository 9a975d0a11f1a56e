//! Quoted-CSV field splitting for a single CUP line.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};

/// Reads one line as a CSV record. Commas inside double quotes do not
/// separate fields and surrounding whitespace is trimmed. Blank lines and
/// lines starting with `*` give `None`.
pub fn read_record(line: &str) -> Result<Option<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'*'))
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| Error::record(e.to_string()))?;
    Ok(if found { Some(record) } else { None })
}
