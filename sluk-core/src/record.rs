//! Line parser for the `CODEPOINT ; DESCRIPTION` database format.

use anyhow::{anyhow, Result};

/// One parsed entry from the mapping database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code: String,
    pub description: String,
}

/// Parse a single raw line.
///
/// Returns `Ok(None)` for blank lines and comment lines (first
/// non-space character is `#`). Otherwise the line must contain a `;`
/// delimiter; the code is the trimmed text before the first `;`, the
/// description the trimmed text between the first and (if any) second
/// `;`. Fields past the second are ignored.
pub fn parse_line(line: &str) -> Result<Option<Record>> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (code, rest) = line
        .split_once(';')
        .ok_or_else(|| anyhow!("malformed record, expected `CODEPOINT ; DESCRIPTION`: {line}"))?;

    let description = rest.split(';').next().unwrap_or("");

    Ok(Some(Record {
        code: code.trim().to_string(),
        description: description.trim().to_string(),
    }))
}
