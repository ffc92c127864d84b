//! Database sources: the bundled UCD extract or a user-supplied file.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Bundled extract of the UCD derived-name data, compiled into the
/// binary so `sluk` works with no setup.
const EMBEDDED_DB: &str = include_str!("../data/derived_names.txt");

/// Where the `CODEPOINT ; DESCRIPTION` text comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Embedded,
    File(PathBuf),
}

impl DataSource {
    /// Pick the source for an optional `--db-file` argument.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => DataSource::File(path),
            None => DataSource::Embedded,
        }
    }

    /// Read the whole database text. A file that cannot be opened is
    /// an error; there is no fallback to the embedded data.
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            DataSource::Embedded => Ok(Cow::Borrowed(EMBEDDED_DB)),
            DataSource::File(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("opening symbol database {}", path.display()))?;
                Ok(Cow::Owned(text))
            }
        }
    }
}
