//! Search pipeline: stream records, match, collect and rank.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::query::SearchQuery;
use crate::record::parse_line;

/// One accepted result: the record plus its match-quality rank
/// (lower is better, 0 is an exact hit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub rank: u32,
    pub code: String,
    pub description: String,
}

/// Run a query over the database text and return ranked matches.
///
/// Records are scanned in input order and discarded as soon as they
/// are scored; accepted matches are then stable-sorted by ascending
/// rank, so equal-rank entries keep their input order. In exact mode
/// every rank is 0 and the output order is the input order.
///
/// The first malformed line aborts the whole search; duplicate codes
/// are kept as separate matches.
pub fn search(db: &str, query: &SearchQuery) -> Result<Vec<SymbolMatch>> {
    let mut matches = Vec::new();

    for (idx, line) in db.lines().enumerate() {
        let record = parse_line(line).with_context(|| format!("line {}", idx + 1))?;
        let Some(record) = record else { continue };

        if let Some(rank) = query.rank(&record.description) {
            matches.push(SymbolMatch {
                rank,
                code: record.code,
                description: record.description,
            });
        }
    }

    matches.sort_by_key(|m| m.rank);
    Ok(matches)
}
