//! Streaming output helpers for machine-readable result lists.

use std::io::Write;

use anyhow::Result;

use crate::search::SymbolMatch;

/// Write results as a prettified JSON array.
pub fn write_json_pretty(results: &[SymbolMatch], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write results as newline-delimited JSON (NDJSON).
pub fn write_ndjson(results: &[SymbolMatch], mut w: impl Write) -> Result<()> {
    for item in results {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matches() -> Vec<SymbolMatch> {
        vec![
            SymbolMatch {
                rank: 0,
                code: "2705".to_string(),
                description: "WHITE HEAVY CHECK MARK".to_string(),
            },
            SymbolMatch {
                rank: 2,
                code: "2713".to_string(),
                description: "CHECK MARK".to_string(),
            },
        ]
    }

    #[test]
    fn ndjson_writes_one_line_per_match() {
        let mut buf = Vec::new();
        write_ndjson(&sample_matches(), &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: SymbolMatch = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(parsed.code, "2705");
    }

    #[test]
    fn pretty_json_is_a_single_array() {
        let mut buf = Vec::new();
        write_json_pretty(&sample_matches(), &mut buf).expect("write json");

        let parsed: serde_json::Value =
            serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }
}
