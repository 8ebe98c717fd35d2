use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{CombineError, Result};
use crate::record::{ExperimentRecord, HEADER};

/// Lines that carry no record: blanks, `#` comments and header lines.
///
/// Expects the line already trimmed. Any line ending in `avg_deviance` counts
/// as a header, which lets concatenated reports repeat theirs mid-stream.
pub fn is_skipped_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.ends_with("avg_deviance")
}

/// Reads every record from `reader`, in input order.
///
/// Stops at the first malformed line; nothing read so far is returned.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ExperimentRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if is_skipped_line(line) {
            skipped += 1;
            continue;
        }
        let record = line
            .parse::<ExperimentRecord>()
            .map_err(|source| CombineError::Malformed {
                line: idx + 1,
                source,
            })?;
        records.push(record);
    }
    debug!(records = records.len(), skipped, "input consumed");
    Ok(records)
}

pub fn write_report<W: Write>(mut writer: W, records: &[ExperimentRecord]) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()
}
