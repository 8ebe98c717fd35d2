use std::io::BufRead;

use crate::error::Result;
use crate::io::read_records;
use crate::ranking::sort_by_deviance_desc;
use crate::record::ExperimentRecord;

/// Reads all reports from `reader` and returns their records, worst deviance
/// first.
///
/// The whole input is consumed before sorting, so a malformed line anywhere
/// fails the call without yielding any records.
pub fn combine_reports<R: BufRead>(reader: R) -> Result<Vec<ExperimentRecord>> {
    let mut records = read_records(reader)?;
    sort_by_deviance_desc(&mut records);
    Ok(records)
}
