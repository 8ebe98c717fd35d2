use std::cmp::Ordering;

use crate::record::ExperimentRecord;

/// Orders records from the highest `avg_deviance` to the lowest.
///
/// The sort is stable, so records with equal deviance keep their input order.
/// NaN deviances go last.
pub fn sort_by_deviance_desc(records: &mut [ExperimentRecord]) {
    records.sort_by(|a, b| deviance_desc(a.avg_deviance, b.avg_deviance));
}

fn deviance_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
