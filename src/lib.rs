mod combine;
mod error;
mod io;
mod ranking;
mod record;

pub use combine::combine_reports;
pub use error::{CombineError, MalformedRecordError, Result};
pub use io::{is_skipped_line, read_records, write_report};
pub use ranking::sort_by_deviance_desc;
pub use record::{ExperimentRecord, COLUMNS, HEADER};
