//! Constants shared by the search core and its presentation.

use chrono::NaiveDate;

/// Results per page, matching the page size of the crawl service.
pub const PAGE_SIZE: i64 = 10;

/// Field name the kind histogram refines by.
pub const KIND_FIELD: &str = "kind";

/// Label of the synthetic bucket holding kinds outside the aggregation.
pub const OTHER_KINDS_LABEL: &str = "Other Kinds";

/// Timeseries buckets dated at or before this floor are historical noise
/// and are dropped before charting.
pub fn timeseries_epoch_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 2, 1).expect("fixed calendar date")
}
