//! Cumulative creation-time series derived from a date histogram.

use chrono::NaiveDate;

use crate::search_const::timeseries_epoch_floor;
use crate::search_result::BucketAggregation;

/// What the line chart displays: growth over time, not per-bucket counts.
/// The cumulative sequence is monotonically non-decreasing by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeseriesModel {
    pub timestamps: Vec<NaiveDate>,
    pub cumulative_counts: Vec<u64>,
}

/// Derive the cumulative line model. Buckets at or before the epoch floor
/// are dropped; the rest keep their given (chronological) order and their
/// counts are summed into a running total. `None` tears down any prior
/// rendering.
pub fn timeseries(agg: Option<&BucketAggregation>) -> Option<TimeseriesModel> {
    let agg = agg?;
    let floor = timeseries_epoch_floor();
    let mut timestamps = Vec::new();
    let mut cumulative_counts = Vec::new();
    let mut running = 0u64;
    for bucket in &agg.buckets {
        let Some(date) = bucket_date(&bucket.key) else {
            continue;
        };
        if date <= floor {
            continue;
        }
        running += bucket.count;
        timestamps.push(date);
        cumulative_counts.push(running);
    }
    if timestamps.is_empty() {
        return None;
    }
    Some(TimeseriesModel { timestamps, cumulative_counts })
}

/// Day-resolution keys arrive as ISO dates ("2018-01-01" or a full
/// "2018-01-01T00:00:00.000Z"); anything else is noise and is dropped.
fn bucket_date(key: &str) -> Option<NaiveDate> {
    let prefix = key.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::Bucket;

    fn agg(entries: &[(&str, u64)]) -> BucketAggregation {
        BucketAggregation {
            buckets: entries
                .iter()
                .map(|(k, c)| Bucket { key: k.to_string(), count: *c })
                .collect(),
            other_count: 0,
        }
    }

    #[test]
    fn absent_or_empty_aggregation_renders_nothing() {
        assert_eq!(timeseries(None), None);
        assert_eq!(timeseries(Some(&agg(&[]))), None);
    }

    #[test]
    fn buckets_before_the_epoch_floor_are_dropped() {
        let model = timeseries(Some(&agg(&[
            ("2016-01-01", 5),
            ("2018-01-01", 2),
            ("2019-01-01", 3),
        ])))
        .expect("model");
        assert_eq!(model.cumulative_counts, vec![2, 5]);
        assert_eq!(model.timestamps.len(), 2);
    }

    #[test]
    fn a_bucket_exactly_on_the_floor_is_excluded() {
        let model = timeseries(Some(&agg(&[("2017-02-01", 9), ("2017-02-02", 1)])))
            .expect("model");
        assert_eq!(model.cumulative_counts, vec![1]);
    }

    #[test]
    fn counts_accumulate_monotonically() {
        let model = timeseries(Some(&agg(&[
            ("2018-01-01", 4),
            ("2018-01-02", 0),
            ("2018-01-03", 6),
        ])))
        .expect("model");
        assert_eq!(model.cumulative_counts, vec![4, 4, 10]);
    }

    #[test]
    fn unparseable_keys_are_dropped_as_noise() {
        let model = timeseries(Some(&agg(&[("garbage", 5), ("2018-06-01", 2)])))
            .expect("model");
        assert_eq!(model.cumulative_counts, vec![2]);
        assert_eq!(timeseries(Some(&agg(&[("nope", 1)]))), None);
    }

    #[test]
    fn full_timestamps_keys_parse_by_date_prefix() {
        let model = timeseries(Some(&agg(&[("2019-04-02T10:00:00.000Z", 3)])))
            .expect("model");
        assert_eq!(model.cumulative_counts, vec![3]);
    }
}
