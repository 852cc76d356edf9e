//! Kind histogram display model and its selection mapping.

use crate::search_const::{KIND_FIELD, OTHER_KINDS_LABEL};
use crate::search_result::{BucketAggregation, FacetSelection};

/// What the bar chart displays: one label and one count per bar, in
/// aggregation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramModel {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Derive the bar-chart model. `None` means tear down any prior rendering:
/// a missing or empty aggregation draws nothing.
pub fn histogram(agg: Option<&BucketAggregation>) -> Option<HistogramModel> {
    let agg = agg?;
    if agg.buckets.is_empty() {
        return None;
    }
    let mut labels: Vec<String> = agg.buckets.iter().map(|b| b.key.clone()).collect();
    let mut counts: Vec<u64> = agg.buckets.iter().map(|b| b.count).collect();
    if agg.other_count > 0 {
        labels.push(OTHER_KINDS_LABEL.to_string());
        counts.push(agg.other_count);
    }
    Some(HistogramModel { labels, counts })
}

/// Map a selected bar back to a refinement. The synthetic "other" bucket has
/// no concrete kind to refine by and selects nothing.
pub fn selection_at(agg: &BucketAggregation, index: usize) -> Option<FacetSelection> {
    let bucket = agg.buckets.get(index)?;
    Some(FacetSelection {
        field: KIND_FIELD.to_string(),
        value: bucket.key.clone(),
    })
}

/// Whole-number tick values for the count axis. Fractional ticks make no
/// sense for document counts.
pub fn integer_ticks(max_count: u64, desired: usize) -> Vec<u64> {
    if max_count == 0 || desired == 0 {
        return vec![0];
    }
    let step = (max_count / desired as u64).max(1);
    (0..=max_count).step_by(step as usize).collect()
}
