//! Aggregation-driven facet display models.

pub mod histogram;
pub mod timeseries;
