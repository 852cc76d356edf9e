//! Shared search models and the faceted-search core logic.

extern crate serde;


pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod facets;
pub mod controller;
