//! Canonical search intent and its navigable parameter codec.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// One raw navigation parameter, resolved into scalar or sequence exactly
/// once at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    pub fn first(&self) -> Option<&str> {
        match self {
            ParamValue::Single(v) => Some(v.as_str()),
            ParamValue::Multiple(vs) => vs.first().map(|v| v.as_str()),
        }
    }

    pub fn values(&self) -> Vec<String> {
        match self {
            ParamValue::Single(v) => vec![v.clone()],
            ParamValue::Multiple(vs) => vs.clone(),
        }
    }
}

/// Endpoint a query state dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEndpoint {
    /// Full-text search over the index.
    Search,
    /// Aggregation-only browse view used when no free text is given.
    Metrics,
}

impl SearchEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            SearchEndpoint::Search => "search",
            SearchEndpoint::Metrics => "metrics",
        }
    }
}

/// The canonical search intent. Superseded, never mutated in place: every
/// user action produces a new state and re-navigates, so the URL stays the
/// only durable store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Ordered query tokens, each free text or a `field=value` refinement.
    /// Never empty, never containing duplicates.
    pub terms: Vec<String>,
    /// Number of results to skip. May be negative right after decoding;
    /// the controller clamps and re-navigates before any query is issued.
    pub offset: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState { terms: vec![String::new()], offset: 0 }
    }
}

impl QueryState {
    /// Build a state from raw navigation parameters. Never fails: malformed
    /// values fall back to the empty query at offset 0.
    pub fn decode(raw: &BTreeMap<String, ParamValue>) -> Self {
        let mut terms: Vec<String> = Vec::new();
        if let Some(q) = raw.get("q") {
            for term in q.values() {
                if !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        if terms.is_empty() {
            // legacy single-box search: no query means one empty term
            terms.push(String::new());
        }
        let offset = raw
            .get("from")
            .and_then(|v| v.first())
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);
        QueryState { terms, offset }
    }

    /// Flatten the state back into navigation parameters.
    pub fn encode(&self) -> BTreeMap<String, ParamValue> {
        let mut raw = BTreeMap::new();
        raw.insert("q".to_string(), ParamValue::Multiple(self.terms.clone()));
        raw.insert("from".to_string(), ParamValue::Single(self.offset.to_string()));
        raw
    }

    /// Append a term. Adding one that is already present is a silent no-op
    /// so refinements stay idempotent.
    pub fn add_term(&self, term: &str) -> Self {
        if self.terms.iter().any(|t| t == term) {
            return self.clone();
        }
        let mut next = self.clone();
        next.terms.push(term.to_string());
        next
    }

    /// Pick the endpoint for this state. Any non-empty free-text token means
    /// a full search; a query made only of refinements (or nothing at all)
    /// browses the aggregate metrics. Evaluated per dispatch, never cached.
    pub fn endpoint(&self) -> SearchEndpoint {
        let has_free_text = self
            .terms
            .iter()
            .any(|t| !t.is_empty() && !is_refinement(t));
        if has_free_text {
            SearchEndpoint::Search
        } else {
            SearchEndpoint::Metrics
        }
    }
}

/// A `field=value` token with a non-empty field part.
pub fn is_refinement(term: &str) -> bool {
    match term.split_once('=') {
        Some((field, _)) => !field.is_empty(),
        None => false,
    }
}
