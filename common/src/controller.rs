//! The faceted-search state machine.
//!
//! The controller owns the canonical [`QueryState`] for one query cycle and
//! reacts to navigation, pagination, refinement and gateway outcomes by
//! returning explicit [`Effect`]s for the caller to execute. It performs no
//! I/O itself, which keeps every invariant testable without a network.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::search_const::PAGE_SIZE;
use crate::search_query::{ParamValue, QueryState, SearchEndpoint};
use crate::search_result::{FacetSelection, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Displaying,
    /// A gateway call failed; the previous result stays visible and
    /// navigation remains possible.
    ErrorDisplaying,
}

/// What the caller must do next. `Navigate` pushes new parameters into the
/// URL (the only durable store); `Dispatch` runs exactly one gateway call
/// and feeds the outcome back through [`SearchController::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate(BTreeMap<String, ParamValue>),
    Dispatch {
        state: QueryState,
        endpoint: SearchEndpoint,
        seq: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    state: QueryState,
    phase: Phase,
    result: Option<SearchResult>,
    error: Option<String>,
    issued: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        SearchController {
            state: QueryState::default(),
            phase: Phase::Idle,
            result: None,
            error: None,
            issued: 0,
        }
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The most recent result, retained through `ErrorDisplaying`.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handle one navigation event. A negative offset is corrected by a
    /// re-navigation with the clamped value; no query is issued until the
    /// corrected parameters come back around, so the gateway never sees a
    /// negative offset and the URL always matches the displayed state.
    pub fn navigate(&mut self, raw: &BTreeMap<String, ParamValue>) -> Effect {
        let decoded = QueryState::decode(raw);
        if decoded.offset < 0 {
            let corrected = QueryState { offset: 0, ..decoded };
            return Effect::Navigate(corrected.encode());
        }
        let endpoint = decoded.endpoint();
        self.state = decoded;
        self.phase = Phase::Loading;
        self.issued += 1;
        Effect::Dispatch {
            state: self.state.clone(),
            endpoint,
            seq: self.issued,
        }
    }

    /// Feed back one gateway outcome. A response whose sequence number is
    /// not the most recently issued one belongs to a superseded request and
    /// is dropped, so a slow response can never overwrite a newer one.
    pub fn resolve<E: Display>(&mut self, seq: u64, outcome: Result<SearchResult, E>) {
        if seq != self.issued {
            return;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.phase = Phase::Displaying;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = Phase::ErrorDisplaying;
            }
        }
    }

    /// User-initiated search. A changed query invalidates the pagination
    /// cursor, so the offset always resets to 0.
    pub fn submit_search(&self, terms: Vec<String>) -> Effect {
        let mut next = QueryState { terms: Vec::new(), offset: 0 };
        for term in terms {
            if !next.terms.contains(&term) {
                next.terms.push(term);
            }
        }
        if next.terms.is_empty() {
            next.terms.push(String::new());
        }
        Effect::Navigate(next.encode())
    }

    /// Merge one facet selection and restart the cycle as a fresh search.
    /// A duplicate refinement leaves the terms untouched but still
    /// re-navigates with the offset reset.
    pub fn select_facet(&self, selection: &FacetSelection) -> Effect {
        let refined = self.state.add_term(&selection.as_term());
        let next = QueryState { offset: 0, ..refined };
        Effect::Navigate(next.encode())
    }

    /// Advance one page, keeping the terms. Callers guard with
    /// [`Self::last_page`].
    pub fn next_page(&self) -> Effect {
        self.renavigate_with_offset(self.state.offset + PAGE_SIZE)
    }

    /// Go back one page. May produce a negative offset; the following
    /// [`Self::navigate`] clamps it and re-navigates.
    pub fn prev_page(&self) -> Effect {
        self.renavigate_with_offset(self.state.offset - PAGE_SIZE)
    }

    fn renavigate_with_offset(&self, offset: i64) -> Effect {
        let next = QueryState { offset, ..self.state.clone() };
        Effect::Navigate(next.encode())
    }

    pub fn total_hits(&self) -> u64 {
        self.result.as_ref().map(|r| r.total_hits).unwrap_or(0)
    }

    pub fn first_page(&self) -> bool {
        self.state.offset <= 0
    }

    pub fn last_page(&self) -> bool {
        self.state.offset + PAGE_SIZE >= self.total_hits() as i64
    }

    /// Pagination controls are disabled while a query is in flight.
    pub fn nav_disabled(&self) -> bool {
        self.phase == Phase::Loading
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::SearchResult;

    fn params(q: &[&str], from: &str) -> BTreeMap<String, ParamValue> {
        let mut raw = BTreeMap::new();
        raw.insert(
            "q".to_string(),
            ParamValue::Multiple(q.iter().map(|s| s.to_string()).collect()),
        );
        raw.insert("from".to_string(), ParamValue::Single(from.to_string()));
        raw
    }

    fn result_with_total(total_hits: u64) -> SearchResult {
        SearchResult { total_hits, ..SearchResult::default() }
    }

    fn dispatch_seq(effect: &Effect) -> u64 {
        match effect {
            Effect::Dispatch { seq, .. } => *seq,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn navigation_dispatches_one_query_and_enters_loading() {
        let mut controller = SearchController::new();
        let effect = controller.navigate(&params(&["foo"], "0"));
        match effect {
            Effect::Dispatch { state, endpoint, seq } => {
                assert_eq!(state.terms, vec!["foo".to_string()]);
                assert_eq!(endpoint, SearchEndpoint::Search);
                assert_eq!(seq, 1);
            }
            other => panic!("expected dispatch, got {other:?}"),
        }
        assert_eq!(controller.phase(), Phase::Loading);
        assert!(controller.nav_disabled());
    }

    #[test]
    fn negative_offset_renavigates_clamped_without_dispatching() {
        let mut controller = SearchController::new();
        let effect = controller.navigate(&params(&["foo"], "-5"));
        match effect {
            Effect::Navigate(raw) => {
                let corrected = QueryState::decode(&raw);
                assert_eq!(corrected.offset, 0);
                assert_eq!(corrected.terms, vec!["foo".to_string()]);
            }
            other => panic!("expected re-navigation, got {other:?}"),
        }
        // nothing was issued, so the controller never left Idle
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn success_resolution_enters_displaying() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&[""], "0")));
        controller.resolve::<String>(seq, Ok(result_with_total(50)));
        assert_eq!(controller.phase(), Phase::Displaying);
        assert_eq!(controller.total_hits(), 50);
        assert!(!controller.nav_disabled());
    }

    #[test]
    fn failure_keeps_the_previous_result_visible() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "0")));
        controller.resolve::<String>(seq, Ok(result_with_total(50)));

        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "10")));
        controller.resolve(seq, Err::<SearchResult, _>("connection reset"));
        assert_eq!(controller.phase(), Phase::ErrorDisplaying);
        assert_eq!(controller.error(), Some("connection reset"));
        assert_eq!(controller.total_hits(), 50);
    }

    #[test]
    fn stale_responses_are_fenced_off() {
        let mut controller = SearchController::new();
        let first = dispatch_seq(&controller.navigate(&params(&["foo"], "0")));
        let second = dispatch_seq(&controller.navigate(&params(&["bar"], "0")));
        assert!(second > first);

        // the newer request resolves first
        controller.resolve::<String>(second, Ok(result_with_total(7)));
        // the slow response from the superseded request arrives late
        controller.resolve::<String>(first, Ok(result_with_total(999)));

        assert_eq!(controller.total_hits(), 7);
        assert_eq!(controller.phase(), Phase::Displaying);
    }

    #[test]
    fn submit_search_resets_the_offset() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "30")));
        controller.resolve::<String>(seq, Ok(result_with_total(100)));

        match controller.submit_search(vec!["bar".to_string()]) {
            Effect::Navigate(raw) => {
                let next = QueryState::decode(&raw);
                assert_eq!(next.offset, 0);
                assert_eq!(next.terms, vec!["bar".to_string()]);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn submit_search_with_no_terms_is_the_empty_browse_query() {
        let controller = SearchController::new();
        match controller.submit_search(Vec::new()) {
            Effect::Navigate(raw) => {
                assert_eq!(QueryState::decode(&raw), QueryState::default());
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn pagination_adjusts_offset_and_keeps_terms() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "10")));
        controller.resolve::<String>(seq, Ok(result_with_total(100)));

        match controller.next_page() {
            Effect::Navigate(raw) => {
                let next = QueryState::decode(&raw);
                assert_eq!(next.offset, 20);
                assert_eq!(next.terms, vec!["foo".to_string()]);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
        match controller.prev_page() {
            Effect::Navigate(raw) => {
                assert_eq!(QueryState::decode(&raw).offset, 0);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn facet_selection_merges_a_term_and_resets_the_offset() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "20")));
        controller.resolve::<String>(seq, Ok(result_with_total(100)));

        let selection = FacetSelection {
            field: "kind".to_string(),
            value: "Deployment".to_string(),
        };
        match controller.select_facet(&selection) {
            Effect::Navigate(raw) => {
                let next = QueryState::decode(&raw);
                assert_eq!(next.offset, 0);
                assert_eq!(
                    next.terms,
                    vec!["foo".to_string(), "kind=Deployment".to_string()]
                );
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_facet_selection_still_restarts_the_cycle() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["kind=Deployment"], "20")));
        controller.resolve::<String>(seq, Ok(result_with_total(100)));

        let selection = FacetSelection {
            field: "kind".to_string(),
            value: "Deployment".to_string(),
        };
        match controller.select_facet(&selection) {
            Effect::Navigate(raw) => {
                let next = QueryState::decode(&raw);
                assert_eq!(next.terms, vec!["kind=Deployment".to_string()]);
                assert_eq!(next.offset, 0);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn page_guards_follow_offset_and_total() {
        let mut controller = SearchController::new();
        let seq = dispatch_seq(&controller.navigate(&params(&["foo"], "40")));
        controller.resolve::<String>(seq, Ok(result_with_total(45)));

        assert!(!controller.first_page());
        assert!(controller.last_page());
    }

    #[test]
    fn last_page_is_true_before_any_result() {
        let controller = SearchController::new();
        assert!(controller.first_page());
        assert!(controller.last_page());
    }
}
