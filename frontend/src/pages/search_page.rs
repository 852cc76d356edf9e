//! Search page: the controller cycle wired to the router and the gateway.

use dioxus::{logger::tracing, prelude::*};

use common::controller::{Effect, SearchController};

use crate::api::search_api::SearchApiClient;
use crate::components::search_components::facet_charts::{CreationTimeseries, KindHistogram};
use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::components::search_components::search_results_view::SearchResultsView;
use crate::data_definitions::query_params::SearchParams;
use crate::routes::Route;

/// Shared handle to the running search cycle. Components never mutate
/// search state directly; they ask the controller for an effect and hand it
/// back here.
#[derive(Clone, Copy)]
pub struct SearchCycle {
    pub controller: Signal<SearchController>,
    client: Signal<SearchApiClient>,
}

impl SearchCycle {
    /// Execute one controller effect: push a URL, or run a single gateway
    /// call whose outcome is fed back under its sequence number.
    pub fn run(self, effect: Effect) {
        match effect {
            Effect::Navigate(raw) => {
                navigator().push(Route::SearchPage { params: SearchParams(raw) });
            }
            Effect::Dispatch { state, endpoint, seq } => {
                let mut controller = self.controller;
                let client = self.client.peek().clone();
                spawn(async move {
                    let outcome = client.execute(&state, endpoint).await;
                    if let Err(err) = &outcome {
                        tracing::warn!("gateway call failed: {err}");
                    }
                    controller.write().resolve(seq, outcome);
                });
            }
        }
    }
}

#[component]
pub fn SearchPage(params: ReadSignal<SearchParams>) -> Element {
    let mut controller = use_signal(SearchController::new);
    let client = use_signal(SearchApiClient::new);
    let cycle = use_context_provider(|| SearchCycle { controller, client });

    // Every navigation event re-enters the controller exactly once; the
    // effect either corrects the URL or dispatches one query.
    use_effect(move || {
        let raw = params.read().0.clone();
        let effect = controller.write().navigate(&raw);
        cycle.run(effect);
    });

    rsx! {
        Title { "Kustomize Search" }
        div {
            id: "x-search-page-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }

            div {
                id: "x-search-bottom-space",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                ",
                div {
                    id: "x-search-results-left-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                        width: 60%;
                        overflow-y: auto;
                    ",
                    SearchResultsView {}
                }
                div {
                    id: "x-search-facets-right-panel",
                    style: "
                        height: 100%;
                        min-width: 300px;
                        width: 40%;
                        padding: 16px;
                        overflow-y: auto;
                    ",
                    KindHistogram {}
                    CreationTimeseries {}
                }
            }
        }
    }
}
