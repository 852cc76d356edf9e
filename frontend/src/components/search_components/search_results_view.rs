//! Result list with its loading and error states.

use dioxus::prelude::*;

use common::controller::Phase;

use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::search_components::search_result_item_card::SearchResultItemCard;
use crate::components::search_components::search_result_list_controls::SearchResultListControls;
use crate::pages::search_page::SearchCycle;

#[component]
pub fn SearchResultsView() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let phase = use_memo(move || controller.read().phase());
    let error_txt = use_memo(move || {
        controller
            .read()
            .error()
            .unwrap_or("search failed")
            .to_string()
    });

    rsx! {
        div {
            id: "x-search-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                padding: 7px;
                height: 100%;
                width: 100%;
            ",
            SearchResultListControls {}

            if phase() == Phase::ErrorDisplaying {
                ComponentErrorDisplay { error_txt: error_txt() }
            }
            if phase() == Phase::Loading {
                LoadingIndicator {}
            }

            ResultList {}
        }
    }
}

#[component]
fn ResultList() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let hits = use_memo(move || {
        controller
            .read()
            .result()
            .map(|r| r.hits.clone())
            .unwrap_or_default()
    });
    let offset = use_memo(move || controller.read().state().offset.max(0) as u64);

    rsx! {
        ul {
            id: "x-search-results-list",
            style: "
                width: 100%;
                overflow-y: auto;
                list-style: none;
                padding: 0;
                margin: 0;
            ",
            for (i, hit) in hits().into_iter().enumerate() {
                li {
                    key: "{hit.id}",
                    SearchResultItemCard {
                        hit: hit.clone(),
                        item_index: offset() + i as u64 + 1,
                    }
                }
            }
        }
    }
}
