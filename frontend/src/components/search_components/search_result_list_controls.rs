//! Hit count and pagination controls for the result list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use common::search_const::PAGE_SIZE;

use crate::pages::search_page::SearchCycle;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                align-items: center;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                HitCountString {}
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            PaginationControls {}
        }
    }
}

#[component]
fn HitCountString() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let has_result = use_memo(move || controller.read().result().is_some());
    let total = use_memo(move || controller.read().total_hits());

    if !has_result() {
        return rsx! { "..." };
    }
    rsx! { "{total()} results" }
}

#[component]
fn PaginationControls() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;

    let prev_disabled = use_memo(move || {
        let c = controller.read();
        c.first_page() || c.nav_disabled()
    });
    let next_disabled = use_memo(move || {
        let c = controller.read();
        c.last_page() || c.nav_disabled()
    });
    let page_number = use_memo(move || controller.read().state().offset.max(0) / PAGE_SIZE + 1);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: prev_disabled(),
                onclick: move |_| {
                    let effect = controller.peek().prev_page();
                    cycle.run(effect);
                }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 12px;
                ",
                "{page_number()}"
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: next_disabled(),
                onclick: move |_| {
                    let effect = controller.peek().next_page();
                    cycle.run(effect);
                }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
