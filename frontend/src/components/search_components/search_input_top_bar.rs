use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::pages::search_page::SearchCycle;

#[component]
pub fn SearchInputTopBar() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let terms = use_memo(move || controller.read().state().terms.clone());
    let mut draft = use_signal(String::new);
    // when the url changes, the box goes back to the canonical terms; the
    // empty placeholder term is not shown to the user
    use_effect(move || {
        let joined = terms
            .read()
            .iter()
            .filter(|t| !t.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        draft.set(joined);
    });
    let query_has_changed = use_memo(move || {
        let shown = terms
            .read()
            .iter()
            .filter(|t| !t.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        *draft.read() != shown
    });
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let tokens: Vec<String> = draft
            .peek()
            .split_whitespace()
            .map(|t| t.to_string())
            .collect();
        let effect = controller.peek().submit_search(tokens);
        cycle.run(effect);
    };
    let search_oninput = move |event: Event<FormData>| {
        draft.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search indexed kustomization files",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                ",
                value: "{draft}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
