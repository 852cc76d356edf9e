//! Search result item card component.

use dioxus::prelude::*;

use common::search_result::SearchHit;

#[component]
pub fn SearchResultItemCard(hit: ReadSignal<SearchHit>, item_index: u64) -> Element {
    let SearchHit {
        file_path,
        snippet,
        created_at,
        kinds,
        repository_url,
        ..
    } = hit.read().clone();
    let file_url = hit.read().file_url();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: INDEX - FILE LINK - SPACER - REPOSITORY
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{item_index}."
                }
                a {
                    href: "{file_url}",
                    target: "_blank",
                    style: "font-size: 18px; font-weight: 400; color: #1a0dab; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{file_path}"
                }
                // SPACER
                div {
                    style: "flex: 1 1 auto;",
                }
                span {
                    style: "font-size: 14px; color: rgba(0,0,0,0.6); overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{repository_url}"
                }
            }
            // Row 2: SNIPPET
            pre {
                style: "
                    font-size: 13px;
                    color: rgba(0,0,0,0.8);
                    background: #F7F7F7;
                    border-radius: 4px;
                    padding: 8px;
                    margin: 0;
                    max-height: 90px;
                    overflow: hidden;
                    white-space: pre-wrap;
                ",
                "{snippet}"
            }
            // Row 3: KIND CHIPS - CREATION DATE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                ",
                for kind in kinds.iter() {
                    span {
                        style: "
                            font-size: 12px;
                            background-color: #ECEEF2;
                            border-radius: 1000px;
                            padding: 2px 10px;
                            color: rgb(28, 33, 45);
                        ",
                        "{kind}"
                    }
                }
                div {
                    style: "flex: 1 1 auto;",
                }
                span {
                    style: "font-size: 12px; color: rgba(0,0,0,0.5);",
                    "{created_at}"
                }
            }
        }
    }
}
