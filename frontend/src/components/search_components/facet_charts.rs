//! Facet charts: clickable kind histogram and the cumulative
//! creation-time line. Both are thin views over the display models; the
//! selection logic lives with the models.

use dioxus::prelude::*;

use common::facets::{histogram, timeseries};

use crate::pages::search_page::SearchCycle;

#[component]
pub fn KindHistogram() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let agg = use_memo(move || {
        controller
            .read()
            .result()
            .and_then(|r| r.aggregations.kinds.clone())
    });
    let model = use_memo(move || histogram::histogram(agg.read().as_ref()));
    let Some(model) = model() else {
        // no aggregation, no chart
        return rsx! {};
    };
    let max_count = model.counts.iter().copied().max().unwrap_or(0).max(1);
    let ticks = histogram::integer_ticks(max_count, 5);

    rsx! {
        div {
            id: "x-kind-histogram",
            style: "margin-bottom: 24px;",
            h2 {
                style: "font-size: 18px; font-weight: 300; color: rgb(75, 87, 112);",
                "Kustomizations by kind"
            }
            for (index, (label, count)) in model.labels.iter().cloned().zip(model.counts.iter().copied()).enumerate() {
                HistogramBar { index, label, count, max_count }
            }
            // count axis: whole numbers only
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; color: rgba(0,0,0,0.5); font-size: 12px; margin-left: 138px;",
                for tick in ticks {
                    span { "{tick}" }
                }
            }
        }
    }
}

#[component]
fn HistogramBar(index: usize, label: String, count: u64, max_count: u64) -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let width_pct = count * 100 / max_count;
    let onclick = move |_| {
        let agg = controller
            .peek()
            .result()
            .and_then(|r| r.aggregations.kinds.clone());
        let Some(agg) = agg else {
            return;
        };
        // the synthetic "other" bucket maps to no selection
        let Some(selection) = histogram::selection_at(&agg, index) else {
            return;
        };
        let effect = controller.peek().select_facet(&selection);
        cycle.run(effect);
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                cursor: pointer;
                margin: 4px 0;
            ",
            onclick: onclick,
            span {
                style: "width: 130px; font-size: 14px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; flex-shrink: 0;",
                "{label}"
            }
            div {
                style: "flex-grow: 1;",
                div {
                    style: "height: 18px; width: {width_pct}%; background-color: #367ED8; border-radius: 2px;",
                }
            }
            span {
                style: "font-size: 14px; color: rgba(0,0,0,0.7); flex-shrink: 0;",
                "{count}"
            }
        }
    }
}

#[component]
pub fn CreationTimeseries() -> Element {
    let cycle = use_context::<SearchCycle>();
    let controller = cycle.controller;
    let agg = use_memo(move || {
        controller
            .read()
            .result()
            .and_then(|r| r.aggregations.timeseries.clone())
    });
    let model = use_memo(move || timeseries::timeseries(agg.read().as_ref()));
    let Some(model) = model() else {
        return rsx! {};
    };

    let total = *model.cumulative_counts.last().unwrap_or(&0);
    let scale_max = total.max(1);
    let n = model.timestamps.len();
    let points = model
        .cumulative_counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let x = if n <= 1 { 0.0 } else { (i as f64) * 300.0 / ((n - 1) as f64) };
            let y = 125.0 - (*c as f64) * 115.0 / (scale_max as f64);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    // the model is never empty, so both endpoints exist
    let first_txt = model
        .timestamps
        .first()
        .map(|d| d.to_string())
        .unwrap_or_default();
    let last_txt = model
        .timestamps
        .last()
        .map(|d| d.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            id: "x-creation-timeseries",
            h2 {
                style: "font-size: 18px; font-weight: 300; color: rgb(75, 87, 112);",
                "Kustomizations over time"
            }
            svg {
                view_box: "0 0 300 130",
                width: "100%",
                preserve_aspect_ratio: "none",
                style: "background: white; border: 1px solid #AAAAAA33; border-radius: 4px;",
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "#367ED8",
                    stroke_width: "2",
                }
            }
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; font-size: 12px; color: rgba(0,0,0,0.5);",
                span { "{first_txt}" }
                span { "{last_txt} — {total} total" }
            }
        }
    }
}
