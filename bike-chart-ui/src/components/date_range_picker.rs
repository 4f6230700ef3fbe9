//! Date range picker with start and end date inputs.
//!
//! Clearing either input makes the selection degenerate; the dashboard then
//! keeps showing the last complete range.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range picker for filtering every panel.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    let on_reset = move |_: Event<MouseData>| {
        state.start_date.set(state.min_date.peek().clone());
        state.end_date.set(state.max_date.peek().clone());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
            button {
                style: "padding: 2px 10px;",
                onclick: on_reset,
                "All dates"
            }
        }
    }
}
