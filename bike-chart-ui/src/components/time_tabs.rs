//! Tab strip switching between the year, month and hour panels.

use crate::state::{AppState, TimeTab};
use dioxus::prelude::*;

const ACTIVE_STYLE: &str = "padding: 6px 14px; border: none; border-bottom: 2px solid #1E88E5; background: none; font-weight: bold; cursor: pointer;";
const INACTIVE_STYLE: &str = "padding: 6px 14px; border: none; background: none; color: #666; cursor: pointer;";

#[component]
pub fn TimeTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.time_tab)();
    let tabs: Vec<(TimeTab, &str)> = TimeTab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active { ACTIVE_STYLE } else { INACTIVE_STYLE };
            (*tab, style)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #E0E0E0; margin-bottom: 8px;",
            for (tab, style) in tabs {
                button {
                    key: "{tab.label()}",
                    style: "{style}",
                    onclick: move |_| state.time_tab.set(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
