//! Collapsible legend explaining a chart's categories.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryLegendProps {
    /// (category, explanation) pairs
    pub entries: Vec<(String, String)>,
}

#[component]
pub fn CategoryLegend(props: CategoryLegendProps) -> Element {
    rsx! {
        details {
            style: "margin-top: 4px; font-size: 12px; color: #444;",
            summary {
                style: "cursor: pointer;",
                "Legend"
            }
            ul {
                style: "margin: 4px 0; padding-left: 18px;",
                for (category, explanation) in props.entries.iter() {
                    li {
                        key: "{category}",
                        code { "{category}" }
                        ": {explanation}"
                    }
                }
            }
        }
    }
}
