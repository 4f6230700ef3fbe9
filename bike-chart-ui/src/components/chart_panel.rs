//! A titled chart panel with the DOM container D3 renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id of the chart container
    pub id: String,
    pub title: String,
    /// What the Y-axis counts (e.g. "Rentals")
    #[props(default = String::new())]
    pub unit_description: String,
    #[props(default = 320)]
    pub min_height: u32,
    /// Anything shown under the chart, usually a legend
    pub children: Element,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
            {props.children}
        }
    }
}
