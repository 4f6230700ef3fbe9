//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Underlying causes, outermost first
    #[props(default)]
    pub causes: Vec<String>,
}

/// Displays an error message and its cause chain in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
            if !props.causes.is_empty() {
                ul {
                    style: "margin: 6px 0 0 0; padding-left: 18px; font-size: 12px;",
                    for cause in props.causes.iter() {
                        li { "{cause}" }
                    }
                }
            }
        }
    }
}
