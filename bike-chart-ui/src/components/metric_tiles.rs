//! Row of headline metric tiles.

use crate::chart_data::Tile;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricTilesProps {
    pub tiles: Vec<Tile>,
}

/// Displays each tile as a label over a large number.
#[component]
pub fn MetricTiles(props: MetricTilesProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 8px 0 12px 0;",
            for tile in props.tiles.iter() {
                div {
                    key: "{tile.label}",
                    style: "flex: 1; min-width: 120px; padding: 8px 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
                    div {
                        style: "font-size: 12px; color: #666;",
                        "{tile.label}"
                    }
                    div {
                        style: "font-size: 22px; font-weight: bold;",
                        "{tile.value}"
                    }
                }
            }
        }
    }
}
