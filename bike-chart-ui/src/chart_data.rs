//! Shapes summary tables into the JSON the D3.js chart functions expect.
//!
//! Bar and line charts take `[{"label": .., "value": ..}]`; the grouped bar
//! chart takes `[{"label": .., "casual": .., "registered": ..}]`. Empty
//! tables produce `[]`, which every chart renders as an empty panel.

use bike_data::{RentalMetrics, SummaryTable};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct ChartPoint<'a> {
    pub label: &'a str,
    pub value: u64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RiderPoint<'a> {
    pub label: &'a str,
    pub casual: u64,
    pub registered: u64,
}

/// A labelled number shown as a metric tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub label: String,
    pub value: String,
}

/// `[{label, value}]` for bar and line charts, in table order.
pub fn points(table: &SummaryTable) -> Vec<ChartPoint<'_>> {
    table
        .rows
        .iter()
        .map(|r| ChartPoint {
            label: &r.category,
            value: r.value,
        })
        .collect()
}

/// `[{label, casual, registered}]` for the grouped bar chart.
///
/// Tables without a rider split report zero for both series.
pub fn rider_points(table: &SummaryTable) -> Vec<RiderPoint<'_>> {
    table
        .rows
        .iter()
        .map(|r| RiderPoint {
            label: &r.category,
            casual: r.casual.unwrap_or(0),
            registered: r.registered.unwrap_or(0),
        })
        .collect()
}

pub fn points_json(table: &SummaryTable) -> String {
    serde_json::to_string(&points(table)).unwrap_or_else(|_| "[]".to_string())
}

pub fn rider_points_json(table: &SummaryTable) -> String {
    serde_json::to_string(&rider_points(table)).unwrap_or_else(|_| "[]".to_string())
}

/// Chart config for a single-series chart.
pub fn config_json(title: &str, y_label: &str, color: &str) -> String {
    serde_json::json!({
        "title": title,
        "yAxisLabel": y_label,
        "color": color,
    })
    .to_string()
}

/// Group digits in thousands: 1234567 -> "1,234,567".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Metric tiles shown above the year chart.
pub fn metric_tiles(metrics: &RentalMetrics) -> Vec<Tile> {
    vec![
        Tile {
            label: "Total Rentals".to_string(),
            value: format_count(metrics.total),
        },
        Tile {
            label: "Casual".to_string(),
            value: format_count(metrics.casual),
        },
        Tile {
            label: "Registered".to_string(),
            value: format_count(metrics.registered),
        },
        Tile {
            label: "Daily Average".to_string(),
            value: format_count(metrics.average_per_day.round() as u64),
        },
        Tile {
            label: "Registered Share".to_string(),
            value: format!("{:.0}%", metrics.registered_share() * 100.0),
        },
    ]
}
