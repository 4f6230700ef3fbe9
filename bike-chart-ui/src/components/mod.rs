//! Reusable Dioxus RSX components for the bike sharing dashboard.

mod category_legend;
mod chart_panel;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod metric_tiles;
mod time_tabs;

pub use category_legend::CategoryLegend;
pub use chart_panel::ChartPanel;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_tiles::MetricTiles;
pub use time_tabs::TimeTabs;
