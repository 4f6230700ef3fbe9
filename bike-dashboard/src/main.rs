//! Bike Sharing Dashboard
//!
//! A single-page report over the bike sharing day and hour tables: pick a
//! date range and every panel is recomputed for it.
//!
//! Data flow:
//! 1. `build.rs` copies `day.csv` and `hour.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds both tables into the WASM binary.
//! 3. On mount: parse both tables and seed the date picker with the data span.
//! 4. On date range or tab change: resolve the selection against the
//!    session's remembered range, rebuild the `Report`, and re-render every
//!    panel via D3.js.

use bike_chart_ui::chart_data;
use bike_chart_ui::components::{
    CategoryLegend, ChartPanel, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricTiles,
    TimeTabs,
};
use bike_chart_ui::js_bridge;
use bike_chart_ui::state::{AppState, TimeTab};
use bike_core::date_range::DateRange;
use bike_core::dates::{format_date, parse_optional_date};
use bike_core::loader::parse_records;
use bike_core::record::Record;
use bike_data::{DateSelection, Dimension, Report};
use anyhow::Context;
use dioxus::prelude::*;

/// Day-granularity table.
const DAY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/day.csv"));
/// Hour-granularity table.
const HOUR_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/hour.csv"));

const TIME_CHART_ID: &str = "time-chart";
const HOLIDAY_CHART_ID: &str = "holiday-chart";
const WORKING_DAY_CHART_ID: &str = "working-day-chart";
const WEATHER_CHART_ID: &str = "weather-chart";
const SEASON_CHART_ID: &str = "season-chart";

const BAR_COLOR: &str = "#90CAF9";
const LINE_COLOR: &str = "#1E88E5";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bike-dashboard-root"))
        .launch(App);
}

/// Parse both embedded tables.
fn load_tables() -> anyhow::Result<(Vec<Record>, Vec<Record>)> {
    let days = parse_records(DAY_CSV).context("day table")?;
    let hours = parse_records(HOUR_CSV).context("hour table")?;
    Ok((days, hours))
}

fn legend(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse a date picker value; anything unparseable counts as "no bound".
fn picker_date(value: &str) -> Option<chrono::NaiveDate> {
    match parse_optional_date(value) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("[bike] dashboard: ignoring date input {:?}: {}", value, e);
            None
        }
    }
}

fn render_summary_bar(report: &Report, dimension: Dimension, container_id: &str) {
    if let Some(table) = report.summary(dimension) {
        js_bridge::render_bar_chart(
            container_id,
            &chart_data::points_json(table),
            &chart_data::config_json(&table.title, "Rentals", BAR_COLOR),
        );
    }
}

fn render_time_tab(report: &Report, tab: TimeTab) {
    match tab {
        TimeTab::Year => {
            if let Some(table) = report.summary(Dimension::Year) {
                js_bridge::render_bar_chart(
                    TIME_CHART_ID,
                    &chart_data::points_json(table),
                    &chart_data::config_json("Days Recorded per Year", "Days", BAR_COLOR),
                );
            }
        }
        TimeTab::Month => {
            if let Some(table) = report.summary(Dimension::Month) {
                js_bridge::render_line_chart(
                    TIME_CHART_ID,
                    &chart_data::points_json(table),
                    &chart_data::config_json(&table.title, "Rentals", LINE_COLOR),
                );
            }
        }
        TimeTab::Hour => {
            if let Some(table) = report.summary(Dimension::Hour) {
                js_bridge::render_line_chart(
                    TIME_CHART_ID,
                    &chart_data::points_json(table),
                    &chart_data::config_json(&table.title, "Rentals", LINE_COLOR),
                );
            }
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut error_causes: Signal<Vec<String>> = use_signal(Vec::new);
    let mut report: Signal<Option<Report>> = use_signal(|| None);

    // ─── Effect 1: Parse both tables once on mount ───
    use_effect(move || {
        let (days, hours) = match load_tables() {
            Ok(tables) => tables,
            Err(e) => {
                log::error!("[bike] dashboard: failed to load data: {:#}", e);
                state.error_msg.set(Some(format!("Failed to load rental data: {}", e)));
                error_causes.set(e.chain().skip(1).map(|c| c.to_string()).collect());
                state.loading.set(false);
                return;
            }
        };

        if let Some(span) = DateRange::spanning(days.iter().map(|r| r.date)) {
            let min = format_date(&span.start);
            let max = format_date(&span.end);
            web_sys::console::log_1(
                &format!("[bike] dashboard: {} day records from {} to {}", days.len(), min, max)
                    .into(),
            );
            state.min_date.set(min.clone());
            state.max_date.set(max.clone());
            state.start_date.set(min);
            state.end_date.set(max);
        }

        state.day_records.set(days);
        state.hour_records.set(hours);
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Effect 2: Filter, aggregate and render ───
    // Re-runs whenever loading, the date inputs, the tables or the tab change.
    use_effect(move || {
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let selection = DateSelection::new(
            picker_date(&(state.start_date)()),
            picker_date(&(state.end_date)()),
        );
        let tab = (state.time_tab)();

        let built = {
            let days = state.day_records.read();
            let hours = state.hour_records.read();
            let range = state.session.write().resolve(selection, &days);
            Report::build(&days, &hours, range)
        };

        render_time_tab(&built, tab);
        render_summary_bar(&built, Dimension::Holiday, HOLIDAY_CHART_ID);
        render_summary_bar(&built, Dimension::WorkingDay, WORKING_DAY_CHART_ID);
        render_summary_bar(&built, Dimension::Weather, WEATHER_CHART_ID);
        if let Some(table) = built.summary(Dimension::Season) {
            js_bridge::render_grouped_bar_chart(
                SEASON_CHART_ID,
                &chart_data::rider_points_json(table),
                &chart_data::config_json(&table.title, "Rentals", BAR_COLOR),
            );
        }

        report.set(Some(built));
    });

    // ─── Render ───
    let range_note = report
        .read()
        .as_ref()
        .and_then(|r| r.range)
        .map(|r| format!("Showing {} to {}", format_date(&r.start), format_date(&r.end)))
        .unwrap_or_else(|| "No rental data available.".to_string());
    let tiles = report
        .read()
        .as_ref()
        .map(|r| chart_data::metric_tiles(&r.metrics))
        .unwrap_or_default();
    let tab = (state.time_tab)();
    let time_unit = if tab == TimeTab::Year { "Days with records" } else { "Rentals" };

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { "Bike Sharing Dashboard" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, causes: error_causes() }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                DateRangePicker {}
                p {
                    style: "font-size: 12px; color: #666; margin: 0 0 8px 0;",
                    "{range_note}"
                }

                MetricTiles { tiles: tiles }

                h3 { "Statistics over Time" }
                TimeTabs {}
                ChartPanel {
                    id: TIME_CHART_ID.to_string(),
                    title: tab.label().to_string(),
                    unit_description: time_unit.to_string(),
                    p {
                        style: "font-size: 11px; color: #888; margin: 4px 0 0 0;",
                        "Years count recorded days; months and hours sum rentals."
                    }
                }

                h3 { "Holidays and Working Days" }
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    div {
                        style: "flex: 1; min-width: 300px;",
                        ChartPanel {
                            id: HOLIDAY_CHART_ID.to_string(),
                            title: "Rentals on Holidays".to_string(),
                            unit_description: "Rentals".to_string(),
                            CategoryLegend {
                                entries: legend(&[
                                    ("Not Holiday", "a regular day"),
                                    ("Holiday", "a public holiday"),
                                ]),
                            }
                        }
                    }
                    div {
                        style: "flex: 1; min-width: 300px;",
                        ChartPanel {
                            id: WORKING_DAY_CHART_ID.to_string(),
                            title: "Rentals on Working Days".to_string(),
                            unit_description: "Rentals".to_string(),
                            CategoryLegend {
                                entries: legend(&[
                                    ("Working Day", "neither a weekend nor a holiday"),
                                    ("Not Working Day", "a weekend or a holiday"),
                                ]),
                            }
                        }
                    }
                }

                ChartPanel {
                    id: WEATHER_CHART_ID.to_string(),
                    title: "Rentals by Weather Condition".to_string(),
                    unit_description: "Rentals".to_string(),
                    CategoryLegend {
                        entries: legend(&[
                            ("Clear", "clear or partly cloudy"),
                            ("Misty/Cloudy", "mist and clouds"),
                            ("Light Snow/Rain", "light snow or light rain"),
                            ("Severe Weather", "heavy rain, snow or thunderstorm"),
                        ]),
                    }
                }

                ChartPanel {
                    id: SEASON_CHART_ID.to_string(),
                    title: "Casual and Registered Rentals by Season".to_string(),
                    unit_description: "Rentals".to_string(),
                    CategoryLegend {
                        entries: legend(&[
                            ("Spring", "spring"),
                            ("Summer", "summer"),
                            ("Fall", "autumn"),
                            ("Winter", "winter"),
                        ]),
                    }
                }
            }
        }
    }
}
