//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bike_core::record::Record;
use bike_data::RangeSession;
use dioxus::prelude::*;

/// Which of the time-based panels is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeTab {
    Year,
    Month,
    Hour,
}

impl TimeTab {
    pub const ALL: [TimeTab; 3] = [TimeTab::Year, TimeTab::Month, TimeTab::Hour];

    pub fn label(&self) -> &'static str {
        match self {
            TimeTab::Year => "Year",
            TimeTab::Month => "Month",
            TimeTab::Hour => "Hour",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed day table
    pub day_records: Signal<Vec<Record>>,
    /// Parsed hour table
    pub hour_records: Signal<Vec<Record>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Start date input ("YYYY-MM-DD", empty when unset)
    pub start_date: Signal<String>,
    /// End date input ("YYYY-MM-DD", empty when unset)
    pub end_date: Signal<String>,
    /// Earliest date in the data, bounds the picker
    pub min_date: Signal<String>,
    /// Latest date in the data, bounds the picker
    pub max_date: Signal<String>,
    /// Last complete date range the user picked
    pub session: Signal<RangeSession>,
    /// Active time tab
    pub time_tab: Signal<TimeTab>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            day_records: Signal::new(Vec::new()),
            hour_records: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            session: Signal::new(RangeSession::new()),
            time_tab: Signal::new(TimeTab::Year),
        }
    }
}
