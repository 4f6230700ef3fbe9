//! Core types for the bike sharing dashboard.
//!
//! - `record`: one row of the day or hour table
//! - `category`: the categorical attributes a record carries
//! - `date_range`: inclusive calendar date ranges
//! - `dates`: date parsing and formatting helpers
//! - `loader`: CSV reading and writing for both tables

pub mod category;
pub mod date_range;
pub mod dates;
pub mod loader;
pub mod record;
