//! Build script for bike-dashboard.
//!
//! Copies the day and hour CSV tables from `fixtures/` into OUT_DIR so they
//! can be embedded via `include_str!`. A missing fixture is replaced by a
//! header-only placeholder and the dashboard shows an empty report.

use std::env;
use std::fs;
use std::path::Path;

const DAY_HEADER: &str =
    "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,casual,registered,cnt\n";
const HOUR_HEADER: &str =
    "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,casual,registered,cnt\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = [
        ("../fixtures/day.csv", "day.csv", DAY_HEADER),
        ("../fixtures/hour.csv", "hour.csv", HOUR_HEADER),
    ];

    for (src_path, dest_name, placeholder) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, placeholder).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using header-only placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
