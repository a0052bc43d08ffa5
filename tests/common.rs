#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vt() -> Command {
    cargo_bin_cmd!("verotrade")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_verotrade.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one trade through the CLI.
pub fn add_trade(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path, "add"];
    full.extend_from_slice(args);
    vt().args(&full).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests:
///
/// | id | date       | symbol | side  | P&L  | in    | out   | duration  |
/// |----|------------|--------|-------|------|-------|-------|-----------|
/// | 1  | 2025-09-01 | AAPL   | long  | +100 | 13:00 | 14:10 | 1h 10min  |
/// | 2  | 2025-09-02 | TSLA   | short | -50  | 13:00 | 12:50 | 23h 50min |
/// | 3  | 2025-09-15 | AAPL   | long  | +50  | 09:30 | 10:15 | 45min     |
/// | 4  | 2025-10-01 | NVDA   | long  | open | 16:00 | 16:00 | 0min      |
pub fn init_db_with_data(db_path: &str) {
    vt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_trade(
        db_path,
        &[
            "2025-09-01", "AAPL", "--side", "long", "--qty", "10", "--entry", "100",
            "--exit", "110", "--in", "13:00", "--out", "14:10", "--emotion", "confident",
        ],
    );
    add_trade(
        db_path,
        &[
            "2025-09-02", "TSLA", "--side", "short", "--qty", "5", "--entry", "200",
            "--exit", "210", "--in", "13:00", "--out", "12:50", "--emotion", "fomo,greedy",
        ],
    );
    add_trade(
        db_path,
        &[
            "2025-09-15", "aapl", "--side", "buy", "--qty", "20", "--entry", "50",
            "--exit", "52.5", "--in", "9:30", "--out", "10:15", "--emotion", "Confident",
        ],
    );
    add_trade(
        db_path,
        &[
            "2025-10-01", "NVDA", "--qty", "1", "--entry", "400", "--in", "16:00", "--out",
            "16:00",
        ],
    );
}
