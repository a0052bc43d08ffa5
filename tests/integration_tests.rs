use predicates::prelude::*;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, vt};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    vt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_list_shows_computed_durations() {
    let db_path = setup_test_db("list_durations");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("1h 10min"))
        .stdout(contains("23h 50min"))
        .stdout(contains("45min"))
        .stdout(contains("0min"))
        .stdout(contains("09:30"))
        .stdout(contains("4 trade(s)"));
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("NVDA"))
        .stdout(contains("1 trade(s)"));

    vt().args(["--db", &db_path, "list", "--symbol", "aapl"])
        .assert()
        .success()
        .stdout(contains("2 trade(s)"));

    vt().args(["--db", &db_path, "list", "--open"])
        .assert()
        .success()
        .stdout(contains("1 trade(s)"));

    vt().args(["--db", &db_path, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No trades found."));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_invalid");
    init_db_with_data(&db_path);

    vt().args([
        "--db", &db_path, "add", "2025-09-03", "MSFT", "--qty", "1", "--entry", "10", "--in",
        "25:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    vt().args([
        "--db", &db_path, "add", "2025-09-03", "MSFT", "--qty", "0", "--entry", "10",
    ])
    .assert()
    .failure()
    .stderr(contains("quantity"));

    vt().args([
        "--db", &db_path, "add", "2025-09-03", "MSFT", "--qty", "1", "--entry", "10",
        "--emotion", "sleepy",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid emotion tag"));

    vt().args(["--db", &db_path, "add", "--edit", "99", "--qty", "2"])
        .assert()
        .failure()
        .stderr(contains("No trade found with id 99"));
}

#[test]
fn test_edit_recomputes_duration() {
    let db_path = setup_test_db("edit_duration");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "add", "--edit", "2", "--out", "14:00"])
        .assert()
        .success()
        .stdout(contains("Trade #2 updated."))
        .stdout(contains("Duration: 1h 0min"));

    // clearing a time leaves the duration empty
    vt().args(["--db", &db_path, "add", "--edit", "1", "--in", ""])
        .assert()
        .success()
        .stdout(contains("Trade #1 updated."))
        .stdout(contains("Duration:").not());
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "del", "4"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    vt().args(["--db", &db_path, "del", "4"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Trade #4 (2025-10-01 NVDA) has been deleted."));

    vt().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    vt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2 trade(s)"));

    vt().args(["--db", &db_path, "del", "1", "-y"])
        .assert()
        .failure()
        .stderr(contains("No trade found with id 1"));
}

#[test]
fn test_stats_summary() {
    let db_path = setup_test_db("stats_summary");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("4 (1 open)"))
        .stdout(contains("won 2 / lost 1 / even 0"))
        .stdout(contains("66.7%"))
        .stdout(contains("+100.00 USD"))
        .stdout(contains("3.00"))
        .stdout(contains("6h 26min"))
        .stdout(contains("By emotion").not());
}

#[test]
fn test_stats_by_emotion() {
    let db_path = setup_test_db("stats_emotion");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "stats", "--by-emotion"])
        .assert()
        .success()
        .stdout(contains("By emotion"))
        .stdout(contains("confident"))
        .stdout(contains("+150.00 USD"))
        .stdout(contains("fomo"))
        .stdout(contains("-50.00 USD"));

    vt().args(["--db", &db_path, "stats", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("1 (1 open)"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_formats");
    init_db_with_data(&db_path);

    let csv_out = temp_out("export_formats", "csv");
    vt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv.starts_with("id,date,symbol,side"));
    assert!(csv.contains("duration,duration_minutes,pnl"));
    assert!(csv.contains("1h 10min,70,100.0"));

    let json_out = temp_out("export_formats", "json");
    vt().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--range",
        "2025-09", "--force",
    ])
    .assert()
    .success()
    .stdout(contains("3 trade(s)"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written"))
            .expect("valid json");
    let rows = json.as_array().expect("array of trades");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["duration"], "23h 50min");
    assert_eq!(rows[1]["duration_minutes"], 1430);
    assert_eq!(rows[1]["pnl"], -50.0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    vt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));

    assert!(!Path::new("relative.csv").exists());
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&dest).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    vt().args([
        "--db", &db_path, "backup", "--file", &dest, "--compress", "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Backup created"));

    assert!(zip_path.exists());

    vt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_db_maintenance() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total trades:"))
        .stdout(contains("2025-09-01"));

    vt().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema is up to date."))
        .stdout(contains("20260302_0001_create_trades"));

    vt().args(["--db", &db_path, "db", "--normalize", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("0 rewritten, 0 cleared"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("trade #3"));
}

#[test]
fn test_backup_plain_copy_and_overwrite_refusal() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_plain", "sqlite");

    vt().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::metadata(&dest).expect("backup written").len(),
        fs::metadata(&db_path).expect("db present").len()
    );

    // existing target without --force: answering no keeps it
    vt().args(["--db", &db_path, "backup", "--file", &dest])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Backup cancelled by user."));

    vt().args(["--db", &db_path, "backup", "--file", &dest])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Backup created"));
}

#[test]
fn test_export_overwrite_refusal() {
    let db_path = setup_test_db("export_refusal");
    init_db_with_data(&db_path);

    let out = temp_out("export_refusal", "csv");
    fs::write(&out, "keep me").expect("seed file");

    vt().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("still there"), "keep me");

    vt().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    assert!(fs::read_to_string(&out).expect("exported").starts_with("id,date"));
}

#[test]
fn test_del_unknown_id_does_not_prompt() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    vt().args(["--db", &db_path, "del", "99"])
        .assert()
        .failure()
        .stdout(contains("Confirm").not())
        .stderr(contains("No trade found with id 99"));
}

/// Fresh HOME so the config commands never touch the real user config.
fn temp_home(name: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("{}_verotrade_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("temp home");
    home
}

#[test]
fn test_config_print_and_check() {
    let home = temp_home("config_cmds");
    let conf_dir = home.join(".verotrade");
    let conf_file = conf_dir.join("verotrade.conf");

    // no file yet: defaults are printed and every key is reported missing
    vt().env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("currency: USD"))
        .stdout(contains("default_side: long"));

    vt().env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains(
            "is missing: database, currency, default_side, separator_char",
        ));

    fs::create_dir_all(&conf_dir).expect("config dir");
    fs::write(&conf_file, "database: /tmp/cfg_test.sqlite\ncurrency: EUR\n")
        .expect("partial config");

    vt().env("HOME", &home)
        .args(["config", "--print", "--check"])
        .assert()
        .success()
        .stdout(contains("currency: EUR"))
        .stdout(contains("separator_char: '-'").or(contains("separator_char: -")))
        .stdout(contains("is missing: default_side, separator_char"));

    fs::write(
        &conf_file,
        "database: /tmp/cfg_test.sqlite\ncurrency: EUR\ndefault_side: short\nseparator_char: '='\n",
    )
    .expect("full config");

    vt().env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is complete."));
}
