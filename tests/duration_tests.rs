use predicates::str::contains;
use verotrade::core::calculator::duration::{DurationResult, resolve, trade_duration};
use verotrade::models::time_of_day::TimeOfDay;
use verotrade::utils::format_duration;

mod common;
use common::vt;

fn t(s: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse(s)
}

#[test]
fn test_parse_accepts_padded_and_unpadded() {
    assert_eq!(t("09:05"), TimeOfDay::new(9, 5));
    assert_eq!(t("9:5"), TimeOfDay::new(9, 5));
    assert_eq!(t("9:05"), TimeOfDay::new(9, 5));
    assert_eq!(t(" 23:59 "), TimeOfDay::new(23, 59));
    assert_eq!(t("0:0"), TimeOfDay::new(0, 0));
}

#[test]
fn test_parse_rejects_malformed_as_absent() {
    for bad in [
        "", "   ", "13", "1300", "24:00", "12:60", "ab:cd", "+1:00", "1:-5", "123:00",
        "12:000", "13:00:00", ":30", "12:", "12.30",
    ] {
        assert_eq!(t(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn test_time_of_day_display_is_zero_padded() {
    assert_eq!(t("9:5").unwrap().to_string(), "09:05");
    assert_eq!(t("13:00").unwrap().minutes(), 780);
}

#[test]
fn test_observed_scenarios() {
    assert_eq!(trade_duration("13:00", "14:10"), "1h 10min");
    assert_eq!(trade_duration("13:00", "12:50"), "23h 50min");
    assert_eq!(trade_duration("09:30", "10:15"), "45min");
    assert_eq!(trade_duration("16:00", "16:00"), "0min");
    assert_eq!(trade_duration("", ""), "");
}

#[test]
fn test_recompute_on_change() {
    let entry = "10:00";
    let mut exit = "11:30";
    assert_eq!(trade_duration(entry, exit), "1h 30min");

    exit = "12:45";
    assert_eq!(trade_duration(entry, exit), "2h 45min");

    // clearing a field clears the display again
    exit = "";
    assert_eq!(trade_duration(entry, exit), "");
}

#[test]
fn test_either_side_missing_is_empty_not_zero() {
    assert_eq!(resolve(t("10:00"), None), DurationResult::Empty);
    assert_eq!(resolve(None, t("10:00")), DurationResult::Empty);
    assert_eq!(resolve(None, None), DurationResult::Empty);
    assert_eq!(trade_duration("10:00", "nope"), "");
    assert_ne!(resolve(t("10:00"), t("10:00")), DurationResult::Empty);
}

#[test]
fn test_equal_times_are_zero_not_a_full_day() {
    for s in ["00:00", "12:34", "23:59"] {
        assert_eq!(resolve(t(s), t(s)), DurationResult::Minutes(0));
    }
}

#[test]
fn test_rollover_boundaries() {
    assert_eq!(resolve(t("00:01"), t("00:00")), DurationResult::Minutes(1439));
    assert_eq!(resolve(t("23:59"), t("00:00")), DurationResult::Minutes(1));
    assert_eq!(resolve(t("22:00"), t("02:30")), DurationResult::Minutes(270));
}

#[test]
fn test_rules_hold_across_the_clock() {
    for entry in (0..1440u32).step_by(37) {
        for exit in (0..1440u32).step_by(41) {
            let e = TimeOfDay::new((entry / 60) as u8, (entry % 60) as u8);
            let x = TimeOfDay::new((exit / 60) as u8, (exit % 60) as u8);
            let expected = if exit > entry {
                exit - entry
            } else if exit == entry {
                0
            } else {
                1440 - entry + exit
            };
            assert_eq!(resolve(e, x), DurationResult::Minutes(expected));
            // pure: same input, same answer
            assert_eq!(resolve(e, x), resolve(e, x));
        }
    }
}

#[test]
fn test_formatter() {
    assert_eq!(format_duration(DurationResult::Empty), "");
    assert_eq!(format_duration(DurationResult::Minutes(0)), "0min");
    assert_eq!(format_duration(DurationResult::Minutes(45)), "45min");
    assert_eq!(format_duration(DurationResult::Minutes(59)), "59min");
    assert_eq!(format_duration(DurationResult::Minutes(60)), "1h 0min");
    assert_eq!(format_duration(DurationResult::Minutes(70)), "1h 10min");
    assert_eq!(format_duration(DurationResult::Minutes(1439)), "23h 59min");
}

#[test]
fn test_cli_duration_command() {
    vt().args(["duration", "13:00", "12:50"])
        .assert()
        .success()
        .stdout("23h 50min\n");

    vt().args(["duration", "16:00", "16:00"])
        .assert()
        .success()
        .stdout("0min\n");

    vt().args(["duration", "", ""])
        .assert()
        .success()
        .stdout("\n");

    // malformed values that look like flags still reach the calculator
    vt().args(["duration", "-5:00", "10:00"])
        .assert()
        .success()
        .stdout("\n");

    vt().args(["duration", "10:00", "-1"])
        .assert()
        .success()
        .stdout("\n");

    vt().args(["duration", "9:30"])
        .assert()
        .success()
        .stdout("\n");

    vt().args(["duration", "10:00", "11:30"])
        .assert()
        .success()
        .stdout(contains("1h 30min"));
}
