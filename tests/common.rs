#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use groombook::core::projector::ProjectionOptions;
use groombook::utils::zone::ShopZone;
use std::env;
use std::fs;
use std::path::PathBuf;

fn home_dir(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_groombook_home", name));
    home
}

/// Binary under test, with HOME pointed at a private dir so no real
/// configuration file is picked up.
pub fn gb(name: &str) -> Command {
    let home = home_dir(name);
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("groombook");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_groombook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(home_dir(name).join(".groombook").join("groombook.conf")).ok();
    db_path
}

/// Write a configuration file into the private HOME of `name`.
pub fn write_config(name: &str, yaml: &str) {
    let dir = home_dir(name).join(".groombook");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(dir.join("groombook.conf"), yaml).expect("config file");
}

/// Fresh DB initialized through the CLI.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    gb(name)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// São Paulo style fixed offset, UTC-03:00.
pub fn shop_zone() -> ShopZone {
    ShopZone::Fixed(FixedOffset::west_opt(3 * 3600).expect("offset"))
}

pub fn options(legacy: bool, today: &str) -> ProjectionOptions {
    ProjectionOptions {
        legacy_blocked_appointments: legacy,
        zone: shop_zone(),
        today: date(today),
    }
}

/// Absolute instant of a shop-local wall clock (UTC-03:00).
pub fn local_ts(day: &str, hhmm: &str) -> DateTime<Utc> {
    let naive = chrono::NaiveDateTime::parse_from_str(&format!("{} {}", day, hhmm), "%Y-%m-%d %H:%M")
        .expect("valid test timestamp");
    FixedOffset::west_opt(3 * 3600)
        .expect("offset")
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous")
        .with_timezone(&Utc)
}
