#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rvolunteer::core::feed::FeedLogic;
use rvolunteer::core::verification::VerificationLogic;
use rvolunteer::db::initialize::init_db;
use rvolunteer::db::pool::DbPool;
use rvolunteer::models::hour_entry::{HourEntry, NewHourEntry};
use rvolunteer::models::notification::NotificationRecord;
use rvolunteer::models::recognition::RecognitionConfig;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the real home directory and log filter.
pub fn rvo() -> Command {
    let mut cmd = cargo_bin_cmd!("rvolunteer");
    cmd.env("HOME", env::temp_dir());
    cmd.env_remove("RVOLUNTEER_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvolunteer.sqlite", name));
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

/// `init` through the CLI, without touching the config file.
pub fn init_cli_db(db_path: &str) {
    rvo()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Log hours through the CLI and return the verification code it printed.
pub fn cli_add(db_path: &str, user: &str, date: &str, org: &str, hours: &str) -> String {
    let out = rvo()
        .args([
            "--db", db_path, "--user", user, "add", date, "--org", org, "--desc",
            "Volunteering", "--hours", hours,
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&out);
    stdout
        .lines()
        .find(|l| l.contains("Verification code:"))
        .and_then(|l| l.split_whitespace().last())
        .map(str::to_string)
        .expect("add prints a verification code")
}

/// Fresh in-memory database with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

/// File-backed database with the full schema, for multi-connection tests.
pub fn file_pool(path: &str) -> DbPool {
    let pool = DbPool::new(path).expect("open db file");
    init_db(&pool.conn).expect("init schema");
    pool
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn new_entry(org: &str, hours: f64, date: &str) -> NewHourEntry {
    NewHourEntry {
        organization: org.to_string(),
        description: "Sorting donations".to_string(),
        hours,
        date: Some(day(date)),
        ..Default::default()
    }
}

/// Log hours and verify them by code in one go.
pub fn approved_entry(pool: &mut DbPool, owner: &str, hours: f64, date: &str) -> HourEntry {
    let cfg = RecognitionConfig::default();
    let e = VerificationLogic::create_entry(pool, owner, new_entry("Food Bank", hours, date))
        .expect("create entry");
    VerificationLogic::verify_by_code(pool, &e.verification_code, &cfg).expect("verify entry")
}

pub fn feed(pool: &DbPool, user: &str) -> Vec<NotificationRecord> {
    FeedLogic::list(pool, user, false, Some(100), None).expect("list notifications")
}

pub fn count_titled(pool: &DbPool, user: &str, title: &str) -> usize {
    feed(pool, user).iter().filter(|n| n.title == title).count()
}

pub fn count_milestones(pool: &DbPool, user: &str) -> usize {
    feed(pool, user)
        .iter()
        .filter(|n| n.title.starts_with("Milestone Reached"))
        .count()
}
