mod common;
use common::{cli_add, init_cli_db, rvo, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

fn seeded_db(name: &str) -> (String, String) {
    let db_path = setup_test_db(name);
    init_cli_db(&db_path);
    let code = cli_add(&db_path, "alice", "2025-09-01", "Food Bank", "3");
    cli_add(&db_path, "alice", "2025-09-15", "Animal Shelter", "2");
    cli_add(&db_path, "bob", "2025-09-02", "Bob's Club", "9");
    rvo()
        .args(["--db", &db_path, "verify", &code])
        .assert()
        .success();
    (db_path, code)
}

#[test]
fn test_export_csv_all() {
    let (db_path, code) = seeded_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,organization"));
    assert!(content.contains("Food Bank"));
    assert!(content.contains("Animal Shelter"));
    assert!(!content.contains("Bob's Club"));
    assert!(!content.contains(&code));
}

#[test]
fn test_export_json_verified_only() {
    let (db_path, _) = seeded_db("export_json_verified");
    let out = temp_out("export_json_verified", "json");

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "json", "--file", &out,
            "--verified",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["organization"], "Food Bank");
    assert_eq!(rows[0]["status"], "verified");
}

#[test]
fn test_export_date_range() {
    let (db_path, _) = seeded_db("export_range");
    let out = temp_out("export_range", "csv");

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--file", &out, "--from",
            "2025-09-10", "--to", "2025-09-30",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Animal Shelter"));
    assert!(!content.contains("Food Bank"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let (db_path, _) = seeded_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rvo()
        .args(["--db", &db_path, "--user", "alice", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Food Bank"));
}

#[test]
fn test_export_with_no_rows_writes_nothing() {
    let (db_path, _) = seeded_db("export_empty");
    let out = temp_out("export_empty", "csv");

    rvo()
        .args([
            "--db", &db_path, "--user", "carol", "export", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No hour entries found"));
    assert!(!std::path::Path::new(&out).exists());
}
