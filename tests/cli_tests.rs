use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cli_add, init_cli_db, rvo, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");
    rvo()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
    assert!(std::path::Path::new(&db_path).exists());

    rvo()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_add_list_show() {
    let db_path = setup_test_db("cli_add_list_show");
    init_cli_db(&db_path);

    let code = cli_add(&db_path, "alice", "2025-09-01", "Food Bank", "2.5");
    assert!(!code.is_empty());

    rvo()
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Food Bank"))
        .stdout(contains("pending"))
        .stdout(contains(code.as_str()).not());

    rvo()
        .args(["--db", &db_path, "--user", "alice", "show", "1"])
        .assert()
        .success()
        .stdout(contains(code.as_str()))
        .stdout(contains("2.5"));

    rvo()
        .args(["--db", &db_path, "--user", "bob", "show", "1"])
        .assert()
        .failure()
        .stderr(contains("belongs to another user"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_add_invalid");
    init_cli_db(&db_path);

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "add", "2025-09-01", "--org", "Food Bank",
            "--desc", "Sorting", "--hours", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("hours must be greater than 0"));

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "add", "2025-13-45", "--org", "Food Bank",
            "--desc", "Sorting", "--hours", "2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_verify_total_status_and_notifications() {
    let db_path = setup_test_db("cli_lifecycle");
    init_cli_db(&db_path);

    let code = cli_add(&db_path, "alice", "2025-09-01", "Food Bank", "120");

    rvo()
        .args(["--db", &db_path, "verify", &code.to_lowercase()])
        .assert()
        .success()
        .stdout(contains("Verified 120h"));

    // second verification is a no-op, not an error
    rvo()
        .args(["--db", &db_path, "verify", &code])
        .assert()
        .success();

    rvo()
        .args(["--db", &db_path, "--user", "alice", "total"])
        .assert()
        .success()
        .stdout("120\n");

    rvo()
        .args(["--db", &db_path, "--user", "alice", "status"])
        .assert()
        .success()
        .stdout(contains("bronze"))
        .stdout(contains("Hours to next"))
        .stdout(contains("55"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "notifications", "list"])
        .assert()
        .success()
        .stdout(contains("Hours Logged"))
        .stdout(contains("Hours Approved"))
        .stdout(contains("Milestone Reached: 100 Hours"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "notifications", "unread"])
        .assert()
        .success()
        .stdout("3\n");

    rvo()
        .args(["--db", &db_path, "--user", "alice", "notifications", "read-all"])
        .assert()
        .success()
        .stdout(contains("3 notification(s)"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "notifications", "unread"])
        .assert()
        .success()
        .stdout("0\n");

    rvo()
        .args(["--db", &db_path, "--user", "bob", "notifications", "read", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_verify_unknown_code_fails() {
    let db_path = setup_test_db("cli_verify_unknown");
    init_cli_db(&db_path);

    rvo()
        .args(["--db", &db_path, "verify", "NOPE-NOPE"])
        .assert()
        .failure()
        .stderr(contains("Verification code not found"));
}

#[test]
fn test_profile_age_selects_youth_band() {
    let db_path = setup_test_db("cli_profile_youth");
    init_cli_db(&db_path);

    rvo()
        .args(["--db", &db_path, "--user", "kid", "profile", "--age", "13"])
        .assert()
        .success()
        .stdout(contains("Profile updated"));

    let code = cli_add(&db_path, "kid", "2025-09-01", "Library", "80");
    rvo()
        .args(["--db", &db_path, "verify", &code])
        .assert()
        .success();

    rvo()
        .args(["--db", &db_path, "--user", "kid", "status"])
        .assert()
        .success()
        .stdout(contains("youth"))
        .stdout(contains("silver"));

    rvo()
        .args(["--db", &db_path, "--user", "kid", "profile", "--age", "300"])
        .assert()
        .failure()
        .stderr(contains("age must be"));
}

#[test]
fn test_edit_and_delete() {
    let db_path = setup_test_db("cli_edit_delete");
    init_cli_db(&db_path);
    cli_add(&db_path, "alice", "2025-09-01", "Food Bank", "4");

    rvo()
        .args([
            "--db", &db_path, "--user", "alice", "edit", "1", "--hours", "6", "--verified",
            "true",
        ])
        .assert()
        .success()
        .stdout(contains("verified"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "total"])
        .assert()
        .success()
        .stdout("6\n");

    rvo()
        .args(["--db", &db_path, "--user", "alice", "edit", "1"])
        .assert()
        .failure()
        .stderr(contains("nothing to update"));

    rvo()
        .args(["--db", &db_path, "--user", "bob", "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("belongs to another user"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "total"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_delete_prompt_can_be_declined() {
    let db_path = setup_test_db("cli_delete_prompt");
    init_cli_db(&db_path);
    cli_add(&db_path, "alice", "2025-09-01", "Food Bank", "4");

    rvo()
        .args(["--db", &db_path, "--user", "alice", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rvo()
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Food Bank"));
}
