mod common;
use common::{count_milestones, count_titled, file_pool, new_entry, setup_test_db};
use rvolunteer::core::notify::TITLE_APPROVED;
use rvolunteer::core::recognition::compute_total;
use rvolunteer::core::verification::VerificationLogic;
use rvolunteer::db::pool::DbPool;
use rvolunteer::models::recognition::RecognitionConfig;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_concurrent_creates_get_distinct_codes() {
    let db_path = setup_test_db("concurrent_creates");
    drop(file_pool(&db_path));

    let per_thread = 25;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let db_path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut pool = DbPool::new(&db_path).expect("open db");
                barrier.wait();
                (0..per_thread)
                    .map(|i| {
                        VerificationLogic::create_entry(
                            &mut pool,
                            &format!("user{t}"),
                            new_entry("Shelter", 1.0 + i as f64, "2025-09-01"),
                        )
                        .expect("concurrent create")
                        .verification_code
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let codes: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("worker panicked"))
        .collect();

    let distinct: HashSet<&String> = codes.iter().collect();
    assert_eq!(codes.len(), THREADS * per_thread);
    assert_eq!(distinct.len(), codes.len());
}

#[test]
fn test_concurrent_verification_applies_once() {
    let db_path = setup_test_db("concurrent_verify");
    let mut pool = file_pool(&db_path);
    let entry =
        VerificationLogic::create_entry(&mut pool, "alice", new_entry("Food Bank", 60.0, "2025-09-01"))
            .expect("create entry");

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let db_path = db_path.clone();
            let code = entry.verification_code.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut pool = DbPool::new(&db_path).expect("open db");
                barrier.wait();
                VerificationLogic::verify_by_code(&mut pool, &code, &RecognitionConfig::default())
                    .expect("concurrent verify")
                    .verified
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().expect("worker panicked"));
    }

    assert_eq!(compute_total(&pool.conn, "alice").unwrap(), 60.0);
    assert_eq!(count_titled(&pool, "alice", TITLE_APPROVED), 1);
    assert_eq!(count_milestones(&pool, "alice"), 1);
}
