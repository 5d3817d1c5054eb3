mod common;
use common::memory_pool;
use rvolunteer::core::feed::{FeedLogic, MAX_LIMIT};
use rvolunteer::core::notify;
use rvolunteer::db::pool::DbPool;
use rvolunteer::errors::AppError;
use rvolunteer::models::notification::{NewNotification, NotificationCategory};
use serde_json::json;

fn push(pool: &DbPool, user: &str, title: &str) -> i64 {
    notify::emit(
        &pool.conn,
        &NewNotification {
            user_id: user.to_string(),
            title: title.to_string(),
            message: format!("{title} body"),
            category: NotificationCategory::System,
            action_url: None,
            metadata: json!({ "title": title }),
        },
    )
    .expect("emit notification")
    .id
}

#[test]
fn test_list_is_newest_first_and_user_scoped() {
    let pool = memory_pool();
    let a = push(&pool, "alice", "first");
    let b = push(&pool, "alice", "second");
    push(&pool, "bob", "other");

    let items = FeedLogic::list(&pool, "alice", false, None, None).unwrap();
    let ids: Vec<i64> = items.iter().map(|n| n.id).collect();
    assert_eq!(ids, [b, a]);
    assert!(items.iter().all(|n| n.user_id == "alice"));
    assert_eq!(items[0].metadata["title"], "second");
    assert!(!items[0].is_read);
    assert!(items[0].read_at.is_none());
}

#[test]
fn test_read_state_and_unread_count() {
    let pool = memory_pool();
    let a = push(&pool, "alice", "one");
    push(&pool, "alice", "two");
    push(&pool, "alice", "three");
    assert_eq!(FeedLogic::unread_count(&pool, "alice").unwrap(), 3);

    FeedLogic::mark_read(&pool, a, "alice").unwrap();
    assert_eq!(FeedLogic::unread_count(&pool, "alice").unwrap(), 2);

    let read_at = FeedLogic::list(&pool, "alice", false, None, None)
        .unwrap()
        .into_iter()
        .find(|n| n.id == a)
        .and_then(|n| n.read_at)
        .expect("read_at set");

    // marking again is harmless and keeps the first timestamp
    FeedLogic::mark_read(&pool, a, "alice").unwrap();
    let again = FeedLogic::list(&pool, "alice", false, None, None)
        .unwrap()
        .into_iter()
        .find(|n| n.id == a)
        .and_then(|n| n.read_at);
    assert_eq!(again.as_deref(), Some(read_at.as_str()));

    let unread = FeedLogic::list(&pool, "alice", true, None, None).unwrap();
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|n| !n.is_read));

    assert_eq!(FeedLogic::mark_all_read(&pool, "alice").unwrap(), 2);
    assert_eq!(FeedLogic::unread_count(&pool, "alice").unwrap(), 0);
    assert_eq!(FeedLogic::mark_all_read(&pool, "alice").unwrap(), 0);
}

#[test]
fn test_other_users_notifications_are_not_found() {
    let pool = memory_pool();
    let id = push(&pool, "alice", "private");

    assert!(matches!(
        FeedLogic::mark_read(&pool, id, "bob").unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        FeedLogic::delete(&pool, id, "bob").unwrap_err(),
        AppError::NotFound(_)
    ));
    assert_eq!(FeedLogic::mark_all_read(&pool, "bob").unwrap(), 0);
    assert_eq!(FeedLogic::unread_count(&pool, "alice").unwrap(), 1);
}

#[test]
fn test_delete() {
    let pool = memory_pool();
    let id = push(&pool, "alice", "bye");
    FeedLogic::delete(&pool, id, "alice").unwrap();
    assert!(FeedLogic::list(&pool, "alice", false, None, None).unwrap().is_empty());
    assert!(matches!(
        FeedLogic::delete(&pool, id, "alice").unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[test]
fn test_pagination_limits() {
    let pool = memory_pool();
    for i in 0..120 {
        push(&pool, "alice", &format!("n{i}"));
    }

    assert_eq!(FeedLogic::list(&pool, "alice", false, None, None).unwrap().len(), 50);
    assert_eq!(
        FeedLogic::list(&pool, "alice", false, Some(500), None).unwrap().len() as i64,
        MAX_LIMIT
    );
    assert_eq!(
        FeedLogic::list(&pool, "alice", false, Some(50), Some(100)).unwrap().len(),
        20
    );

    let page1 = FeedLogic::list(&pool, "alice", false, Some(10), Some(0)).unwrap();
    let page2 = FeedLogic::list(&pool, "alice", false, Some(10), Some(10)).unwrap();
    assert!(page1.last().unwrap().id > page2.first().unwrap().id);

    assert!(matches!(
        FeedLogic::list(&pool, "alice", false, Some(0), None).unwrap_err(),
        AppError::Validation(_)
    ));
    assert!(matches!(
        FeedLogic::list(&pool, "alice", false, Some(10), Some(-1)).unwrap_err(),
        AppError::Validation(_)
    ));
}
