use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, NotificationAction};
use crate::config::Config;
use crate::core::feed::FeedLogic;
use crate::errors::AppResult;
use crate::models::notification::NotificationRecord;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notifications { action } = cmd {
        let user = cfg.acting_user()?;
        let pool = open_pool(cfg)?;

        let action = action.clone().unwrap_or(NotificationAction::List {
            unread: false,
            limit: None,
            offset: None,
        });

        match action {
            NotificationAction::List {
                unread,
                limit,
                offset,
            } => {
                let limit = limit.or(Some(cfg.notifications_page_size));
                let items = FeedLogic::list(&pool, user, unread, limit, offset)?;
                if items.is_empty() {
                    info("No notifications.");
                } else {
                    print!("{}", render(&items));
                }
            }
            NotificationAction::Unread => {
                println!("{}", FeedLogic::unread_count(&pool, user)?);
            }
            NotificationAction::Read { id } => {
                FeedLogic::mark_read(&pool, id, user)?;
                success(format!("Notification #{} marked as read.", id));
            }
            NotificationAction::ReadAll => {
                let n = FeedLogic::mark_all_read(&pool, user)?;
                success(format!("{} notification(s) marked as read.", n));
            }
            NotificationAction::Delete { id } => {
                FeedLogic::delete(&pool, id, user)?;
                success(format!("Notification #{} deleted.", id));
            }
        }
    }
    Ok(())
}

fn render(items: &[NotificationRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("", 1),
        Column::new("CREATED", 19),
        Column::new("CATEGORY", 11),
        Column::new("TITLE", 32),
        Column::new("MESSAGE", 60),
    ]);

    for n in items {
        table.add_row(vec![
            n.id.to_string(),
            (if n.is_read { " " } else { "*" }).to_string(),
            n.created_at.chars().take(19).collect(),
            n.category.to_db_str().to_string(),
            n.title.clone(),
            n.message.clone(),
        ]);
    }

    table.render()
}
