use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::{ProfileLogic, ProfileUpdate};
use crate::db::users::UserProfile;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        age,
        clear_age,
        name,
    } = cmd
    {
        let user = cfg.acting_user()?;
        let mut pool = open_pool(cfg)?;

        if age.is_none() && !*clear_age && name.is_none() {
            match ProfileLogic::show(&pool, user)? {
                Some(p) => print_profile(&p),
                None => info(format!(
                    "No profile for {} yet. Set one with `rvolunteer profile --age <AGE>`.",
                    user
                )),
            }
            return Ok(());
        }

        let profile = ProfileLogic::update(
            &mut pool,
            user,
            ProfileUpdate {
                display_name: name.clone(),
                age: *age,
                clear_age: *clear_age,
            },
        )?;
        success("Profile updated.");
        print_profile(&profile);
    }
    Ok(())
}

fn print_profile(p: &UserProfile) {
    header(format!("Profile {}", p.user_id));
    field("Name", p.display_name.as_deref().unwrap_or("-"));
    field(
        "Age",
        p.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
    );
    field("Updated", &p.updated_at);
}
