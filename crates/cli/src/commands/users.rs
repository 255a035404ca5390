//! The admin page: user account management.

use std::time::Instant;

use samovar_client::ApiClient;
use samovar_client::models::NewUser;
use samovar_client::resources::UserDirectory;
use samovar_core::alert::AlertFeed;
use samovar_core::{Role, UserId};

use super::{CommandResult, confirm, prompt_line};
use crate::render;

/// List all user accounts.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn list(api: &ApiClient) -> CommandResult {
    let directory = UserDirectory::new(api.clone());
    let users = directory.load().await?;
    render::users(&users);
    Ok(())
}

/// Create a user account.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn create(
    api: &ApiClient,
    username: &str,
    full_name: &str,
    role: &str,
    password: Option<String>,
    alerts: &mut AlertFeed,
) -> CommandResult {
    let password = match password {
        Some(password) => password,
        None => prompt_line("رمز عبور")?,
    };

    let account = UserDirectory::new(api.clone())
        .create(&NewUser {
            username: username.to_owned(),
            password,
            full_name: full_name.to_owned(),
            role: Role::from(role),
        })
        .await?;

    alerts.success(
        format!("کاربر {} با موفقیت ایجاد شد", account.username),
        Instant::now(),
    );
    Ok(())
}

/// Flip an account's active flag.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn toggle_active(api: &ApiClient, id: i32, alerts: &mut AlertFeed) -> CommandResult {
    let active = UserDirectory::new(api.clone())
        .toggle_active(UserId::new(id))
        .await?;
    let message = if active {
        "کاربر فعال شد"
    } else {
        "کاربر غیرفعال شد"
    };
    alerts.success(message, Instant::now());
    Ok(())
}

/// Delete an account, confirmation-gated.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn delete(api: &ApiClient, id: i32, yes: bool, alerts: &mut AlertFeed) -> CommandResult {
    if !yes && !confirm("این کاربر حذف شود؟")? {
        alerts.info("حذف لغو شد", Instant::now());
        return Ok(());
    }

    UserDirectory::new(api.clone())
        .delete(UserId::new(id))
        .await?;
    alerts.success("کاربر حذف شد", Instant::now());
    Ok(())
}
