//! Sign-in and session commands.

use std::time::Instant;

use samovar_client::{ApiClient, AuthService};
use samovar_core::alert::AlertFeed;

use super::{CommandResult, confirm, prompt_line};
use crate::render;

/// Sign in and persist the session.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: Option<String>,
    alerts: &mut AlertFeed,
) -> CommandResult {
    let password = match password {
        Some(password) => password,
        None => prompt_line("رمز عبور")?,
    };

    let auth = AuthService::new(api.clone());
    let session = auth.login(username, &password).await?;
    alerts.success(
        format!("خوش آمدید، {}", session.user.full_name),
        Instant::now(),
    );
    Ok(())
}

/// Sign out, confirmation-gated like the web app's logout button.
///
/// # Errors
///
/// Only if the confirmation prompt cannot be read.
pub fn logout(api: &ApiClient, yes: bool, alerts: &mut AlertFeed) -> CommandResult {
    if !yes && !confirm("آیا می‌خواهید از سیستم خارج شوید؟")? {
        alerts.info("خروج لغو شد", Instant::now());
        return Ok(());
    }

    AuthService::new(api.clone()).logout();
    alerts.success("از سیستم خارج شدید", Instant::now());
    Ok(())
}

/// Refresh the cached profile and show it.
///
/// # Errors
///
/// Propagates the underlying client error; a failed refresh has already
/// dropped the session.
pub async fn whoami(api: &ApiClient) -> CommandResult {
    let user = AuthService::new(api.clone()).refresh_profile().await?;
    render::profile(&user);
    Ok(())
}
