//! Page-level commands.
//!
//! Each submodule covers one page of the web app. Commands own the
//! error presentation: manager failures bubble up to `main`, which turns
//! them into danger alerts.

#![allow(clippy::print_stdout)]

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;

use std::io::Write;

use samovar_client::ApiClient;

use crate::render;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Ask a yes/no question on the terminal; default is no.
pub fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

/// Read one line, for credentials given interactively.
pub fn prompt_line(prompt: &str) -> std::io::Result<String> {
    print!("{prompt}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Check the server is reachable.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn ping(api: &ApiClient) -> CommandResult {
    let info = samovar_client::resources::server_info(api).await?;
    render::server_info(&info);
    Ok(())
}
