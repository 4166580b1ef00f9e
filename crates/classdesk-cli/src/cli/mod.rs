use crate::{logging, tui};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use classdesk_api::auth::KeyringCredentials;
use classdesk_api::{ApiClient, ApiError};
use classdesk_core::config::{AppConfig, default_config_path};
use classdesk_core::credentials::{CredentialStore, MemoryCredentials};
use classdesk_core::model::{AttendanceStatus, ChatRole};
use classdesk_core::session::SessionHandle;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod admin_cmd;
mod app;
mod args;
mod auth_cmd;
mod chat_cmd;
mod config_cmd;
#[cfg(test)]
mod tests;

use args::*;

use admin_cmd::{handle_attendance, handle_marks, handle_report, handle_students};
use auth_cmd::{handle_login, handle_logout};
use chat_cmd::{handle_chat, handle_health};
use config_cmd::handle_config;

pub fn run() -> anyhow::Result<()> {
    app::run()
}

/// Builds the backend client shared by every subcommand. `--token` swaps
/// the keyring for an in-memory slot so the credential never persists.
fn build_client(
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<(ApiClient, AppConfig)> {
    let config_path = default_config_path()?;
    let config = AppConfig::load(&config_path)?;
    let base_url = base_url.or_else(|| config.backend_url()).context(
        "backend URL not configured; run `classdesk config init --base-url <URL>` or pass --base-url",
    )?;
    let credentials: Arc<dyn CredentialStore> = match token {
        Some(token) => Arc::new(MemoryCredentials::with_token(token)),
        None => Arc::new(KeyringCredentials),
    };
    let client = ApiClient::new(&base_url, credentials, SessionHandle::new())?;
    Ok((client, config))
}

/// Turns an API failure into the line shown to the operator. Unauthorized
/// means the stored credential was already cleared by the client.
fn describe_api_error(context: &str, err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => {
            format!("{context}: admin credential rejected and cleared; run `classdesk login <TOKEN>`")
        }
        ApiError::Network(_) => format!("{context}: server unreachable. Is the backend running?"),
        other => format!("{context}: {other}"),
    }
}
