use crate::api::DimClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "dim.client_settings";

/// Port the Dim server listens on when nothing else is configured.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings database: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("local storage: {0}")]
    Storage(String),
    #[error("settings encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the server lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub server_url: String,
    #[serde(default)]
    pub token: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            token: String::new(),
        }
    }
}

impl ClientSettings {
    pub fn client(&self) -> DimClient {
        DimClient::new(self.server_url.clone())
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_server_url() -> String {
    let location = web_sys::window().map(|window| window.location());
    let hostname = location
        .as_ref()
        .and_then(|location| location.hostname().ok())
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or_else(|| "localhost".to_string());
    let protocol = location
        .as_ref()
        .and_then(|location| location.protocol().ok())
        .unwrap_or_else(|| "http:".to_string());
    format!("{protocol}//{hostname}:{DEFAULT_SERVER_PORT}")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_server_url() -> String {
    server_url_or_local(std::env::var("DIM_SERVER_URL").ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn server_url_or_local(configured: Option<String>) -> String {
    configured
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| format!("http://localhost:{DEFAULT_SERVER_PORT}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), SettingsError> {
    let conn = get_db_connection()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), SettingsError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: ClientSettings) -> Result<(), SettingsError> {
    let conn = get_db_connection()?;
    let settings_json = serde_json::to_string(&settings)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('client_settings', ?1)",
        [&settings_json],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: ClientSettings) -> Result<(), SettingsError> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| SettingsError::Storage(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<ClientSettings, SettingsError> {
    let conn = get_db_connection()?;
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'client_settings'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(ClientSettings::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<ClientSettings, SettingsError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(ClientSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, SettingsError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("dim-web"))
        .unwrap_or_else(|| std::path::PathBuf::from(".dim-web"));
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!("could not create {}: {e}", data_dir.display());
    }

    Ok(rusqlite::Connection::open(data_dir.join("settings.db"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_settings_without_token_still_load() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"server_url": "http://nas:8000"}"#).unwrap();
        assert_eq!(settings.server_url, "http://nas:8000");
        assert!(!settings.has_token());
        assert_eq!(settings.client().events_url(), "ws://nas:8000/ws");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn desktop_default_points_at_local_server_port() {
        assert_eq!(server_url_or_local(None), "http://localhost:8000");
        assert_eq!(server_url_or_local(Some("  ".into())), "http://localhost:8000");
        assert_eq!(
            server_url_or_local(Some(" http://nas:9000 ".into())),
            "http://nas:9000"
        );
    }
}
