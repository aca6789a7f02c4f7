// apps/ticketapp/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// JSON file holding every registered user.
  pub users_file: PathBuf,

  /// Directory containing `pages/*.html`.
  pub templates_dir: PathBuf,
  /// Re-read templates from disk before every render.
  pub template_reload: bool,

  pub session_ttl_days: i64,
  /// Adds the `Secure` attribute to every cookie we set.
  pub cookie_secure: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      users_file: PathBuf::from("data/users.json"),
      templates_dir: PathBuf::from("views"),
      template_reload: false,
      session_ttl_days: 30,
      cookie_secure: false,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());
    let defaults = Self::default();

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match get_env("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      None => defaults.server_port,
    };
    let users_file = get_env("USERS_FILE").map(PathBuf::from).unwrap_or(defaults.users_file);
    let templates_dir = get_env("TEMPLATES_DIR").map(PathBuf::from).unwrap_or(defaults.templates_dir);
    let template_reload = parse_flag("TEMPLATE_RELOAD", get_env("TEMPLATE_RELOAD"), defaults.template_reload)?;
    let cookie_secure = parse_flag("COOKIE_SECURE", get_env("COOKIE_SECURE"), defaults.cookie_secure)?;

    let session_ttl_days = match get_env("SESSION_TTL_DAYS") {
      Some(raw) => raw
        .parse::<i64>()
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| AppError::Config(format!("Invalid SESSION_TTL_DAYS value: {}", raw)))?,
      None => defaults.session_ttl_days,
    };

    tracing::info!(
      users_file = %users_file.display(),
      templates_dir = %templates_dir.display(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      users_file,
      templates_dir,
      template_reload,
      session_ttl_days,
      cookie_secure,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_flag(var_name: &str, raw: Option<String>, default: bool) -> Result<bool> {
  match raw {
    Some(raw) => raw
      .trim()
      .to_ascii_lowercase()
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid {} value: {}", var_name, e))),
    None => Ok(default),
  }
}
