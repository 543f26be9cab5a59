//! Server configuration from an optional TOML file plus environment overrides.
//!
//! FONTSECA_CONFIG_PATH : path to a TOML file (see `ServerConfig`)
//! PORT                 : overrides `port`

use serde::Deserialize;
use tracing::{error, info};

pub const CONFIG_PATH_ENV: &str = "FONTSECA_CONFIG_PATH";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub port: u16,
  /// Served under `/static`.
  pub static_dir: String,
  /// Allow any origin/method/header. Turn off when a proxy handles CORS.
  pub cors_allow_any: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      port: 3000,
      static_dir: "./static".into(),
      cors_allow_any: true,
    }
  }
}

impl ServerConfig {
  /// Loads the TOML file named by FONTSECA_CONFIG_PATH, if any, then applies
  /// PORT. Unreadable or invalid files are logged and defaults are used.
  pub fn from_env() -> Self {
    let mut cfg = std::env::var(CONFIG_PATH_ENV)
      .ok()
      .and_then(|path| load_file(&path))
      .unwrap_or_default();
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
      cfg.port = port;
    }
    cfg
  }

  pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }
}

fn load_file(path: &str) -> Option<ServerConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match ServerConfig::from_toml(&s) {
      Ok(cfg) => {
        info!(target: "fontseca", %path, "Loaded server config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "fontseca", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "fontseca", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
