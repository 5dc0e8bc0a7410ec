//! Runtime settings: auth key, API base URL and color output.
//!
//! Each setting comes from the command line first, then the environment, then
//! `~/.config/frc-cli/config.json`.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::FrcError, tba::TBA_BASE_URL, Result};

pub const AUTH_KEY_ENV_VAR: &str = "TBA_AUTH_KEY";
pub const BASE_URL_ENV_VAR: &str = "TBA_BASE_URL";
/// https://no-color.org
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Contents of the optional JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub auth_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub color: Option<bool>,
}

/// Path: ~/.config/frc-cli/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("frc-cli").join("config.json")
}

/// Read the config file. A missing file is an empty config, a malformed one is an error.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    match fs::read_to_string(path) {
        Ok(s) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Ok(serde_json::from_str(&s)?)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub auth_key: String,
    pub base_url: String,
    pub color: bool,
}

impl Settings {
    /// Resolve against the process environment.
    pub fn resolve(auth_key: Option<String>, no_color: bool, file: &FileConfig) -> Result<Self> {
        Self::resolve_with(auth_key, no_color, file, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with<F>(
        auth_key: Option<String>,
        no_color: bool,
        file: &FileConfig,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |s: &String| !s.trim().is_empty();

        let auth_key = auth_key
            .filter(non_empty)
            .or_else(|| env(AUTH_KEY_ENV_VAR).filter(non_empty))
            .or_else(|| file.auth_key.clone().filter(non_empty))
            .ok_or_else(|| FrcError::MissingAuthKey {
                env_var: AUTH_KEY_ENV_VAR.to_string(),
            })?;

        let base_url = env(BASE_URL_ENV_VAR)
            .filter(non_empty)
            .or_else(|| file.base_url.clone().filter(non_empty))
            .unwrap_or_else(|| TBA_BASE_URL.to_string());

        let color = color_enabled_with(no_color, file, &env);

        Ok(Self {
            auth_key,
            base_url,
            color,
        })
    }
}

/// Whether output should be colored, against the process environment.
///
/// Independent of the auth key so output can be styled before the API is needed.
pub fn color_enabled(no_color: bool, file: &FileConfig) -> bool {
    color_enabled_with(no_color, file, &|name: &str| std::env::var(name).ok())
}

/// Whether output should be colored, with an explicit environment lookup.
pub fn color_enabled_with<F>(no_color: bool, file: &FileConfig, env: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    // NO_COLOR disables color when set to anything non-empty.
    !no_color
        && env(NO_COLOR_ENV_VAR).filter(|v| !v.is_empty()).is_none()
        && file.color.unwrap_or(true)
}
