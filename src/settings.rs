use serde::Deserialize;
use std::fs;
use thiserror::Error;

use crate::codewars::{CodewarsApi, API_URL};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read profile {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error("Could not parse profile {0}: {1}")]
    Parse(String, #[source] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub server: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: API_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_profile(profile: &str) -> Result<Settings, SettingsError> {
        let path = format!("./profiles/{}.json", profile);
        let file_content =
            fs::read_to_string(&path).map_err(|e| SettingsError::Read(path.clone(), e))?;
        serde_json::from_str::<Settings>(&file_content).map_err(|e| SettingsError::Parse(path, e))
    }

    pub fn api(&self) -> CodewarsApi {
        CodewarsApi::with_server(&self.server)
    }
}
