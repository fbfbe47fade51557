// ccp-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use super::error::Result;

const DEFAULT_GAME_PATH: &str = ".";
const DEFAULT_OUTPUT_DIR: &str = ".";
const FALLBACK_LOG_DIR: &str = "ccp_logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub game_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading ccp configuration");

        let game_path = env_path("CCP_GAME_PATH").unwrap_or_else(|| {
            debug!(
                "CCP_GAME_PATH not set or empty, falling back to default: {}",
                DEFAULT_GAME_PATH
            );
            PathBuf::from(DEFAULT_GAME_PATH)
        });

        let output_dir =
            env_path("CCP_OUTPUT_DIR").unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_dir = env_path("CCP_LOG_DIR")
            .or_else(|| {
                ProjectDirs::from("", "", "ccp").map(|dirs| dirs.data_local_dir().join("logs"))
            })
            .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_DIR));

        debug!(
            "Configuration loaded: game_path={}, output_dir={}, log_dir={}",
            game_path.display(),
            output_dir.display(),
            log_dir.display()
        );
        Ok(Self {
            game_path,
            output_dir,
            log_dir,
        })
    }

    pub fn game_path(&self) -> &Path {
        &self.game_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logs_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Directory holding per-package `.ini` files that ship alongside a package.
    pub fn game_config_dir(&self) -> PathBuf {
        self.game_path.join("Config")
    }

    /// Returns a copy with the game path replaced when an override is given.
    pub fn with_game_path(mut self, game_path: Option<&Path>) -> Self {
        if let Some(path) = game_path {
            self.game_path = path.to_path_buf();
        }
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<&Path>) -> Self {
        if let Some(path) = output_dir {
            self.output_dir = path.to_path_buf();
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_path: PathBuf::from(DEFAULT_GAME_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_dir: PathBuf::from(FALLBACK_LOG_DIR),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
