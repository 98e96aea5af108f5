use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "gpr-deploy";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    settings_file: PathBuf,
    deployments_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        Self::with_roots(config_root.join(APP_DIR), data_root.join(APP_DIR))
    }

    pub fn with_roots(config_dir: PathBuf, data_dir: PathBuf) -> AppResult<Self> {
        let settings_file = config_dir.join(SETTINGS_FILE);
        let deployments_dir = data_dir.join("deployments");

        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&deployments_dir)?;

        Ok(Self {
            settings_file,
            deployments_dir,
        })
    }

    pub fn with_settings_file(mut self, path: PathBuf) -> Self {
        self.settings_file = path;
        self
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Always a direct grandchild of the deployments directory, distinct per
    /// `(network, contract)` pair.
    pub fn ledger_file(&self, network: &str, contract: &str) -> PathBuf {
        self.deployments_dir
            .join(path_segment(network))
            .join(format!("{}.json", path_segment(contract)))
    }
}

/// Maps an arbitrary name onto a single safe path component.
///
/// Names made only of `[A-Za-z0-9._-]` (other than `""`, `.`, `..`) pass
/// through. Anything else is rewritten and tagged with `~` plus a digest of
/// the raw name; `~` never survives the rewrite, so the mapping is injective.
fn path_segment(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned == name && !matches!(name, "" | "." | "..") {
        return cleaned;
    }

    let digest = Sha256::digest(name.as_bytes());
    format!("{cleaned}~{}", hex::encode(&digest[..8]))
}
