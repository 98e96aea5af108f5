use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, AppResult};
use crate::resolver::{NetworkProfile, ProfileTable};

use super::network::{NetworkEntry, builtin_networks};

pub const DEFAULT_CONTRACT: &str = "GPR_NodeFactory";
const DEFAULT_SOLC_VERSION: &str = "0.8.20";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcPin {
    pub version: String,
}

impl Default for SolcPin {
    fn default() -> Self {
        Self {
            version: DEFAULT_SOLC_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compilers {
    #[serde(default)]
    pub solc: SolcPin,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub profiles: Option<Vec<NetworkProfile>>,
    #[serde(default)]
    pub default_profile: Option<NetworkProfile>,
    #[serde(default)]
    pub networks: Option<Vec<NetworkEntry>>,
    #[serde(default)]
    pub compilers: Compilers,
}

impl Settings {
    pub fn contract(&self) -> &str {
        self.contract.as_deref().unwrap_or(DEFAULT_CONTRACT)
    }

    /// Resolver table from settings, filling any missing half from the built-in table.
    pub fn profile_table(&self) -> ProfileTable {
        let builtin = ProfileTable::builtin();
        let entries = self
            .profiles
            .clone()
            .unwrap_or_else(|| builtin.entries().to_vec());
        let default = self
            .default_profile
            .clone()
            .unwrap_or_else(|| builtin.default_profile().clone());
        ProfileTable::new(entries, default)
    }

    pub fn networks(&self) -> Vec<NetworkEntry> {
        self.networks.clone().unwrap_or_else(builtin_networks)
    }

    pub fn network(&self, name: &str) -> Option<NetworkEntry> {
        self.networks().into_iter().find(|entry| entry.name == name)
    }

    pub fn solc_version(&self) -> &str {
        &self.compilers.solc.version
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.contract().trim().is_empty() {
            return Err(AppError::Config("contract name must not be empty".to_string()));
        }

        if self.solc_version().trim().is_empty() {
            return Err(AppError::Config(
                "compilers.solc.version must not be empty".to_string(),
            ));
        }

        let table = self.profile_table();
        let mut seen = HashSet::new();
        for profile in table.entries() {
            if !seen.insert(profile.network_id.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate profile for network `{}`",
                    profile.network_id
                )));
            }
        }
        for profile in table.entries().iter().chain([table.default_profile()]) {
            Url::parse(&profile.endpoint_url).map_err(|err| {
                AppError::Config(format!(
                    "profile `{}` has invalid endpoint_url `{}`: {err}",
                    profile.network_id, profile.endpoint_url
                ))
            })?;
        }

        let mut names = HashSet::new();
        for entry in self.networks() {
            if !names.insert(entry.name.clone()) {
                return Err(AppError::Config(format!(
                    "duplicate network entry `{}`",
                    entry.name
                )));
            }
            entry.endpoint().map_err(|err| {
                AppError::Config(format!("network `{}` has invalid transport: {err}", entry.name))
            })?;
        }

        Ok(())
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
