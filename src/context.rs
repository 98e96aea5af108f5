use std::path::PathBuf;

use tracing::debug;

use crate::config::{self, AppPaths, Settings};
use crate::deploy::Ledger;
use crate::error::{AppError, AppResult};
use crate::output::Output;
use crate::resolver::ProfileTable;

#[derive(Debug)]
pub struct AppContext {
    pub network: String,
    pub settings: Settings,
    pub profiles: ProfileTable,
    pub ledger: Ledger,
    pub output: Output,
}

impl AppContext {
    pub fn discover_paths(settings: Option<PathBuf>) -> AppResult<AppPaths> {
        let paths = AppPaths::discover()?;
        Ok(match settings {
            Some(path) => paths.with_settings_file(path),
            None => paths,
        })
    }

    pub fn with_paths(network: String, json: bool, paths: AppPaths) -> AppResult<Self> {
        let settings = config::load_settings(&paths)?;
        let profiles = settings.profile_table();
        debug!(
            settings = %paths.settings_file().display(),
            profiles = profiles.entries().len(),
            "context ready"
        );
        let ledger = Ledger::new(paths);
        let output = Output::new(json);

        Ok(Self {
            network,
            settings,
            profiles,
            ledger,
            output,
        })
    }

    pub fn contract<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or_else(|| self.settings.contract())
    }

    /// Rejects networks that would silently fall back when `strict` is set.
    pub fn ensure_known_network(&self, strict: bool) -> AppResult<()> {
        if strict && !self.profiles.is_known(&self.network) {
            return Err(AppError::InvalidInput(format!(
                "unknown network `{}`. known networks: {}",
                self.network,
                self.known_networks().join(", ")
            )));
        }
        Ok(())
    }

    fn known_networks(&self) -> Vec<&str> {
        self.profiles
            .entries()
            .iter()
            .map(|profile| profile.network_id.as_str())
            .collect()
    }
}
