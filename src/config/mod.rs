pub mod network;
pub mod paths;
pub mod settings;

pub use network::{CredentialSource, NetworkEntry, NetworkId, Transport};
pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    let settings = settings::load(paths.settings_file())?;
    settings.validate()?;
    Ok(settings)
}

pub fn save_settings(paths: &AppPaths, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(), settings)
}
