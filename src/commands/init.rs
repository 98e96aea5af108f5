use serde::Serialize;

use crate::cli::InitArgs;
use crate::config::{self, AppPaths, Settings};
use crate::error::{AppError, AppResult};
use crate::output::Output;

#[derive(Debug, Serialize)]
struct InitResult {
    path: String,
    note: &'static str,
}

/// Writes the built-in defaults. The current file is never parsed, so
/// `--force` can replace one that no longer loads.
pub fn run(paths: &AppPaths, output: Output, args: InitArgs) -> AppResult<()> {
    let path = paths.settings_file();
    if path.exists() && !args.force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists. pass --force to overwrite",
            path.display()
        )));
    }

    config::save_settings(paths, &materialized(&Settings::default()))?;

    let result = InitResult {
        path: path.display().to_string(),
        note: "settings written",
    };
    let text = format!("wrote {}", result.path);
    output.emit(&text, &result)
}

/// Spells out every default so the written file is a complete starting point.
fn materialized(settings: &Settings) -> Settings {
    let table = settings.profile_table();
    Settings {
        contract: Some(settings.contract().to_string()),
        profiles: Some(table.entries().to_vec()),
        default_profile: Some(table.default_profile().clone()),
        networks: Some(settings.networks()),
        compilers: settings.compilers.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ProfileTable;

    #[test]
    fn materializes_builtin_defaults() {
        let settings = materialized(&Settings::default());
        assert_eq!(settings.contract.as_deref(), Some("GPR_NodeFactory"));
        assert_eq!(settings.profile_table(), ProfileTable::builtin());
        assert_eq!(settings.networks.as_ref().map(Vec::len), Some(3));
    }
}
