pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod credentials;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolver;

use cli::Cli;
use error::AppResult;

pub use resolver::{DeploymentParameters, DeploymentRequest, NetworkProfile, ProfileTable, resolve};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
