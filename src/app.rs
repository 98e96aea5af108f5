use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        network,
        json,
        verbose,
        settings,
        command,
    } = cli;

    logging::setup_tracing_logger(verbose);
    debug!(%network, ?command, "starting");

    let paths = AppContext::discover_paths(settings)?;

    // init must work even when the existing settings file does not validate
    match command {
        Command::Init(args) => commands::init::run(&paths, Output::new(json), args),
        Command::Resolve(args) => {
            commands::resolve::run(&AppContext::with_paths(network, json, paths)?, args)
        }
        Command::Profiles => commands::profiles::run(&AppContext::with_paths(network, json, paths)?),
        Command::Networks => commands::networks::run(&AppContext::with_paths(network, json, paths)?),
        Command::Deploy(args) => {
            commands::deploy::run(&AppContext::with_paths(network, json, paths)?, args)
        }
        Command::History(args) => {
            commands::history::run(&AppContext::with_paths(network, json, paths)?, args)
        }
    }
}
