use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "gpr-deploy",
    version,
    about = "Global Property Registry deployment helper"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "development",
        help = "Target network identifier"
    )]
    pub network: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Settings file to use instead of the default")]
    pub settings: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Resolve(ResolveArgs),
    Profiles,
    Networks,
    Init(InitArgs),
    Deploy(DeployArgs),
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(long, help = "Fail instead of falling back to the default profile")]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, help = "Overwrite an existing settings file")]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct DeployArgs {
    #[arg(long, help = "Contract to deploy (defaults to the settings contract)")]
    pub contract: Option<String>,
    #[arg(long, help = "Fail instead of falling back to the default profile")]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long, help = "Contract to show (defaults to the settings contract)")]
    pub contract: Option<String>,
    #[arg(long, help = "Only show the most recent deployment")]
    pub latest: bool,
}
