pub mod dry_run;
pub mod ledger;
pub mod runner;

pub use dry_run::DryRunDeployer;
pub use ledger::{DeploymentRecord, Ledger};
pub use runner::{DeploymentOutcome, DeploymentRunner};

use serde::{Deserialize, Serialize};

use crate::error::DeploymentFailure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentHandle {
    pub id: String,
    pub contract: String,
    pub display_name: String,
    pub endpoint_url: String,
}

/// Performs the actual contract deployment with resolved constructor arguments.
pub trait Deployer {
    fn deploy(
        &self,
        contract_name: &str,
        display_name: &str,
        endpoint_url: &str,
    ) -> Result<DeploymentHandle, DeploymentFailure>;
}
