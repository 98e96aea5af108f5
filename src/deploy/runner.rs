use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::credentials::{CredentialProvider, SignedTx, UnsignedTx};
use crate::error::AppResult;
use crate::resolver::{DeploymentParameters, DeploymentRequest, ProfileTable};

use super::{DeploymentHandle, DeploymentRecord, Deployer, Ledger};

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentOutcome {
    pub network: String,
    pub fell_back: bool,
    pub parameters: DeploymentParameters,
    pub signed: SignedTx,
    pub handle: DeploymentHandle,
    pub ledger_path: Option<PathBuf>,
}

/// One deployment run: resolve, sign, deploy, record.
pub struct DeploymentRunner<'a> {
    table: &'a ProfileTable,
    provider: &'a dyn CredentialProvider,
    deployer: &'a dyn Deployer,
    ledger: Option<&'a Ledger>,
}

impl<'a> DeploymentRunner<'a> {
    pub fn new(
        table: &'a ProfileTable,
        provider: &'a dyn CredentialProvider,
        deployer: &'a dyn Deployer,
    ) -> Self {
        Self {
            table,
            provider,
            deployer,
            ledger: None,
        }
    }

    pub fn with_ledger(mut self, ledger: &'a Ledger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn run(&self, network: &str, contract: &str) -> AppResult<DeploymentOutcome> {
        let fell_back = !self.table.is_known(network);
        if fell_back {
            warn!(
                network,
                fallback = %self.table.default_profile().network_id,
                "unknown network, using default profile"
            );
        }

        let parameters = self.table.resolve(&DeploymentRequest::new(network));
        let signed = self.provider.sign(UnsignedTx {
            contract: contract.to_string(),
            display_name: parameters.display_name.clone(),
            endpoint_url: parameters.endpoint_url.clone(),
        })?;

        let handle = self.deployer.deploy(
            contract,
            &parameters.display_name,
            &parameters.endpoint_url,
        )?;
        info!(network, contract, id = %handle.id, "deployment completed");

        let ledger_path = match self.ledger {
            Some(ledger) => Some(ledger.append(DeploymentRecord {
                contract: contract.to_string(),
                network: network.to_string(),
                display_name: parameters.display_name.clone(),
                endpoint_url: parameters.endpoint_url.clone(),
                handle: handle.clone(),
                signer: signed.signer.clone(),
                signature: signed.signature.clone(),
                date: Utc::now().to_rfc3339(),
                comment: None,
            })?),
            None => None,
        };

        Ok(DeploymentOutcome {
            network: network.to_string(),
            fell_back,
            parameters,
            signed,
            handle,
            ledger_path,
        })
    }
}
