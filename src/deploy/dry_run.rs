use sha2::{Digest, Sha256};
use tracing::info;
use url::Url;

use crate::error::DeploymentFailure;

use super::{DeploymentHandle, Deployer};

/// Validates the call and produces a deterministic handle without touching a chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDeployer;

impl Deployer for DryRunDeployer {
    fn deploy(
        &self,
        contract_name: &str,
        display_name: &str,
        endpoint_url: &str,
    ) -> Result<DeploymentHandle, DeploymentFailure> {
        if contract_name.trim().is_empty() {
            return Err(DeploymentFailure::new("contract name is empty"));
        }

        let endpoint = Url::parse(endpoint_url).map_err(|err| {
            DeploymentFailure::new(format!("invalid endpoint `{endpoint_url}`: {err}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") || endpoint.host_str().is_none() {
            return Err(DeploymentFailure::new(format!(
                "endpoint `{endpoint_url}` is not an http(s) url with a host"
            )));
        }

        let mut hasher = Sha256::new();
        for part in [contract_name, display_name, endpoint_url] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        let id = hex::encode(hasher.finalize());

        info!(contract = contract_name, endpoint = endpoint_url, %id, "dry-run deployment accepted");
        Ok(DeploymentHandle {
            id,
            contract: contract_name.to_string(),
            display_name: display_name.to_string(),
            endpoint_url: endpoint_url.to_string(),
        })
    }
}
