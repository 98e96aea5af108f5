use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub network_id: String,
    pub endpoint_url: String,
    pub display_name: String,
}

impl NetworkProfile {
    pub fn new(
        network_id: impl Into<String>,
        endpoint_url: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            network_id: network_id.into(),
            endpoint_url: endpoint_url.into(),
            display_name: display_name.into(),
        }
    }

    pub fn parameters(&self) -> DeploymentParameters {
        DeploymentParameters {
            display_name: self.display_name.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub network_id: String,
}

impl DeploymentRequest {
    pub fn new(network_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
        }
    }
}

/// Constructor arguments handed verbatim to the deployer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentParameters {
    pub display_name: String,
    pub endpoint_url: String,
}
