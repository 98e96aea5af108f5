use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AppPaths;
use crate::error::AppResult;

use super::DeploymentHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub contract: String,
    pub network: String,
    pub display_name: String,
    pub endpoint_url: String,
    pub handle: DeploymentHandle,
    pub signer: String,
    #[serde(default)]
    pub signature: Option<String>,
    pub date: String,
    // Free-form; edit the ledger json by hand to annotate a deployment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Per-network, per-contract JSON history of deployments.
#[derive(Debug, Clone)]
pub struct Ledger {
    paths: AppPaths,
}

impl Ledger {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn path(&self, network: &str, contract: &str) -> PathBuf {
        self.paths.ledger_file(network, contract)
    }

    pub fn append(&self, record: DeploymentRecord) -> AppResult<PathBuf> {
        let path = self.path(&record.network, &record.contract);
        let mut records = self.load(&record.network, &record.contract)?;
        records.push(record);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&records)?;
        fs::write(&path, payload)?;
        Ok(path)
    }

    pub fn load(&self, network: &str, contract: &str) -> AppResult<Vec<DeploymentRecord>> {
        let path = self.path(network, contract);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read(&path)?;
        let records = serde_json::from_slice(&raw)?;
        Ok(records)
    }

    pub fn latest(&self, network: &str, contract: &str) -> AppResult<Option<DeploymentRecord>> {
        Ok(self.load(network, contract)?.pop())
    }
}
