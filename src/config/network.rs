use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppResult;

/// Chain id a network entry accepts. `*` in settings means any chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NetworkId {
    Any,
    Exact(String),
}

impl NetworkId {
    pub fn matches(&self, chain_id: &str) -> bool {
        match self {
            NetworkId::Any => true,
            NetworkId::Exact(id) => id == chain_id,
        }
    }
}

impl From<String> for NetworkId {
    fn from(value: String) -> Self {
        if value == "*" {
            NetworkId::Any
        } else {
            NetworkId::Exact(value)
        }
    }
}

impl From<NetworkId> for String {
    fn from(value: NetworkId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => write!(f, "*"),
            NetworkId::Exact(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transport {
    Host { host: String, port: u16 },
    Rpc { rpc_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSource {
    /// Environment variable holding the signing key.
    pub private_key_env: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub name: String,
    pub network_id: NetworkId,
    pub transport: Transport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<CredentialSource>,
}

impl NetworkEntry {
    pub fn endpoint(&self) -> AppResult<Url> {
        let url = match &self.transport {
            Transport::Host { host, port } => Url::parse(&format!("http://{host}:{port}"))?,
            Transport::Rpc { rpc_url } => Url::parse(rpc_url)?,
        };
        Ok(url)
    }
}

pub fn builtin_networks() -> Vec<NetworkEntry> {
    vec![
        NetworkEntry {
            name: "loc_development".to_string(),
            network_id: NetworkId::Exact("1688688752950".to_string()),
            transport: Transport::Host {
                host: "127.0.0.1".to_string(),
                port: 8545,
            },
            credential: None,
        },
        NetworkEntry {
            name: "sepolia".to_string(),
            network_id: NetworkId::Exact("11155111".to_string()),
            transport: Transport::Rpc {
                rpc_url: "https://rpc.sepolia.org".to_string(),
            },
            credential: Some(CredentialSource {
                private_key_env: "PRIVATE_KEY".to_string(),
            }),
        },
        NetworkEntry {
            name: "loc_development_development".to_string(),
            network_id: NetworkId::Any,
            transport: Transport::Host {
                host: "127.0.0.1".to_string(),
                port: 8545,
            },
            credential: None,
        },
    ]
}
