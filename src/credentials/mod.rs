pub mod local;
pub mod private_key;

pub use local::LocalProvider;
pub use private_key::PrivateKeyProvider;

use serde::Serialize;
use tracing::debug;

use crate::config::NetworkEntry;
use crate::error::{AppError, AppResult};

/// Deployment transaction before signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsignedTx {
    pub contract: String,
    pub display_name: String,
    pub endpoint_url: String,
}

impl UnsignedTx {
    /// Canonical bytes a provider signs over.
    pub fn payload(&self) -> Vec<u8> {
        format!(
            "{}\n{}\n{}",
            self.contract, self.display_name, self.endpoint_url
        )
        .into_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedTx {
    pub tx: UnsignedTx,
    pub signer: String,
    pub signature: Option<String>,
}

pub trait CredentialProvider {
    fn sign(&self, tx: UnsignedTx) -> AppResult<SignedTx>;
    fn describe(&self) -> String;
}

/// Picks the provider for a network entry. Environment access is injected so
/// callers decide where keys come from.
pub fn provider_for<F>(entry: Option<&NetworkEntry>, env: F) -> AppResult<Box<dyn CredentialProvider>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(source) = entry.and_then(|entry| entry.credential.as_ref()) else {
        debug!("no credential source configured, using local provider");
        return Ok(Box::new(LocalProvider));
    };

    let key = env(&source.private_key_env)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::Credential(format!(
                "environment variable `{}` is not set. add it to your shell or .env file",
                source.private_key_env
            ))
        })?;

    debug!(variable = %source.private_key_env, "using private key provider");
    Ok(Box::new(PrivateKeyProvider::new(key)))
}
