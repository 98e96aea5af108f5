use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::AppResult;

use super::{CredentialProvider, SignedTx, UnsignedTx};

/// Signs with a caller-supplied key. The signature is a keyed SHA-256 digest
/// over the transaction payload; chain signing schemes live in the wallet.
#[derive(Clone)]
pub struct PrivateKeyProvider {
    key: String,
}

impl PrivateKeyProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Short public identifier for the key, safe to print.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.key.as_bytes());
        hex::encode(&digest[..4])
    }
}

impl fmt::Debug for PrivateKeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyProvider")
            .field("key", &"<redacted>")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl CredentialProvider for PrivateKeyProvider {
    fn sign(&self, tx: UnsignedTx) -> AppResult<SignedTx> {
        let mut hasher = Sha256::new();
        hasher.update(self.key.as_bytes());
        hasher.update(tx.payload());
        let signature = hex::encode(hasher.finalize());

        Ok(SignedTx {
            tx,
            signer: self.describe(),
            signature: Some(signature),
        })
    }

    fn describe(&self) -> String {
        format!("private-key:{}", self.fingerprint())
    }
}
