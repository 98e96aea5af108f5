use crate::error::AppResult;

use super::{CredentialProvider, SignedTx, UnsignedTx};

/// Leaves signing to the local node's unlocked accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProvider;

impl CredentialProvider for LocalProvider {
    fn sign(&self, tx: UnsignedTx) -> AppResult<SignedTx> {
        Ok(SignedTx {
            tx,
            signer: self.describe(),
            signature: None,
        })
    }

    fn describe(&self) -> String {
        "local".to_string()
    }
}
