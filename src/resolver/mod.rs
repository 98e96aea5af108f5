//! Network-aware deployment parameter resolution.
//!
//! Resolution is total and side-effect free: every network id yields
//! parameters, unknown ids yield the local profile.

pub mod profile;
pub mod table;

pub use profile::{DeploymentParameters, DeploymentRequest, NetworkProfile};
pub use table::{LOCAL_PROFILE_ID, ProfileTable, REGISTRY_DISPLAY_NAME};

/// Resolves `network_id` against the built-in profile table.
pub fn resolve(network_id: &str) -> DeploymentParameters {
    ProfileTable::builtin().resolve(&DeploymentRequest::new(network_id))
}
