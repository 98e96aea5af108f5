use super::profile::{DeploymentParameters, DeploymentRequest, NetworkProfile};

pub const REGISTRY_DISPLAY_NAME: &str = "Global Property Registry";
pub const LOCAL_PROFILE_ID: &str = "local";

/// Ordered network profiles with an explicit fallback.
///
/// Lookup is an exact match against `entries` in order; the first hit wins and
/// anything else, including the empty string, resolves to `default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    entries: Vec<NetworkProfile>,
    default: NetworkProfile,
}

impl ProfileTable {
    pub fn new(entries: Vec<NetworkProfile>, default: NetworkProfile) -> Self {
        Self { entries, default }
    }

    pub fn builtin() -> Self {
        Self::new(
            vec![
                NetworkProfile::new("mainnet", "http://realhost:3000", REGISTRY_DISPLAY_NAME),
                NetworkProfile::new("sepolia", "http://testhost:3000", REGISTRY_DISPLAY_NAME),
            ],
            NetworkProfile::new(
                LOCAL_PROFILE_ID,
                "http://localhost:3000",
                REGISTRY_DISPLAY_NAME,
            ),
        )
    }

    pub fn entries(&self) -> &[NetworkProfile] {
        &self.entries
    }

    pub fn default_profile(&self) -> &NetworkProfile {
        &self.default
    }

    pub fn profile_for(&self, network_id: &str) -> &NetworkProfile {
        self.lookup(network_id).unwrap_or(&self.default)
    }

    pub fn is_known(&self, network_id: &str) -> bool {
        self.lookup(network_id).is_some()
    }

    pub fn resolve(&self, request: &DeploymentRequest) -> DeploymentParameters {
        self.profile_for(&request.network_id).parameters()
    }

    fn lookup(&self, network_id: &str) -> Option<&NetworkProfile> {
        self.entries
            .iter()
            .find(|profile| profile.network_id == network_id)
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}
