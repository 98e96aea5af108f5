use gpr_deploy::resolver::{
    DeploymentParameters, DeploymentRequest, NetworkProfile, ProfileTable, resolve,
};

fn registry(endpoint: &str) -> DeploymentParameters {
    DeploymentParameters {
        display_name: "Global Property Registry".to_string(),
        endpoint_url: endpoint.to_string(),
    }
}

#[test]
fn resolves_mainnet() {
    assert_eq!(resolve("mainnet"), registry("http://realhost:3000"));
}

#[test]
fn resolves_sepolia() {
    assert_eq!(resolve("sepolia"), registry("http://testhost:3000"));
}

#[test]
fn unknown_network_falls_back_to_local() {
    assert_eq!(resolve("unknown-net"), registry("http://localhost:3000"));
}

#[test]
fn empty_network_is_unknown() {
    assert_eq!(resolve(""), registry("http://localhost:3000"));
}

#[test]
fn every_table_entry_resolves_to_its_own_profile() {
    let table = ProfileTable::builtin();
    for profile in table.entries() {
        assert_eq!(
            table.resolve(&DeploymentRequest::new(profile.network_id.as_str())),
            profile.parameters()
        );
    }
}

#[test]
fn resolution_is_idempotent() {
    for id in ["mainnet", "sepolia", "loc_development", ""] {
        assert_eq!(resolve(id), resolve(id));
    }
}

#[test]
fn custom_table_uses_its_own_default() {
    let table = ProfileTable::new(
        vec![NetworkProfile::new(
            "staging",
            "https://staging.example:3000",
            "Staging Registry",
        )],
        NetworkProfile::new("local", "http://127.0.0.1:4000", "Dev Registry"),
    );

    assert_eq!(
        table.resolve(&DeploymentRequest::new("mainnet")),
        DeploymentParameters {
            display_name: "Dev Registry".to_string(),
            endpoint_url: "http://127.0.0.1:4000".to_string(),
        }
    );
}
