use std::fs;

use gpr_deploy::cli::{DeployArgs, HistoryArgs, InitArgs, ResolveArgs};
use gpr_deploy::commands;
use gpr_deploy::commands::history::select_records;
use gpr_deploy::config::AppPaths;
use gpr_deploy::context::AppContext;
use gpr_deploy::error::AppError;
use gpr_deploy::output::Output;

fn paths(dir: &tempfile::TempDir) -> AppPaths {
    AppPaths::with_roots(dir.path().join("config"), dir.path().join("data"))
        .expect("paths should be created")
}

fn context(dir: &tempfile::TempDir, network: &str) -> AppContext {
    AppContext::with_paths(network.to_string(), true, paths(dir)).expect("context should bootstrap")
}

fn deploy(ctx: &AppContext, contract: &str) {
    commands::deploy::run(
        ctx,
        DeployArgs {
            contract: Some(contract.to_string()),
            strict: false,
        },
    )
    .expect("deploy should work");
}

#[test]
fn deploy_appends_ledger_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "mainnet");

    for _ in 0..2 {
        commands::deploy::run(
            &ctx,
            DeployArgs {
                contract: None,
                strict: true,
            },
        )
        .expect("deploy should work");
    }

    let records = ctx
        .ledger
        .load("mainnet", "GPR_NodeFactory")
        .expect("ledger should load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].endpoint_url, "http://realhost:3000");
    assert_eq!(records[0].signer, "local");
    assert_eq!(records[0].handle.id, records[1].handle.id);
}

#[test]
fn strict_mode_rejects_unknown_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "development");

    let err = commands::resolve::run(&ctx, ResolveArgs { strict: true })
        .expect_err("strict resolve should fail");
    match err {
        AppError::InvalidInput(message) => {
            assert!(message.contains("development"));
            assert!(message.contains("mainnet, sepolia"));
        }
        other => panic!("expected invalid input, got {other:?}"),
    }

    commands::resolve::run(&ctx, ResolveArgs { strict: false })
        .expect("lenient resolve should fall back");
}

#[test]
fn non_strict_deploy_records_under_requested_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "development");

    commands::deploy::run(
        &ctx,
        DeployArgs {
            contract: Some("GPR_NodeFactory".to_string()),
            strict: false,
        },
    )
    .expect("deploy should fall back to local");

    let latest = ctx
        .ledger
        .latest("development", "GPR_NodeFactory")
        .expect("ledger should load")
        .expect("record should exist");
    assert_eq!(latest.endpoint_url, "http://localhost:3000");
}

#[test]
fn init_writes_settings_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = paths(&dir);
    let output = Output::new(true);

    commands::init::run(&paths, output, InitArgs { force: false }).expect("init should work");
    let written = fs::read_to_string(paths.settings_file()).expect("settings written");
    assert!(written.contains("\"solc\""));
    assert!(written.contains("http://realhost:3000"));

    let err = commands::init::run(&paths, output, InitArgs { force: false })
        .expect_err("second init should fail");
    assert!(matches!(err, AppError::InvalidInput(_)));

    commands::init::run(&paths, output, InitArgs { force: true })
        .expect("forced init should work");
}

#[test]
fn forced_init_replaces_invalid_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = paths(&dir);
    fs::write(
        paths.settings_file(),
        r#"{"compilers": {"solc": {"version": ""}}}"#,
    )
    .expect("settings written");
    assert!(AppContext::with_paths("mainnet".to_string(), true, paths.clone()).is_err());

    commands::init::run(&paths, Output::new(true), InitArgs { force: true })
        .expect("forced init should ignore the broken file");

    let ctx = AppContext::with_paths("mainnet".to_string(), true, paths)
        .expect("rewritten settings should load");
    assert_eq!(ctx.settings.solc_version(), "0.8.20");
}

#[test]
fn history_latest_selects_most_recent_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "mainnet");

    deploy(&ctx, "GPR_NodeFactory");
    deploy(&ctx, "GPR_NodeFactory");
    let mut records = ctx
        .ledger
        .load("mainnet", "GPR_NodeFactory")
        .expect("ledger should load");
    records[1].comment = Some("second".to_string());
    fs::write(
        ctx.ledger.path("mainnet", "GPR_NodeFactory"),
        serde_json::to_string_pretty(&records).expect("serialize"),
    )
    .expect("ledger rewritten");

    let all = select_records(&ctx.ledger, "mainnet", "GPR_NodeFactory", false).expect("select");
    assert_eq!(all.len(), 2);

    let latest =
        select_records(&ctx.ledger, "mainnet", "GPR_NodeFactory", true).expect("select");
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].comment.as_deref(), Some("second"));

    commands::history::run(
        &ctx,
        HistoryArgs {
            contract: None,
            latest: true,
        },
    )
    .expect("history should work");
}

#[test]
fn history_on_empty_ledger_selects_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "sepolia");

    for latest in [false, true] {
        let records =
            select_records(&ctx.ledger, "sepolia", "GPR_NodeFactory", latest).expect("select");
        assert!(records.is_empty());
        commands::history::run(
            &ctx,
            HistoryArgs {
                contract: None,
                latest,
            },
        )
        .expect("history should work on an empty ledger");
    }
}

#[test]
fn traversal_contract_name_stays_inside_deployments_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(&dir, "mainnet");

    deploy(&ctx, "../../../escaped");

    let path = ctx.ledger.path("mainnet", "../../../escaped");
    assert!(path.exists());
    assert!(path.starts_with(dir.path().join("data").join("deployments").join("mainnet")));
    assert!(!dir.path().join("escaped.json").exists());
    assert_eq!(
        ctx.ledger
            .load("mainnet", "../../../escaped")
            .expect("ledger should load")
            .len(),
        1
    );
}

#[test]
fn similar_network_ids_do_not_share_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slashed = context(&dir, "a/b");
    deploy(&slashed, "GPR_NodeFactory");

    let underscored = context(&dir, "a_b");
    let records = select_records(&underscored.ledger, "a_b", "GPR_NodeFactory", false)
        .expect("select");
    assert!(records.is_empty());
}

#[test]
fn settings_file_overrides_profiles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("settings.json"),
        r#"{
            "profiles": [
                {"network_id": "mainnet", "endpoint_url": "https://registry.example", "display_name": "Global Property Registry"}
            ],
            "compilers": {"solc": {"version": "0.8.24"}}
        }"#,
    )
    .expect("settings written");

    let ctx = context(&dir, "mainnet");
    assert_eq!(ctx.settings.solc_version(), "0.8.24");
    assert_eq!(
        ctx.profiles.profile_for("mainnet").endpoint_url,
        "https://registry.example"
    );
    assert!(!ctx.profiles.is_known("sepolia"));
}

#[test]
fn invalid_settings_fail_bootstrap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("settings.json"),
        r#"{"compilers": {"solc": {"version": ""}}}"#,
    )
    .expect("settings written");

    let paths = AppPaths::with_roots(config_dir, dir.path().join("data")).expect("paths");
    let err = AppContext::with_paths("mainnet".to_string(), false, paths)
        .expect_err("bootstrap should fail");
    assert!(matches!(err, AppError::Config(_)));
}
