use std::fs;

use pretty_assertions::assert_eq;

use crate::configs::*;
use crate::{AppConfig, ConfigError, ExitCode, CONFIG_FILE_NAME};
use ckb_unique_types::core::{Capacity, DepType, FeeRate, ScriptHashType};

fn mkdir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("app_config_test")
        .tempdir()
        .unwrap()
}

#[test]
fn test_defaults_without_config_file() {
    let dir = mkdir();
    let config = AppConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logger().filter, "info");
    assert_eq!(config.builder().network, NetworkType::Testnet);
    assert_eq!(config.builder().fee_rate(), FeeRate::from_u64(1_100));
    assert_eq!(config.builder().max_fee(), Capacity::shannons(20_000_000));
    assert_eq!(
        config.builder().min_cell_capacity(),
        Capacity::shannons(6_100_000_000)
    );
}

#[test]
fn test_load_partial_file() {
    let dir = mkdir();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[logger]\nfilter = \"debug\"\n\n[builder]\nnetwork = \"mainnet\"\nfee_rate = 1000\n",
    )
    .unwrap();

    let config = AppConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.logger().filter, "debug");
    assert_eq!(config.builder().network, NetworkType::Mainnet);
    assert_eq!(config.builder().fee_rate, 1_000);
    assert_eq!(config.builder().max_fee, 20_000_000);
    assert_eq!(config.network_profile(), NetworkProfile::mainnet());
}

#[test]
fn test_reject_unknown_keys() {
    let err = AppConfig::load_from_slice(b"[builder]\nfee = 1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
    assert_eq!(ExitCode::from(err), ExitCode::Config);

    let err = AppConfig::load_from_slice(b"[builder]\nnetwork = \"devnet\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn test_missing_file() {
    let dir = mkdir();
    let err = AppConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    assert_eq!(ExitCode::from(err), ExitCode::IO);
}

#[test]
fn test_roundtrip_through_toml() {
    let config = AppConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(AppConfig::load_from_slice(text.as_bytes()).unwrap(), config);
}

#[test]
fn test_network_profiles() {
    let testnet = NetworkProfile::testnet();
    let deps = testnet.cell_deps();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0].dep_type, DepType::DepGroup);
    assert_eq!(deps[1].dep_type, DepType::Code);
    assert_eq!(&deps[1], testnet.unique_dep());
    assert_eq!(
        testnet.unique_type_template().hash_type,
        ScriptHashType::Type
    );
    assert!(testnet.unique_type_template().args.is_empty());

    let mainnet = NetworkProfile::from_network(NetworkType::Mainnet);
    assert_eq!(mainnet, NetworkProfile::mainnet());
    assert_eq!(
        mainnet.unique_type_template().hash_type,
        ScriptHashType::Data1
    );
    assert_ne!(mainnet.secp256k1_dep(), testnet.secp256k1_dep());

    let lock = testnet.secp256k1_lock(vec![0x11; 20]);
    assert_eq!(lock, mainnet.secp256k1_lock(vec![0x11; 20]));
    assert_eq!(lock.code_hash, SECP256K1_BLAKE160_SIGHASH_ALL_TYPE_HASH);
}
