use parlay_rs::config::Config;
use parlay_rs::constants::Network;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_from_path_with_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[parlay]
network = "devnet"
rpc_url = "http://localhost:8899"
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_path(&config_path).unwrap();
    assert_eq!(config.parlay.network, Network::Devnet);
    assert_eq!(config.rpc_url(), "http://localhost:8899");
}

#[test]
fn test_config_from_path_without_rpc_url() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "[parlay]\nnetwork = \"mainnet\"\n").unwrap();

    let config = Config::from_path(&config_path).unwrap();
    assert_eq!(config.parlay.network, Network::Mainnet);
    assert_eq!(config.rpc_url(), "https://api.mainnet-beta.solana.com");
}

#[test]
fn test_config_with_missing_file() {
    let dir = tempdir().unwrap();
    assert!(Config::from_path(dir.path().join("config.toml")).is_err());
}

#[test]
fn test_config_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[parlay\nnetwork = \"mainnet\"").unwrap();
    assert!(Config::from_path(&config_path).is_err());
}

#[test]
fn test_config_with_unknown_network() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[parlay]\nnetwork = \"testnet\"\n").unwrap();
    assert!(Config::from_path(&config_path).is_err());
}
