use freeipa_rs::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_with_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[freeipa]
host = "ipa.example.test"
username = "admin"
password = "Secret123"
verify_tls = false
api_version = "2.251"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.freeipa.host, "ipa.example.test");
    assert_eq!(config.freeipa.username, "admin");
    assert_eq!(config.freeipa.password, "Secret123");
    assert!(!config.freeipa.verify_tls);
    assert_eq!(config.freeipa.api_version.as_deref(), Some("2.251"));
}

#[test]
fn test_config_defaults() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[freeipa]
host = "ipa.example.test"
username = "admin"
password = "Secret123"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert!(config.freeipa.verify_tls);
    assert!(config.freeipa.api_version.is_none());
}

#[test]
fn test_config_with_missing_file() {
    let dir = tempdir().unwrap();
    let result = Config::from_file(dir.path().join("config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_config_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let invalid_content = r#"
[freeipa
host = "ipa.example.test"
"#;

    fs::write(&config_path, invalid_content).unwrap();

    let result = Config::from_file(&config_path);
    assert!(result.is_err());
}

#[test]
fn test_config_with_missing_fields() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let incomplete_content = r#"
[freeipa]
host = "ipa.example.test"
"#;

    fs::write(&config_path, incomplete_content).unwrap();

    let result = Config::from_file(&config_path);
    assert!(result.is_err());
}
