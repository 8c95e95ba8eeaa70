//! Configuration resolution priority: CLI > environment > TOML > default
//!
//! Tests that touch FYYUR_* environment variables are marked #[serial] so
//! they never observe each other's settings.

use fyyur_common::config::{
    ConfigOverrides, ServiceConfig, DEFAULT_HOST, DEFAULT_PORT, ENV_CONFIG, ENV_DATABASE,
    ENV_HOST, ENV_PORT,
};
use fyyur_common::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    for var in [ENV_DATABASE, ENV_HOST, ENV_PORT, ENV_CONFIG] {
        env::remove_var(var);
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_toml_values_used_when_no_overrides() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        r#"
        database_path = "/srv/fyyur/fyyur.db"
        host = "0.0.0.0"
        port = 8080

        [logging]
        level = "debug"
        "#,
    );

    let config = ServiceConfig::resolve(ConfigOverrides {
        config_file: Some(config_path),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.database_path, PathBuf::from("/srv/fyyur/fyyur.db"));
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "port = 8080\ndatabase_path = \"/srv/fyyur/fyyur.db\"\n");

    env::set_var(ENV_PORT, "9000");
    env::set_var(ENV_DATABASE, "/tmp/from-env.db");

    let config = ServiceConfig::resolve(ConfigOverrides {
        config_file: Some(config_path),
        ..Default::default()
    });
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.database_path, PathBuf::from("/tmp/from-env.db"));
    assert_eq!(config.host, DEFAULT_HOST);
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(ENV_PORT, "9000");
    env::set_var(ENV_HOST, "10.0.0.1");

    let config = ServiceConfig::resolve(ConfigOverrides {
        database: Some(PathBuf::from("/tmp/cli.db")),
        port: Some(7000),
        ..Default::default()
    });
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.port, 7000);
    assert_eq!(config.host, "10.0.0.1");
    assert_eq!(config.database_path, PathBuf::from("/tmp/cli.db"));
}

#[test]
#[serial]
fn test_config_file_from_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "host = \"192.168.1.10\"\n");
    env::set_var(ENV_CONFIG, &config_path);

    let config = ServiceConfig::resolve(ConfigOverrides {
        database: Some(PathBuf::from("/tmp/cli.db")),
        ..Default::default()
    });
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.host, "192.168.1.10");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "not-a-port");

    let result = ServiceConfig::resolve(ConfigOverrides {
        database: Some(PathBuf::from("/tmp/cli.db")),
        ..Default::default()
    });
    clear_env();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_error() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let result = ServiceConfig::resolve(ConfigOverrides {
        config_file: Some(dir.path().join("absent.toml")),
        ..Default::default()
    });

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_malformed_config_file_is_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "port = \"five thousand\"\n");

    let result = ServiceConfig::resolve(ConfigOverrides {
        config_file: Some(config_path),
        ..Default::default()
    });

    assert!(matches!(result, Err(Error::Config(_))));
}
