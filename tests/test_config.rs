use std::path::PathBuf;

use clap::Parser;
use filedock::config::{Cli, Config, DEFAULT_LISTEN_ADDR, DEFAULT_STORAGE_DIR};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.storage.directory, PathBuf::from("./default_directory"));
    assert!(!cfg.storage.detect_content_type);
}

#[test]
fn test_config_from_empty_cli_uses_defaults() {
    let cfg = Config::from_cli(Cli::default()).unwrap();
    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.storage.directory, PathBuf::from(DEFAULT_STORAGE_DIR));
}

#[test]
fn test_config_directory_from_cli() {
    let cli = Cli {
        directory: Some(PathBuf::from("/tmp/served")),
        ..Cli::default()
    };
    let cfg = Config::from_cli(cli).unwrap();
    assert_eq!(cfg.storage.directory, PathBuf::from("/tmp/served"));
}

#[test]
fn test_cli_parses_directory_flag() {
    let cli = Cli::try_parse_from(["filedock", "--directory", "/data/files"]).unwrap();
    assert_eq!(cli.directory, Some(PathBuf::from("/data/files")));
}

#[test]
fn test_cli_listen_from_env() {
    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:5000");
    }
    let from_env = Cli::try_parse_from(["filedock"]).unwrap();
    let from_flag = Cli::try_parse_from(["filedock", "--listen", "127.0.0.1:6000"]).unwrap();
    unsafe {
        std::env::remove_var("LISTEN");
    }

    assert_eq!(from_env.listen.as_deref(), Some("127.0.0.1:5000"));
    assert_eq!(from_flag.listen.as_deref(), Some("127.0.0.1:6000"));
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml(
        "server:\n  listen_addr: 127.0.0.1:8080\nstorage:\n  directory: /srv/files\n  detect_content_type: true\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.storage.directory, PathBuf::from("/srv/files"));
    assert!(cfg.storage.detect_content_type);
}

#[test]
fn test_config_from_partial_yaml() {
    let cfg = Config::from_yaml("storage:\n  directory: /srv/files\n").unwrap();

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.storage.directory, PathBuf::from("/srv/files"));
}

#[test]
fn test_config_rejects_malformed_yaml() {
    assert!(Config::from_yaml("server: [not, a, map]").is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filedock.yaml");
    std::fs::write(
        &path,
        "server:\n  listen_addr: 127.0.0.1:7000\nstorage:\n  directory: /from/file\n",
    )
    .unwrap();

    let cli = Cli {
        directory: Some(PathBuf::from("/from/cli")),
        listen: None,
        config: Some(path),
    };
    let cfg = Config::from_cli(cli).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:7000");
    assert_eq!(cfg.storage.directory, PathBuf::from("/from/cli"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = Cli {
        config: Some(PathBuf::from("/definitely/not/here.yaml")),
        ..Cli::default()
    };
    assert!(Config::from_cli(cli).is_err());
}
