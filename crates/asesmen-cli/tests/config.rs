use asesmen_cli::config::{AppConfig, load_config, load_or_default, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("config.json")).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.bar_width, 30);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = AppConfig {
        bar_width: 12,
        log_filter: "debug".to_string(),
        ..AppConfig::default()
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = AppConfig {
        config_version: 0,
        ..AppConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap().config_version, 1);
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &AppConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "log_filter": "info", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.bar_width, 30);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 7, "bar_width": 10, "log_filter": "info", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(load_config(&path).is_err());
}
