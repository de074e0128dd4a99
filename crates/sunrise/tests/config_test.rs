//! Tests for layered configuration loading.

use std::io::Write;
use sunrise::{ConfigErrorKind, RefreshTtl, SunriseConfig, SunriseErrorKind};

#[test]
fn test_file_overrides_bundled_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[action_store]
default_ttl_ms = 60000
refresh_ttl = "entry"

[pagination]
placeholder = "Loading..."

[logging]
json_logs = true
"#
    )
    .unwrap();

    let config = SunriseConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.action_store().default_ttl_ms(), 60_000);
    assert_eq!(*config.action_store().capacity(), 10_000);
    assert_eq!(*config.action_store().refresh_ttl(), RefreshTtl::Entry);
    assert_eq!(config.pagination().placeholder(), "Loading...");
    assert_eq!(config.pagination().jump_prefix(), "pagination_jump");
    assert!(*config.logging().json_logs());
    assert_eq!(config.logging().log_level(), "info");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SunriseConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(
        err.kind(),
        SunriseErrorKind::Config(e) if matches!(e.kind, ConfigErrorKind::Read(_))
    ));
}

#[test]
fn test_invalid_values_are_config_errors() {
    let err = SunriseConfig::from_toml_str("[action_store]\ndefault_ttl_ms = \"soon\"\n").unwrap_err();
    assert!(matches!(err.kind(), SunriseErrorKind::Config(_)));

    let err = SunriseConfig::from_toml_str("[action_store]\ncapacity = 0\n").unwrap_err();
    assert!(matches!(
        err.kind(),
        SunriseErrorKind::Config(e)
            if matches!(e.kind, ConfigErrorKind::InvalidValue { key: "action_store.capacity", .. })
    ));
}

#[test]
fn test_default_matches_bundled_file() {
    assert_eq!(SunriseConfig::from_toml_str("").unwrap(), SunriseConfig::default());
}
