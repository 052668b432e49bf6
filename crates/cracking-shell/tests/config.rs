use cracking_core::models::audience::Audience;
use cracking_shell::config::{
    CURRENT_VERSION, LogFormat, ShellConfig, load_config_from, save_config_to,
};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ShellConfig::default());
    assert_eq!(config.default_audience, Audience::Carer);
    assert_eq!(config.placeholder, "Not yet provided");
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ShellConfig {
        default_audience: Audience::Patient,
        log_format: LogFormat::Json,
        ..ShellConfig::default()
    };

    save_config_to(&path, &config).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn unversioned_config_is_read_as_the_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "default_audience": "patient", "placeholder": "Ask Mum" }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.default_audience, Audience::Patient);
    assert_eq!(config.placeholder, "Ask Mum");
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn unknown_shapes_are_not_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "audience": "patient" }"#).unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 9, "default_audience": "carer", "placeholder": "x" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&path, &ShellConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
