use pwsh_login::config::{Config, ConfigError, LoginSettings, DEFAULT_GUARD_VAR};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.login.guard_var, DEFAULT_GUARD_VAR);
    assert_eq!(config.login.guard_var, "__PWSH_LOGIN_CHECKED");
    assert!(config.login.shell.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_shell_per_platform() {
    let settings = LoginSettings::default();
    if cfg!(target_os = "macos") {
        assert_eq!(settings.shell_path(), Path::new("/bin/zsh"));
    } else {
        assert_eq!(settings.shell_path(), Path::new("/bin/sh"));
    }
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"[login]
guard_var = "MY_GUARD"
shell = "/bin/bash"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.login.guard_var, "MY_GUARD");
    assert_eq!(config.login.shell_path(), Path::new("/bin/bash"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let (_dir, path) = write_config("[login]\nshell = \"/usr/bin/fish\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.login.guard_var, DEFAULT_GUARD_VAR);
    assert_eq!(config.login.shell, Some(PathBuf::from("/usr/bin/fish")));
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[login\nguard_var = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_validation_rejects_empty_guard() {
    let (_dir, path) = write_config("[login]\nguard_var = \"\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_validation_rejects_guard_with_equals() {
    let mut config = Config::default();
    config.login.guard_var = "A=B".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_relative_shell() {
    let mut config = Config::default();
    config.login.shell = Some(PathBuf::from("bin/sh"));

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must be an absolute path"));
}

#[test]
fn test_config_path_ends_with_expected() {
    if std::env::var_os(pwsh_login::config::CONFIG_PATH_ENV).is_some() {
        return;
    }
    let path = Config::config_path();
    assert!(path.ends_with("pwsh-login/config.toml"));
}
