use geodex_kernel::config::{ConfigError, load_config, load_config_with_env};
use geodex_kernel::domain::Collation;
use geodex_kernel::domain::config::{DEFAULT_CDN_BASE_URL, GeodexConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_settings_from_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("geodex.toml");
    fs::write(
        &path,
        r#"
[query]
collation = "ordinal"

[logging]
level = "debug"
"#,
    )?;

    let cfg: GeodexConfig = load_config(Some(&path))?;
    assert_eq!(cfg.query.collation, Collation::Ordinal);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.flags.cdn_base_url, DEFAULT_CDN_BASE_URL);
    Ok(())
}

#[test]
fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("geodex.toml");
    fs::write(&path, "[flags]\ncdn_base_url = \"https://file.example\"\n")?;

    let cfg: GeodexConfig = load_config_with_env(
        Some(&path),
        [
            ("GEODEX__FLAGS__CDN_BASE_URL".to_owned(), "https://env.example".to_owned()),
            ("GEODEX__QUERY__COLLATION".to_owned(), "ordinal".to_owned()),
        ],
    )?;

    assert_eq!(cfg.flags.cdn_base_url, "https://env.example");
    assert_eq!(cfg.query.collation, Collation::Ordinal);
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let err = load_config::<GeodexConfig>(Some(&path)).expect_err("missing file must fail");
    let ConfigError::Config { context, .. } = err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
}

#[test]
fn invalid_values_fail_to_deserialize() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("geodex.toml");
    fs::write(&path, "[query]\ncollation = \"klingon\"\n")?;

    let err = load_config::<GeodexConfig>(Some(&path)).expect_err("unknown collation must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
