use moor_domain::config::AppConfig;
use moor_kernel::config::{ConfigError, load_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_backend_section_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("feed.toml");
    fs::write(
        &path,
        r#"
[backend]
server_url = "https://records.example.com/api"
application_id = "app1"
client_key = "key1"
"#,
    )?;

    let cfg: AppConfig = load_config(Some(dir.path().join("feed")))?;
    assert_eq!(cfg.backend.server_url, "https://records.example.com/api");
    assert_eq!(cfg.backend.application_id, "app1");
    assert_eq!(cfg.backend.client_key, "key1");

    Ok(())
}

#[test]
fn partial_file_keeps_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("feed.toml"),
        r#"
[backend]
application_id = "app1"
"#,
    )?;

    let cfg: AppConfig = load_config(Some(dir.path().join("feed")))?;
    assert_eq!(cfg.backend.application_id, "app1");
    assert_eq!(cfg.backend.server_url, "http://localhost:1337/api");

    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result: Result<AppConfig, ConfigError> = load_config(Some(dir.path().join("nope")));
    assert!(result.is_err(), "a missing required config file must fail loudly");
}
