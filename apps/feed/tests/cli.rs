use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn starts_with_a_valid_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("feed.toml"),
        r#"
[backend]
server_url = "https://records.example.com/api"
application_id = "app1"
client_key = "key1"
"#,
    )?;

    Command::cargo_bin("moor-feed")?.current_dir(dir.path()).assert().success();

    Ok(())
}

#[test]
fn fails_loudly_without_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin("moor-feed")?
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));

    Ok(())
}

#[test]
fn rejects_blank_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("feed.toml"),
        r#"
[backend]
server_url = "https://records.example.com/api"
application_id = ""
client_key = "key1"
"#,
    )?;

    Command::cargo_bin("moor-feed")?
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid client configuration"));

    Ok(())
}
