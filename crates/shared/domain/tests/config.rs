use moor_domain::config::{AppConfig, BackendConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let backend = BackendConfig::default();
    assert_eq!(backend.server_url, "http://localhost:1337/api");
    assert!(backend.application_id.is_empty());
    assert!(backend.client_key.is_empty());
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "backend": {
            "server_url": "https://records.example.com/api",
            "application_id": "app1",
            "client_key": "key1"
        }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.backend.server_url, "https://records.example.com/api");
    assert_eq!(cfg.backend.application_id, "app1");
    assert_eq!(cfg.backend.client_key, "key1");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.backend, BackendConfig::default());
}
