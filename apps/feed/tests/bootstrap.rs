//! The ambient install is process-global, so the whole bootstrap flow is
//! exercised by a single test.

use moor::prelude::*;
use moor_feed::{Post, bootstrap};
use serde_json::json;

fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.backend = BackendConfig {
        server_url: "https://example.invalid/api".to_owned(),
        application_id: "app1".to_owned(),
        client_key: "key1".to_owned(),
    };
    cfg
}

#[test]
fn bootstrap_installs_the_ambient_client() {
    assert_eq!(moor::client::state(), ClientState::Uninitialized);

    let client = bootstrap(&test_config()).expect("bootstrap should succeed");
    assert_eq!(moor::client::state(), ClientState::Ready);
    assert_eq!(client.server_url(), "https://example.invalid/api");

    let ambient = moor::client::global().expect("ambient client");
    assert!(ambient.descriptor("Post").is_some_and(|d| d.is::<Post>()));

    let post: Post = ambient
        .decode(json!({
            "objectId": "8fKq2nWvXz",
            "author": "ada",
            "caption": "first light",
            "imageUrl": "https://cdn.example.com/1.jpg"
        }))
        .expect("decode");
    assert_eq!(post.author, "ada");
    assert!(post.system.is_persisted());

    // Startup glue must not run twice.
    let err = bootstrap(&test_config()).expect_err("second bootstrap must fail");
    assert!(matches!(err, ClientError::AlreadyInitialized { .. }));
}
