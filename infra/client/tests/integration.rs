//! The ambient transition is process-global, so the whole lifecycle is
//! exercised by a single test in its own binary.

pub mod fixtures;

use fixtures::{Post, valid_builder};
use moor_client::prelude::*;

#[test]
fn ambient_client_lifecycle() {
    assert_eq!(moor_client::state(), ClientState::Uninitialized);
    assert!(matches!(moor_client::global(), Err(ClientError::NotInitialized { .. })));
    assert!(moor_client::try_global().is_none());

    // A rejected install must not consume the one-time transition.
    let err = Client::builder().register::<Post>().install().expect_err("missing credentials");
    assert!(matches!(err, ClientError::Configuration { .. }));
    assert_eq!(moor_client::state(), ClientState::Uninitialized);

    let client = valid_builder().register::<Post>().install().expect("install should succeed");
    assert_eq!(moor_client::state(), ClientState::Ready);

    let ambient = moor_client::global().expect("ambient client");
    assert_eq!(ambient.server_url(), client.server_url());
    assert_eq!(ambient.application_id(), "app1");
    assert_eq!(ambient.client_key(), "key1");
    assert!(ambient.descriptor("Post").is_some_and(|d| d.is::<Post>()));

    let err = valid_builder().install().expect_err("second install must fail");
    assert!(matches!(err, ClientError::AlreadyInitialized { .. }));

    // The rejected call left the ambient configuration unchanged.
    let ambient = moor_client::global().expect("ambient client");
    assert_eq!(ambient.instance_id(), client.instance_id());
    assert!(ambient.descriptor("Post").is_some());
}
