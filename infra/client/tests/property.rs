use moor_client::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_credentials_always_build(
        app_id in "[A-Za-z0-9]{1,32}",
        key in "[A-Za-z0-9]{1,32}",
        host in "[a-z]{1,12}",
    ) {
        let url = format!("https://{host}.example.com/api");
        let client = Client::builder()
            .server_url(url.as_str())
            .application_id(app_id.as_str())
            .client_key(key.as_str())
            .build()
            .unwrap();

        prop_assert_eq!(client.server_url(), url.as_str());
        prop_assert_eq!(client.application_id(), app_id.as_str());
        prop_assert_eq!(client.client_key(), key.as_str());
    }

    #[test]
    fn blank_application_ids_never_build(blank in "[ \t]{0,8}") {
        let err = Client::builder()
            .server_url("https://records.example.com/api")
            .application_id(blank)
            .client_key("key1")
            .build()
            .unwrap_err();

        prop_assert!(
            matches!(err, ClientError::Configuration { .. }),
            "expected Configuration error"
        );
    }

    #[test]
    fn urls_without_a_scheme_never_build(path in "[a-z0-9./-]{1,40}") {
        let err = Client::builder()
            .server_url(path)
            .application_id("app1")
            .client_key("key1")
            .build()
            .unwrap_err();

        prop_assert!(
            matches!(err, ClientError::Configuration { .. }),
            "expected Configuration error"
        );
    }
}
