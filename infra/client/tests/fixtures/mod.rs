use moor_client::prelude::*;
use moor_domain::record::SystemFields;

#[record_model(class = "Post")]
#[derive(Clone)]
pub struct Post {
    #[serde(flatten)]
    pub system: SystemFields,
    pub caption: String,
    pub image_url: String,
}

#[record_model(class = "Comment")]
#[derive(Clone)]
pub struct Comment {
    #[serde(flatten)]
    pub system: SystemFields,
    pub post_id: String,
    pub body: String,
}

/// A second type that claims `Post`'s logical name, for conflict tests.
#[record_model(class = "Post")]
pub struct LegacyPost {
    pub caption: String,
}

/// A builder pre-filled with valid credentials.
pub fn valid_builder() -> ClientBuilder {
    Client::builder()
        .server_url("https://records.example.com/api")
        .application_id("app1")
        .client_key("key1")
}
