use moor_derive::moor_error;
use std::borrow::Cow;

#[moor_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn io_failure() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk on fire"))
}

#[test]
fn source_conversion_via_question_mark() {
    let result: Result<(), DemoError> = (|| {
        io_failure()?;
        Ok(())
    })();

    match result {
        Err(DemoError::Io { context, .. }) => assert!(context.is_none()),
        other => panic!("expected Io variant, got {other:?}"),
    }
}

#[test]
fn context_attaches_to_upstream_errors() {
    let result: Result<(), DemoError> = io_failure().context("Flushing cache");

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "IO error (Flushing cache): disk on fire");
}

#[test]
fn context_attaches_to_own_errors() {
    let result: Result<(), DemoError> =
        Err(DemoError::Internal { message: "bad state".into(), context: None })
            .context("Rebuilding index");

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Rebuilding index): bad state");
}

#[test]
fn internal_from_string_types() {
    let from_str: DemoError = "static".into();
    let from_string: DemoError = String::from("owned").into();

    assert_eq!(from_str.to_string(), "Internal error: static");
    assert_eq!(from_string.to_string(), "Internal error: owned");
}
