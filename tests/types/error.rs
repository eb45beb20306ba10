use outcome_rail::types::{ContractViolation, Error, ErrorType, Outcome};
use serde_json::json;

#[test]
fn unclassified_error_reads_as_system_error() {
    let err = Error::with_code("db down", "DB-1");

    assert_eq!(err.classification(), None);
    assert_eq!(err.error_type(), ErrorType::SystemError);
    assert_eq!(err.code(), "DB-1");
}

#[test]
fn with_error_type_overrides_previous_classification() {
    let err = Error::new("x")
        .with_error_type(ErrorType::NotFound)
        .with_error_type(ErrorType::BusinessError);

    assert_eq!(err.classification(), Some(ErrorType::BusinessError));
}

#[test]
fn try_with_error_type_rejects_unknown_names() {
    let result = Error::new("x").try_with_error_type("Fatal");
    assert_eq!(result, Err(ContractViolation::InvalidErrorType("Fatal".into())));

    let empty = Error::new("x").try_with_error_type("");
    assert!(matches!(empty, Err(ContractViolation::InvalidErrorType(_))));
}

#[test]
fn try_classified_treats_empty_name_as_unclassified() {
    let err = Error::try_classified("x", "C", "").unwrap();
    assert_eq!(err.classification(), None);

    let err = Error::try_classified("x", "C", "NotFound").unwrap();
    assert_eq!(err.error_type(), ErrorType::NotFound);

    assert!(Error::try_classified("x", "C", "notfound").is_err());
}

#[test]
fn sentinels_are_shared_and_unclassified() {
    assert!(core::ptr::eq(Error::not_found(), Error::not_found()));
    assert_eq!(Error::not_found().message(), "the expected value was not found");
    assert_eq!(Error::null_value().message(), "the expected value is null");
    assert_eq!(Error::not_found().classification(), None);
    assert_eq!(Error::none().message(), "");
    assert_eq!(Error::none().code(), "");
}

#[test]
fn reclassifying_a_sentinel_copy_leaves_the_sentinel_untouched() {
    let copy = Error::not_found().clone().with_error_type(ErrorType::NotFound);

    assert_eq!(copy.error_type(), ErrorType::NotFound);
    assert_eq!(Error::not_found().classification(), None);
}

#[test]
fn empty_message_error_is_a_valid_failure() {
    assert!(!Error::new("").is_none());
    assert!(!Error::with_code("", "").is_none());

    let outcome = Outcome::<()>::failure(Error::new(""));

    assert!(outcome.is_failure());
    assert!(!outcome.error().is_none());
    assert_eq!(outcome.error().message(), "");
}

#[test]
fn cloned_none_sentinel_is_still_none() {
    let copy = Error::none().clone();

    assert!(copy.is_none());
    assert_eq!(&copy, Error::none());
}

#[test]
fn metadata_rejects_empty_key_and_null_value() {
    assert_eq!(
        Error::new("x").with_metadata("", 1).unwrap_err(),
        ContractViolation::NullArgument("key")
    );
    assert_eq!(
        Error::new("x").with_metadata("k", serde_json::Value::Null).unwrap_err(),
        ContractViolation::NullArgument("value")
    );
}

#[test]
fn metadata_upserts_by_key() {
    let err = Error::new("x")
        .with_metadata("attempt", 1)
        .and_then(|err| err.with_metadata("attempt", 2))
        .unwrap();

    assert_eq!(err.metadata().len(), 1);
    assert_eq!(err.metadata_value("attempt"), Some(&json!(2)));
}

#[test]
fn metadata_map_stops_at_first_invalid_entry() {
    let ok = Error::new("x")
        .with_metadata_map([("order", json!(7)), ("region", json!("eu"))])
        .unwrap();
    assert_eq!(ok.metadata().len(), 2);

    let invalid = Error::new("x").with_metadata_map([("order", json!(7)), ("", json!(1))]);
    assert_eq!(invalid.unwrap_err(), ContractViolation::NullArgument("key"));
}

#[test]
fn metadata_queries() {
    let err = Error::new("x").with_metadata("retries", 3).unwrap();

    assert_eq!(err.has_metadata_key("retries"), Ok(true));
    assert_eq!(err.has_metadata_key("missing"), Ok(false));
    assert_eq!(err.has_metadata("retries", |v| v.as_u64() == Some(3)), Ok(true));
    assert_eq!(err.has_metadata("retries", |v| v.is_string()), Ok(false));
    assert_eq!(err.has_metadata("missing", |_| true), Ok(false));
    assert_eq!(err.has_metadata_key(""), Err(ContractViolation::NullArgument("key")));
    assert_eq!(err.has_metadata("", |_| true), Err(ContractViolation::NullArgument("key")));
}

#[test]
fn details_keep_insertion_order_and_duplicates() {
    let err = Error::new("x").with_details("a").with_details("b").with_details("a");
    assert_eq!(err.details(), ["a", "b", "a"]);
}

#[test]
fn timestamp_is_read_time() {
    let err = Error::new("x");
    let first = err.timestamp();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(err.timestamp() > first);
}

#[test]
fn contract_violation_messages_name_the_argument() {
    assert_eq!(
        ContractViolation::NullArgument("key").to_string(),
        "argument 'key' must not be null or empty"
    );
    assert!(ContractViolation::InvalidErrorType("Bad".into()).to_string().contains("'Bad'"));
}
