use outcome_rail::types::{ContractViolation, Error, ErrorType, Outcome};

#[test]
fn success_reports_none_sentinel() {
    let outcome = Outcome::success();

    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
    assert!(core::ptr::eq(outcome.error(), Error::none()));
    assert!(outcome.errors().is_empty());
}

#[test]
fn failure_exposes_error_and_hides_value() {
    let outcome: Outcome<u32> = Outcome::failure(Error::new("boom"));

    assert!(outcome.is_failure());
    assert_eq!(outcome.error().message(), "boom");
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.value_or_default(), 0);
}

#[test]
fn create_maps_absent_value_to_null_value() {
    let present = Outcome::create(Some("sku-1"));
    assert_eq!(present.value(), Some(&"sku-1"));

    let absent = Outcome::<&str>::create(None);
    assert!(absent.is_failure());
    assert_eq!(absent.error(), Error::null_value());
}

#[test]
fn failure_classified_builds_error_inline() {
    let outcome = Outcome::<()>::failure_classified("gone", "ORDER-404", ErrorType::NotFound);

    assert_eq!(outcome.error().code(), "ORDER-404");
    assert_eq!(outcome.error().error_type(), ErrorType::NotFound);
}

#[test]
fn try_failure_with_validates_name() {
    let outcome = Outcome::<()>::try_failure_with("bad", "B1", "BusinessError").unwrap();
    assert_eq!(outcome.error().error_type(), ErrorType::BusinessError);

    assert_eq!(
        Outcome::<()>::try_failure_with("bad", "B1", "Business").unwrap_err(),
        ContractViolation::InvalidErrorType("Business".into())
    );
}

#[test]
#[should_panic(expected = "must carry an error")]
fn failures_reject_empty_list() {
    let _ = Outcome::<()>::failures(Vec::new());
}

#[test]
#[should_panic(expected = "must carry an error")]
fn failures_reject_none_sentinel_anywhere() {
    let _ = Outcome::<()>::failures([Error::new("a"), Error::none().clone()]);
}

#[test]
fn multi_error_lookup() {
    let outcome = Outcome::<()>::failures([
        Error::with_code("name missing", "V1").with_error_type(ErrorType::BusinessError),
        Error::with_code("db down", "S1"),
        Error::with_code("email missing", "V2").with_error_type(ErrorType::BusinessError),
    ]);

    assert_eq!(outcome.error().code(), "V1");
    assert_eq!(outcome.errors().len(), 3);
    assert!(outcome.has_error(|e| e.code() == "S1"));
    assert!(!outcome.has_error(|e| e.code() == "X"));

    let business: Vec<&str> = outcome
        .errors_matching(|e| e.error_type() == ErrorType::BusinessError)
        .map(|e| e.code())
        .collect();
    assert_eq!(business, ["V1", "V2"]);
}

#[test]
fn error_list_converts_into_failure() {
    fn validate(name: &str, email: &str) -> Outcome<()> {
        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(Error::with_code("name missing", "V1"));
        }
        if email.is_empty() {
            errors.push(Error::with_code("email missing", "V2"));
        }
        if !errors.is_empty() {
            return errors.into();
        }
        Outcome::success()
    }

    let failed = validate("", "");
    let codes: Vec<&str> = failed.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["V1", "V2"]);
    assert!(validate("ada", "ada@example.com").is_success());
}

#[test]
#[should_panic(expected = "must carry an error")]
fn empty_error_list_conversion_is_rejected() {
    let _: Outcome<()> = Vec::<Error>::new().into();
}

#[test]
fn from_conversions() {
    let failed: Outcome<i32> = Error::new("x").into();
    assert!(failed.is_failure());

    let ok: Outcome<i32> = Ok::<_, Error>(3).into();
    assert_eq!(ok.into_result().unwrap(), 3);

    let err: Result<i32, Error> = Outcome::<i32>::failure(Error::new("y")).into_result();
    assert_eq!(err.unwrap_err().message(), "y");
}

#[test]
fn map_and_then_short_circuit_on_failure() {
    let doubled = Outcome::success_with(21).map(|v| v * 2);
    assert_eq!(doubled.value(), Some(&42));

    let mut called = false;
    let failed = Outcome::<i32>::failure(Error::new("first")).and_then(|v| {
        called = true;
        Outcome::success_with(v + 1)
    });
    assert!(!called);
    assert_eq!(failed.error().message(), "first");

    let chained =
        Outcome::success_with(1).and_then(|_| Outcome::<u8>::failure(Error::new("second")));
    assert_eq!(chained.error().message(), "second");
}

#[test]
fn map_errors_rewrites_every_error() {
    let outcome = Outcome::<()>::failures([Error::new("a"), Error::new("b")])
        .map_errors(|e| e.with_error_type(ErrorType::BusinessError));

    assert!(outcome.errors().iter().all(|e| e.error_type() == ErrorType::BusinessError));
    assert!(Outcome::success().map_errors(|e| e).is_success());
}

#[test]
fn recover_replaces_failure_only() {
    let recovered =
        Outcome::<u8>::failure(Error::not_found().clone()).recover(|_| Outcome::success_with(0));
    assert_eq!(recovered.value(), Some(&0));

    let untouched = Outcome::success_with(5u8).recover(|_| Outcome::success_with(0));
    assert_eq!(untouched.value(), Some(&5));
}

#[test]
fn inspect_failure_sees_primary_error() {
    let mut seen = String::new();
    let _ = Outcome::<()>::failure(Error::new("logged")).inspect_failure(|e| {
        seen = e.message().to_owned();
    });
    assert_eq!(seen, "logged");
}
