use std::collections::HashMap;

use anyhow::Context as _;
use vouch::{assert, check, Options, Reporter};
use vouch_tests::{divide, init_tracing, MathError, Person};

#[test]
fn checks() {
    init_tracing();

    vouch::test(|t| {
        check::is_true(t, true);
        check::is_false(t, false);
        check::equal(t, vec!["hello"], vec!["hello"]);
        check::not_equal(t, HashMap::from([("hello", 1)]), HashMap::from([("goodbye", 2)]));
        check::strict_equal(t, "hello", "hello");
        check::strict_not_equal(t, 5, 0);
        check::less_than(t, 1, 4);
        check::less_than_or_equal(t, 4, 4);
        check::greater_than(t, 8, 6);
        check::greater_than_or_equal(t, 6, 6);
        check::error(t, &divide(0, 1));
        check::no_error(t, &divide(1, 2));
        check::is_in(t, 4, &[2, 3, 4, 5]);
        check::not_in(t, "hello", &["goodbye", "world"]);

        let mut map: Option<HashMap<String, String>> = None;
        check::nil(t, &map);
        map = Some(HashMap::from([(String::from("hello"), String::from("world"))]));
        check::not_nil(t, &map);
    });
}

#[test]
fn asserts() {
    init_tracing();

    vouch::test(|t| {
        assert::is_true(t, true);
        assert::is_false(t, false);
        assert::equal(t, vec!["hello"], vec!["hello"]);
        assert::not_equal(t, HashMap::from([("hello", 1)]), HashMap::from([("goodbye", 2)]));
        assert::strict_equal(t, "hello", "hello");
        assert::strict_not_equal(t, 5, 0);
        assert::less_than(t, 1, 4);
        assert::less_than_or_equal(t, 4, 4);
        assert::greater_than(t, 8, 6);
        assert::greater_than_or_equal(t, 6, 6);
        assert::error(t, &divide(0, 1));
        assert::no_error(t, &divide(1, 2));
        assert::is_in(t, 4, &[2, 3, 4, 5]);
        assert::not_in(t, "hello", &["goodbye", "world"]);

        let mut map: Option<HashMap<String, String>> = None;
        assert::nil(t, &map);
        map = Some(HashMap::from([(String::from("hello"), String::from("world"))]));
        assert::not_nil(t, &map);
    });
}

#[test]
fn equality() {
    init_tracing();

    vouch::test(|t| {
        let peter = Person::new("peter", 29);
        let johan = Person::new("johan", 28);
        assert::not_equal(t, &peter, &johan);

        let older = Person::new("peter", 30);
        let options = Options::new().ignore("age");
        assert::equal_with(t, &peter, &older, &options);
        assert::not_equal_with(t, &peter, &johan, &options);
    });
}

#[test]
fn structuring_helpers() {
    init_tracing();

    vouch::test(|t| {
        // A series of checks followed by a checkpoint.
        check::equal(t, 2, 2);
        check::less_than_or_equal(t, 2, 3);
        check::greater_than(t, 3, 1);
        vouch::no_failures!(t);

        // The same thing, grouped.
        vouch::no_failures!(t, || {
            check::equal(t, 2, 2);
            check::less_than_or_equal(t, 2, 3);
            check::greater_than(t, 3, 1);
        });

        // Stop at the first failing call.
        assert_ok(t, divide(1, 2));
        assert_ok(t, divide(3, -1));
        assert_ok(t, divide(5, 99));
        let x = assert_ok(t, divide(10, 0));
        assert::equal(t, Some(0), x);

        // The same thing, with `?`.
        vouch::no_errors!(t, || {
            divide(1, 2)?;
            divide(3, -1)?;
            divide(5, 99)?;
            let x = divide(10, 0)?;
            assert::equal(t, 0, x);
            Ok(())
        });
    });
}

#[test]
fn errors_stop_later_thunks() {
    init_tracing();

    let report = vouch::run("errors", |t| {
        vouch::no_errors!(
            t,
            || {
                divide(1, 2)?;
                Ok(())
            },
            || {
                divide(0, 2)?;
                Ok(())
            },
            || {
                unreachable!("stopped by the previous error");
            },
        );
    });

    assert!(report.aborted());
    assert_eq!(report.failures().len(), 1);
    assert!(report.failures()[0]
        .message()
        .starts_with("expected no error, received a cannot be 0"));
}

#[test]
fn error_variants() {
    init_tracing();

    vouch::test(|t| {
        check::equal(t, divide(0, 1), Err(MathError::ZeroNumerator));
        check::equal(t, divide(1, 10), Err(MathError::DivisorOfTen));
        check::is_in(t, divide(1, 10), &[Err(MathError::DivisorOfTen), Ok(0)]);
    });
}

#[test]
fn byte_equality() {
    init_tracing();

    // A missing byte vector and an empty one differ by default, but can be made
    // equal with a comparer or by equating empty values.
    vouch::test(|t| {
        let b1: Option<Vec<u8>> = None;
        let b2: Option<Vec<u8>> = Some(Vec::new());
        check::not_equal(t, &b1, &b2);

        let bytes = Options::new().comparer(|a: &Option<Vec<u8>>, b: &Option<Vec<u8>>| {
            a.as_deref().unwrap_or_default() == b.as_deref().unwrap_or_default()
        });

        check::equal_with(t, b1.clone(), b2.clone(), &bytes);
        check::equal_with(t, &b1, &b2, &Options::new().equate_empty());
    });
}

#[test]
fn failures_are_reported_together() {
    init_tracing();

    let report = vouch::run("together", |t| {
        check::equal(t, Person::new("peter", 29), Person::new("peter", 30));
        check::is_in(t, 1, &[]);
        assert!(t.failed());
    });

    assert!(!report.passed());
    assert!(!report.aborted());
    assert_eq!(report.failures().len(), 2);

    let rendered = report.to_string();
    assert!(rendered.contains("-    age: 29,\n+    age: 30,\n"), "{rendered}");
    assert!(rendered.contains("expected slice to contain element\nelement: 1"), "{rendered}");
    assert!(rendered.contains(file!()), "{rendered}");
}

#[test]
fn thunks_propagate_context() {
    init_tracing();

    let report = vouch::run("context", |t| {
        check::error(t, &parse_age("200"));

        vouch::no_errors!(t, || {
            let age = parse_age("29")?;
            check::equal(t, age, 29);
            parse_age("old").context("parsing the second age")?;
            Ok(())
        });
    });

    assert!(report.aborted());
    assert_eq!(report.failures().len(), 1);

    let message = report.failures()[0].message();
    assert!(
        message.starts_with("expected no error, received parsing the second age"),
        "{message}"
    );
}

fn parse_age(input: &str) -> anyhow::Result<u32> {
    let age = input.parse::<u32>()?;

    if age > 150 {
        anyhow::bail!("{age} is not a plausible age");
    }

    Ok(age)
}

/// Unwrap a result through the assert layer.
#[track_caller]
fn assert_ok<R, T>(t: &R, result: Result<T, MathError>) -> Option<T>
where
    R: ?Sized + Reporter,
{
    t.helper();
    assert::no_error(t, &result);
    result.ok()
}
