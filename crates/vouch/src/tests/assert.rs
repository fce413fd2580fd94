use std::cell::Cell;

use serde::Serialize;

use super::mock;
use super::prelude::*;

#[derive(Debug, Serialize)]
struct Point {
    x: f64,
    y: f64,
}

#[test]
fn passing_asserts_do_nothing() {
    let t = mock(|t| {
        assert::is_true(t, true);
        assert::is_false(t, false);
        assert::equal(t, vec!["hello"], vec!["hello"]);
        assert::not_equal(t, 1, 2);
        assert::strict_equal(t, "hello", "hello");
        assert::strict_not_equal(t, 5, 0);
        assert::less_than(t, 1, 4);
        assert::less_than_or_equal(t, 4, 4);
        assert::greater_than(t, 8, 6);
        assert::greater_than_or_equal(t, 6, 6);
        assert::error(t, &Err::<(), _>("oh no"));
        assert::no_error(t, &Ok::<_, String>(()));
        assert::is_in(t, 4, &[2, 3, 4, 5]);
        assert::not_in(t, "hello", &["goodbye", "world"]);
        assert::nil(t, None::<Vec<u8>>);
        assert::not_nil(t, Some(vec![1u8]));
        assert::that(t, true, format_args!("unused"));
    });

    assert!(!t.failed());
    assert!(!t.failed_now());
}

#[test]
fn failing_asserts_fail_now() {
    macro_rules! fails_now {
        ($($call:expr),* $(,)?) => {
            $(
                let t = mock(|t| {
                    $call(t);
                });

                assert!(t.failed(), "{}", stringify!($call));
                assert!(t.failed_now(), "{}", stringify!($call));
                assert_eq!(t.messages().len(), 1, "{}", stringify!($call));
            )*
        };
    }

    fails_now! {
        |t: &MockReporter| assert::is_true(t, false),
        |t: &MockReporter| assert::is_false(t, true),
        |t: &MockReporter| assert::equal(t, 1, 2),
        |t: &MockReporter| assert::not_equal(t, 1, 1),
        |t: &MockReporter| assert::strict_equal(t, 1, 2),
        |t: &MockReporter| assert::strict_not_equal(t, 1, 1),
        |t: &MockReporter| assert::less_than(t, 2, 1),
        |t: &MockReporter| assert::less_than_or_equal(t, 2, 1),
        |t: &MockReporter| assert::greater_than(t, 1, 2),
        |t: &MockReporter| assert::greater_than_or_equal(t, 1, 2),
        |t: &MockReporter| assert::error(t, &Ok::<_, ()>(())),
        |t: &MockReporter| assert::no_error(t, &Err::<(), _>("oh no")),
        |t: &MockReporter| assert::is_in(t, 1, &[]),
        |t: &MockReporter| assert::not_in(t, 1, &[1]),
        |t: &MockReporter| assert::nil(t, Some(1)),
        |t: &MockReporter| assert::not_nil(t, None::<u8>),
        |t: &MockReporter| assert::that(t, false, format_args!("nope")),
        |t: &MockReporter| assert::equal_with(t, 1, 2, &Options::new()),
        |t: &MockReporter| assert::not_equal_with(t, 1, 1, &Options::new()),
        |t: &MockReporter| assert::is_in_with(t, 1, &[2], &Options::new()),
        |t: &MockReporter| assert::not_in_with(t, 1, &[1], &Options::new()),
    }
}

#[test]
fn check_result_decides_abort() {
    let inputs = [(1, 1), (1, 2), (3, 2)];

    for (a, b) in inputs {
        let checked = mock(|t| {
            check::less_than(t, a, b);
        });

        let asserted = mock(|t| {
            assert::less_than(t, a, b);
        });

        assert_eq!(checked.failed(), asserted.failed_now(), "{a} < {b}");
        assert!(!checked.failed_now());
    }
}

#[test]
fn assert_stops_the_unit() {
    let reached = Cell::new(false);

    let report = run("stops", |t| {
        assert::equal(t, 1, 2);
        reached.set(true);
    });

    assert!(!reached.get());
    assert!(!report.passed());
    assert!(report.aborted());
    assert!(!report.panicked());
    assert_eq!(report.failures().len(), 1);
}

#[test]
fn assert_with_options() {
    let options = Options::new().approximate(0.01);

    let report = run("approximate", |t| {
        assert::equal_with(t, Point { x: 1.0, y: 2.0 }, Point { x: 1.001, y: 1.999 }, &options);
        assert::is_in_with(t, Point { x: 0.0, y: 0.0 }, &[Point { x: 0.005, y: 0.0 }], &options);
    });

    assert!(report.passed(), "{report}");
}
