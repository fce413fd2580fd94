use std::cell::{Cell, RefCell};
use std::fmt;

use vouch::{assert, check, Config, Reporter, Suite};
use vouch_tests::{divide, init_tracing, Person};

/// Reporter collecting messages with a prefix, and unwinding on `fail_now`
/// through a plain panic.
#[derive(Default)]
struct Prefixed {
    failed: Cell<bool>,
    lines: RefCell<Vec<String>>,
}

impl Reporter for Prefixed {
    fn failed(&self) -> bool {
        self.failed.get()
    }

    fn fail(&self) {
        self.failed.set(true);
    }

    fn fail_now(&self) {
        self.fail();
        panic!("fail now");
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(format!("prefixed: {message}"));
        self.fail();
    }
}

#[test]
fn custom_reporter() {
    init_tracing();

    let t = Prefixed::default();
    assert!(!check::equal(&t, 1, 2));
    assert!(check::less_than(&t, 1, 2));

    let lines = t.lines.borrow();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("prefixed: expected want == got"));
}

#[test]
#[should_panic(expected = "fail now")]
fn custom_reporter_fail_now() {
    let t = Prefixed::default();
    assert::is_true(&t, false);
}

#[test]
fn trait_objects() {
    let t = Prefixed::default();
    let dynamic: &dyn Reporter = &t;

    check::is_in(dynamic, 3, &[1, 2]);
    check::nil(dynamic, Some(1));
    assert!(dynamic.failed());
    assert_eq!(t.lines.borrow().len(), 2);
}

#[test]
fn suite() {
    init_tracing();

    let mut out = Vec::new();

    let summary = Suite::new(Config::default().with_no_fail_fast(true))
        .case("divides", |t| {
            assert::equal(t, divide(10, 0), Ok(0));
        })
        .case("people", |t| {
            check::equal(t, Person::new("peter", 29), Person::new("peter", 29));
            check::not_equal(t, Person::new("peter", 29), Person::new("johan", 28));
        })
        .case("broken", |t| {
            assert::error(t, &divide(1, 2));
        })
        .run(&mut out)
        .unwrap();

    assert!(!summary.passed());
    assert_eq!(summary.executed, 3);
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.skipped, 0);

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("divides passed\npeople passed\nbroken aborted\n"), "{out}");
    assert!(out.contains("expected an error, received Ok(..)"), "{out}");
}
