use core::cell::{Cell, RefCell};
use core::fmt;

use crate::Reporter;

/// A reporter which records what happens to it without ever aborting.
///
/// Use it to test helpers built on this crate: unlike [`Context`],
/// [`Reporter::fail_now`] returns, so both the failure and the request to
/// abort can be observed afterwards.
///
/// ```
/// use vouch::{assert, MockReporter};
///
/// let mock = MockReporter::new();
/// assert::equal(&mock, 1, 2);
///
/// assert!(mock.failed_now());
/// assert_eq!(mock.messages().len(), 1);
/// ```
///
/// [`Context`]: crate::Context
#[derive(Debug, Default)]
pub struct MockReporter {
    failed: Cell<bool>,
    failed_now: Cell<bool>,
    messages: RefCell<Vec<String>>,
}

impl MockReporter {
    /// Construct a new reporter which has not failed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Test if [`Reporter::fail_now`] has been called.
    pub fn failed_now(&self) -> bool {
        self.failed_now.get()
    }

    /// The messages recorded through [`Reporter::error`].
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Reporter for MockReporter {
    #[inline]
    fn failed(&self) -> bool {
        self.failed.get()
    }

    #[inline]
    fn fail(&self) {
        self.failed.set(true);
    }

    #[inline]
    fn fail_now(&self) {
        self.fail();
        self.failed_now.set(true);
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push(message.to_string());
        self.fail();
    }
}
