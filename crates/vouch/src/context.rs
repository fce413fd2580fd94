use core::cell::{Cell, RefCell};
use core::fmt;

use std::panic::{self, Location};

use crate::Reporter;

/// Unwinding payload used by [`Context::fail_now`].
///
/// Raised through [`panic::resume_unwind`], so the panic hook never sees it.
#[derive(Debug)]
pub(crate) struct Abort;

/// A single recorded failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
    location: Option<&'static Location<'static>>,
}

impl Failure {
    pub(crate) fn new(message: String, location: Option<&'static Location<'static>>) -> Self {
        Self { message, location }
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the test the failure was reported, if known.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location {
            write!(f, "{location}: ")?;
        }

        self.message.fmt(f)
    }
}

/// The reporting context for a single unit of execution.
///
/// A context is created by [`run`] for every unit and dropped when the unit
/// completes. Checks record failures on it and keep going, asserts call
/// [`Reporter::fail_now`] which unwinds out of the unit.
///
/// ```
/// use vouch::{check, Reporter};
///
/// let report = vouch::run("example", |t| {
///     check::equal(t, 1, 2);
///     assert!(t.failed());
/// });
///
/// assert!(!report.passed());
/// assert_eq!(report.failures().len(), 1);
/// ```
///
/// [`run`]: crate::run
pub struct Context {
    name: String,
    failed: Cell<bool>,
    failures: RefCell<Vec<Failure>>,
}

impl Context {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: Cell::new(false),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// The name of the unit this context belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A copy of the failures recorded so far.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    pub(crate) fn record(&self, failure: Failure) {
        self.failed.set(true);
        self.failures.borrow_mut().push(failure);
    }

    pub(crate) fn into_failures(self) -> Vec<Failure> {
        self.failures.into_inner()
    }
}

impl Reporter for Context {
    #[inline]
    fn failed(&self) -> bool {
        self.failed.get()
    }

    #[inline]
    fn fail(&self) {
        self.failed.set(true);
    }

    #[track_caller]
    fn fail_now(&self) {
        self.failed.set(true);

        tracing::trace!(
            name = self.name.as_str(),
            location = %Location::caller(),
            "aborting unit"
        );

        panic::resume_unwind(Box::new(Abort));
    }

    #[track_caller]
    fn error(&self, message: fmt::Arguments<'_>) {
        let location = Location::caller();
        let message = message.to_string();

        tracing::debug!(
            name = self.name.as_str(),
            location = %location,
            "{message}"
        );

        self.record(Failure::new(message, Some(location)));
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("name", &self.name)
            .field("failed", &self.failed.get())
            .field("failures", &self.failures.borrow().len())
            .finish()
    }
}
