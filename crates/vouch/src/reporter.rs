use core::fmt;

use std::rc::Rc;

/// The capability a test provides to record failures.
///
/// Every check and assert function in this crate takes a reporter as its first
/// argument. The crate only ever consumes reporters, the host decides what a
/// failure means. See [`Context`] for the one used by [`run`] and [`test`],
/// and [`MockReporter`] for a recording double.
///
/// All methods take `&self`. Implementations keep their state in cells so that
/// closures handed to [`assert::no_failures`] can borrow the same reporter
/// that is running them.
///
/// [`Context`]: crate::Context
/// [`run`]: crate::run
/// [`test`]: crate::test
/// [`MockReporter`]: crate::MockReporter
/// [`assert::no_failures`]: crate::assert::no_failures
pub trait Reporter {
    /// Test if a failure has been recorded.
    ///
    /// Once this returns `true` it must keep returning `true`.
    fn failed(&self) -> bool;

    /// Mark the reporter as failed and continue.
    fn fail(&self);

    /// Mark the reporter as failed and stop the current unit of execution.
    ///
    /// Hosts running real tests never return from this. Recording doubles
    /// may, which is why callers in this crate return right after calling it.
    fn fail_now(&self);

    /// Record a diagnostic message and mark the reporter as failed.
    fn error(&self, message: fmt::Arguments<'_>);

    /// Mark the calling frame as a helper.
    ///
    /// Attribution is handled with `#[track_caller]`, so this has no effect
    /// unless an implementation wants one.
    #[inline]
    fn helper(&self) {}
}

macro_rules! forward {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R> Reporter for $ty
            where
                R: ?Sized + Reporter,
            {
                #[inline]
                fn failed(&self) -> bool {
                    (**self).failed()
                }

                #[inline]
                #[track_caller]
                fn fail(&self) {
                    (**self).fail()
                }

                #[inline]
                #[track_caller]
                fn fail_now(&self) {
                    (**self).fail_now()
                }

                #[inline]
                #[track_caller]
                fn error(&self, message: fmt::Arguments<'_>) {
                    (**self).error(message)
                }

                #[inline]
                fn helper(&self) {
                    (**self).helper()
                }
            }
        )*
    };
}

forward!(&R, &mut R, Box<R>, Rc<R>);
