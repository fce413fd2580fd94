//! Fatal assertions.
//!
//! Each function here wraps the [`check`] function of the same name. If the
//! check fails, [`Reporter::fail_now`] is called, which stops the current unit
//! of execution. Nothing after a failing assertion runs, so these functions
//! return nothing.
//!
//! The module also holds the runners [`no_failures`] and [`no_errors`], which
//! stop a unit as soon as anything has marked it as failed.

use core::fmt;

use serde::Serialize;

use crate::check;
use crate::{Nilable, Options, Reporter};

/// A boxed step accepted by [`no_failures`].
pub type Step<'a> = Box<dyn FnOnce() + 'a>;

/// A boxed thunk accepted by [`no_errors`].
pub type Thunk<'a> = Box<dyn FnOnce() -> anyhow::Result<()> + 'a>;

/// Box a closure into a [`Step`], so that differently typed closures can be
/// passed together.
pub fn step<'a, F>(f: F) -> Step<'a>
where
    F: 'a + FnOnce(),
{
    Box::new(f)
}

/// Box a closure into a [`Thunk`], so that differently typed closures can be
/// passed together.
pub fn thunk<'a, F>(f: F) -> Thunk<'a>
where
    F: 'a + FnOnce() -> anyhow::Result<()>,
{
    Box::new(f)
}

/// Asserts that `x` is `true`.
#[track_caller]
pub fn is_true<R>(t: &R, x: bool)
where
    R: ?Sized + Reporter,
{
    t.helper();

    if !check::is_true(t, x) {
        t.fail_now();
    }
}

/// Asserts that `x` is `false`.
#[track_caller]
pub fn is_false<R>(t: &R, x: bool)
where
    R: ?Sized + Reporter,
{
    t.helper();

    if !check::is_false(t, x) {
        t.fail_now();
    }
}

/// Asserts that `x` is `true`, reporting `message` otherwise.
///
/// This is what the [`require!`] macro expands to.
///
/// [`require!`]: crate::require!
#[track_caller]
pub fn that<R>(t: &R, x: bool, message: fmt::Arguments<'_>)
where
    R: ?Sized + Reporter,
{
    t.helper();

    if !check::that(t, x, message) {
        t.fail_now();
    }
}

/// Asserts that `want == got`.
///
/// See [`check::equal`].
#[track_caller]
pub fn equal<R, T>(t: &R, want: T, got: T)
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if !check::equal(t, want, got) {
        t.fail_now();
    }
}

/// Asserts that `want == got` under the given comparison [`Options`].
#[track_caller]
pub fn equal_with<R, T>(t: &R, want: T, got: T, options: &Options<'_, T>)
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    if !check::equal_with(t, want, got, options) {
        t.fail_now();
    }
}

/// Asserts that `want != got`.
#[track_caller]
pub fn not_equal<R, T>(t: &R, want: T, got: T)
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if !check::not_equal(t, want, got) {
        t.fail_now();
    }
}

/// Asserts that `want != got` under the given comparison [`Options`].
#[track_caller]
pub fn not_equal_with<R, T>(t: &R, want: T, got: T, options: &Options<'_, T>)
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    if !check::not_equal_with(t, want, got, options) {
        t.fail_now();
    }
}

/// Asserts that `want == got` for a type with total equality.
#[track_caller]
pub fn strict_equal<R, T>(t: &R, want: T, got: T)
where
    R: ?Sized + Reporter,
    T: Eq + fmt::Debug,
{
    t.helper();

    if !check::strict_equal(t, want, got) {
        t.fail_now();
    }
}

/// Asserts that `want != got` for a type with total equality.
#[track_caller]
pub fn strict_not_equal<R, T>(t: &R, want: T, got: T)
where
    R: ?Sized + Reporter,
    T: Eq + fmt::Debug,
{
    t.helper();

    if !check::strict_not_equal(t, want, got) {
        t.fail_now();
    }
}

/// Asserts that `small < big`.
#[track_caller]
pub fn less_than<R, T>(t: &R, small: T, big: T)
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if !check::less_than(t, small, big) {
        t.fail_now();
    }
}

/// Asserts that `small <= big`.
#[track_caller]
pub fn less_than_or_equal<R, T>(t: &R, small: T, big: T)
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if !check::less_than_or_equal(t, small, big) {
        t.fail_now();
    }
}

/// Asserts that `big > small`.
#[track_caller]
pub fn greater_than<R, T>(t: &R, big: T, small: T)
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if !check::greater_than(t, big, small) {
        t.fail_now();
    }
}

/// Asserts that `big >= small`.
#[track_caller]
pub fn greater_than_or_equal<R, T>(t: &R, big: T, small: T)
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if !check::greater_than_or_equal(t, big, small) {
        t.fail_now();
    }
}

/// Asserts that `result` is an error.
#[track_caller]
pub fn error<R, T, E>(t: &R, result: &Result<T, E>)
where
    R: ?Sized + Reporter,
{
    t.helper();

    if !check::error(t, result) {
        t.fail_now();
    }
}

/// Asserts that `result` is not an error.
#[track_caller]
pub fn no_error<R, T, E>(t: &R, result: &Result<T, E>)
where
    R: ?Sized + Reporter,
    E: fmt::Debug,
{
    t.helper();

    if !check::no_error(t, result) {
        t.fail_now();
    }
}

/// Asserts that `element` is in `slice`.
#[track_caller]
pub fn is_in<R, T>(t: &R, element: T, slice: &[T])
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if !check::is_in(t, element, slice) {
        t.fail_now();
    }
}

/// Asserts that `element` is in `slice` under the given comparison
/// [`Options`].
#[track_caller]
pub fn is_in_with<R, T>(t: &R, element: T, slice: &[T], options: &Options<'_, T>)
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    if !check::is_in_with(t, element, slice, options) {
        t.fail_now();
    }
}

/// Asserts that `element` is not in `slice`.
#[track_caller]
pub fn not_in<R, T>(t: &R, element: T, slice: &[T])
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if !check::not_in(t, element, slice) {
        t.fail_now();
    }
}

/// Asserts that `element` is not in `slice` under the given comparison
/// [`Options`].
#[track_caller]
pub fn not_in_with<R, T>(t: &R, element: T, slice: &[T], options: &Options<'_, T>)
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    if !check::not_in_with(t, element, slice, options) {
        t.fail_now();
    }
}

/// Asserts that `value` is nil.
#[track_caller]
pub fn nil<R, N>(t: &R, value: N)
where
    R: ?Sized + Reporter,
    N: Nilable,
{
    t.helper();

    if !check::nil(t, value) {
        t.fail_now();
    }
}

/// Asserts that `value` is not nil.
#[track_caller]
pub fn not_nil<R, N>(t: &R, value: N)
where
    R: ?Sized + Reporter,
    N: Nilable,
{
    t.helper();

    if !check::not_nil(t, value) {
        t.fail_now();
    }
}

/// Stop the unit if anything has marked it as failed, then run each step in
/// order, stopping after the first one which causes a failure.
///
/// Failures are detected through [`Reporter::failed`], so a failure recorded
/// by anything, not only by this crate, stops the unit. With no steps this
/// only checks for earlier failures, which makes it a checkpoint after a
/// series of checks:
///
/// ```
/// use vouch::{assert, check};
///
/// vouch::test(|t| {
///     check::equal(t, 2, 2);
///     check::less_than_or_equal(t, 2, 3);
///     assert::no_failures(t, None::<fn()>);
///
///     assert::no_failures(t, [
///         assert::step(|| {
///             check::greater_than(t, 3, 1);
///         }),
///         assert::step(|| {
///             check::is_in(t, 4, &[2, 3, 4, 5]);
///         }),
///     ]);
/// });
/// ```
#[track_caller]
pub fn no_failures<R, I>(t: &R, steps: I)
where
    R: ?Sized + Reporter,
    I: IntoIterator,
    I::Item: FnOnce(),
{
    t.helper();

    if fail_now_if_failed(t) {
        return;
    }

    for (index, step) in steps.into_iter().enumerate() {
        step();

        if fail_now_if_failed(t) {
            tracing::trace!(index, "step failed");
            return;
        }
    }
}

/// Stop the unit if anything has marked it as failed, then run each thunk in
/// order, stopping after the first one which returns an error or otherwise
/// causes a failure.
///
/// An error returned by a thunk is reported as through [`check::no_error`].
/// A thunk which did nothing and a thunk which succeeded are treated the
/// same.
///
/// ```
/// use vouch::{assert, check};
///
/// fn parse(input: &str) -> anyhow::Result<u32> {
///     Ok(input.parse()?)
/// }
///
/// vouch::test(|t| {
///     assert::no_errors(t, [
///         assert::thunk(|| {
///             let value = parse("42")?;
///             check::equal(t, value, 42);
///             Ok(())
///         }),
///         assert::thunk(|| Ok(())),
///     ]);
/// });
/// ```
#[track_caller]
pub fn no_errors<R, I, E>(t: &R, thunks: I)
where
    R: ?Sized + Reporter,
    I: IntoIterator,
    I::Item: FnOnce() -> Result<(), E>,
    E: fmt::Debug,
{
    t.helper();

    if fail_now_if_failed(t) {
        return;
    }

    for (index, thunk) in thunks.into_iter().enumerate() {
        check::no_error(t, &thunk());

        if fail_now_if_failed(t) {
            tracing::trace!(index, "thunk failed");
            return;
        }
    }
}

/// Synonym for [`no_errors`].
#[doc(inline)]
pub use self::no_errors as enforce;

/// Calls [`Reporter::fail_now`] if the reporter has failed.
///
/// Returns `true` if it did, which is only observable with reporters whose
/// `fail_now` returns.
#[track_caller]
fn fail_now_if_failed<R>(t: &R) -> bool
where
    R: ?Sized + Reporter,
{
    if t.failed() {
        t.fail_now();
        return true;
    }

    false
}
