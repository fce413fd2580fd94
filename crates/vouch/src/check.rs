//! Non-fatal checks.
//!
//! Every function in this module evaluates a condition and returns whether it
//! held. If it did not, a diagnostic is recorded through [`Reporter::error`]
//! and the test keeps running, so call sites can branch on the result:
//!
//! ```
//! use vouch::check;
//!
//! vouch::test(|t| {
//!     let values = vec![2, 3, 4, 5];
//!
//!     if check::is_in(t, 4, &values) {
//!         check::less_than(t, values[0], values[3]);
//!     }
//! });
//! ```
//!
//! See the [`assert`] module for the fatal counterparts.
//!
//! [`assert`]: crate::assert

use core::any;
use core::fmt;

use serde::Serialize;

use crate::compare::Comparison;
use crate::diff;
use crate::{CompareError, Nilable, Options, Reporter};

/// Passes if `x` is `true`.
#[track_caller]
pub fn is_true<R>(t: &R, x: bool) -> bool
where
    R: ?Sized + Reporter,
{
    t.helper();

    if x {
        return true;
    }

    t.error(format_args!("expected true"));
    false
}

/// Passes if `x` is `false`.
#[track_caller]
pub fn is_false<R>(t: &R, x: bool) -> bool
where
    R: ?Sized + Reporter,
{
    t.helper();

    if !x {
        return true;
    }

    t.error(format_args!("expected false"));
    false
}

/// Passes if `x` is `true`, reporting `message` otherwise.
///
/// This is what the [`check!`] macro expands to.
///
/// [`check!`]: crate::check!
#[track_caller]
pub fn that<R>(t: &R, x: bool, message: fmt::Arguments<'_>) -> bool
where
    R: ?Sized + Reporter,
{
    t.helper();

    if x {
        return true;
    }

    t.error(message);
    false
}

/// Passes if `want == got`.
///
/// Equality is [`PartialEq`], which for derived implementations is a
/// recursive comparison of contents, and which honors hand-written
/// implementations. On failure the diagnostic contains a line diff of the
/// pretty-printed [`Debug`] renderings of both values.
///
/// [`Debug`]: fmt::Debug
#[track_caller]
pub fn equal<R, T>(t: &R, want: T, got: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if want == got {
        return true;
    }

    let diff = diff::unified(&format!("{want:#?}\n"), &format!("{got:#?}\n"));

    if diff.is_empty() {
        t.error(format_args!(
            "expected want == got\nwant: {want:?}\n got: {got:?}"
        ));
    } else {
        t.error(format_args!("expected want == got\n--- want\n+++ got\n{diff}"));
    }

    false
}

/// Passes if `want == got` under the given comparison [`Options`].
///
/// Values which cannot be serialized are never considered equal, the failure
/// to serialize is reported instead.
#[track_caller]
pub fn equal_with<R, T>(t: &R, want: T, got: T, options: &Options<'_, T>) -> bool
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    match options.compare(&want, &got) {
        Ok(Comparison::Equal) => true,
        Ok(Comparison::Different {
            want: rendered_want,
            got: rendered_got,
        }) => {
            let diff = diff::unified(&format!("{rendered_want}\n"), &format!("{rendered_got}\n"));

            if diff.is_empty() {
                t.error(format_args!(
                    "expected want == got\nwant: {want:?}\n got: {got:?}"
                ));
            } else {
                t.error(format_args!("expected want == got\n--- want\n+++ got\n{diff}"));
            }

            false
        }
        Err(error) => {
            t.error(format_args!("cannot compare values: {error}"));
            false
        }
    }
}

/// Passes if `want != got`.
///
/// This is the negation of [`equal`].
#[track_caller]
pub fn not_equal<R, T>(t: &R, want: T, got: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if want != got {
        return true;
    }

    t.error(format_args!(
        "expected want != got\nwant: {want:?}\n got: {got:?}"
    ));
    false
}

/// Passes if `want != got` under the given comparison [`Options`].
///
/// This is the negation of [`equal_with`], except that values which cannot be
/// serialized fail both.
#[track_caller]
pub fn not_equal_with<R, T>(t: &R, want: T, got: T, options: &Options<'_, T>) -> bool
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    match options.is_equal(&want, &got) {
        Ok(false) => true,
        Ok(true) => {
            t.error(format_args!(
                "expected want != got\nwant: {want:?}\n got: {got:?}"
            ));
            false
        }
        Err(error) => {
            t.error(format_args!("cannot compare values: {error}"));
            false
        }
    }
}

/// Passes if `want == got`, restricted to types with total equality.
///
/// Types which only implement [`PartialEq`] are rejected when compiling:
///
/// ```compile_fail
/// vouch::test(|t| {
///     vouch::check::strict_equal(t, 0.5f64, 0.5f64);
/// });
/// ```
#[track_caller]
pub fn strict_equal<R, T>(t: &R, want: T, got: T) -> bool
where
    R: ?Sized + Reporter,
    T: Eq + fmt::Debug,
{
    t.helper();

    if want == got {
        return true;
    }

    t.error(format_args!(
        "expected want == got (strict)\nwant: {want:?}\n got: {got:?}"
    ));
    false
}

/// Passes if `want != got`, restricted to types with total equality.
#[track_caller]
pub fn strict_not_equal<R, T>(t: &R, want: T, got: T) -> bool
where
    R: ?Sized + Reporter,
    T: Eq + fmt::Debug,
{
    t.helper();

    if want != got {
        return true;
    }

    t.error(format_args!(
        "expected want != got (strict)\nwant: {want:?}\n got: {got:?}"
    ));
    false
}

/// Passes if `small < big`.
#[track_caller]
pub fn less_than<R, T>(t: &R, small: T, big: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if small < big {
        return true;
    }

    let note = incomparable(&small, &big);
    t.error(format_args!("expected {small:?} < {big:?}{note}"));
    false
}

/// Passes if `small <= big`.
#[track_caller]
pub fn less_than_or_equal<R, T>(t: &R, small: T, big: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if small <= big {
        return true;
    }

    let note = incomparable(&small, &big);
    t.error(format_args!("expected {small:?} <= {big:?}{note}"));
    false
}

/// Passes if `big > small`.
#[track_caller]
pub fn greater_than<R, T>(t: &R, big: T, small: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if big > small {
        return true;
    }

    let note = incomparable(&big, &small);
    t.error(format_args!("expected {big:?} > {small:?}{note}"));
    false
}

/// Passes if `big >= small`.
#[track_caller]
pub fn greater_than_or_equal<R, T>(t: &R, big: T, small: T) -> bool
where
    R: ?Sized + Reporter,
    T: PartialOrd + fmt::Debug,
{
    t.helper();

    if big >= small {
        return true;
    }

    let note = incomparable(&big, &small);
    t.error(format_args!("expected {big:?} >= {small:?}{note}"));
    false
}

/// Passes if `result` is an error.
#[track_caller]
pub fn error<R, T, E>(t: &R, result: &Result<T, E>) -> bool
where
    R: ?Sized + Reporter,
{
    t.helper();

    if result.is_err() {
        return true;
    }

    t.error(format_args!("expected an error, received Ok(..)"));
    false
}

/// Passes if `result` is not an error.
#[track_caller]
pub fn no_error<R, T, E>(t: &R, result: &Result<T, E>) -> bool
where
    R: ?Sized + Reporter,
    E: fmt::Debug,
{
    t.helper();

    match result {
        Ok(..) => true,
        Err(error) => {
            t.error(format_args!("expected no error, received {error:?}"));
            false
        }
    }
}

/// Passes if `element` is equal to one of the elements in `slice`.
///
/// Uses the same equality as [`equal`]. An empty slice never contains
/// anything.
#[track_caller]
pub fn is_in<R, T>(t: &R, element: T, slice: &[T]) -> bool
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    if slice.iter().any(|value| element == *value) {
        return true;
    }

    t.error(format_args!(
        "expected slice to contain element\nelement: {element:?}"
    ));
    false
}

/// Passes if `element` is equal to one of the elements in `slice` under the
/// given comparison [`Options`].
#[track_caller]
pub fn is_in_with<R, T>(t: &R, element: T, slice: &[T], options: &Options<'_, T>) -> bool
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    match find_with(&element, slice, options) {
        Ok(Some(..)) => true,
        Ok(None) => {
            t.error(format_args!(
                "expected slice to contain element\nelement: {element:?}"
            ));
            false
        }
        Err(error) => {
            t.error(format_args!("cannot compare values: {error}"));
            false
        }
    }
}

/// Passes if `element` is not equal to any of the elements in `slice`.
///
/// An empty slice passes trivially.
#[track_caller]
pub fn not_in<R, T>(t: &R, element: T, slice: &[T]) -> bool
where
    R: ?Sized + Reporter,
    T: PartialEq + fmt::Debug,
{
    t.helper();

    let Some(found) = slice.iter().find(|value| element == **value) else {
        return true;
    };

    t.error(format_args!(
        "expected slice to not contain element\nelement: {element:?}\n  found: {found:?}"
    ));
    false
}

/// Passes if `element` is not equal to any of the elements in `slice` under
/// the given comparison [`Options`].
#[track_caller]
pub fn not_in_with<R, T>(t: &R, element: T, slice: &[T], options: &Options<'_, T>) -> bool
where
    R: ?Sized + Reporter,
    T: Serialize + fmt::Debug,
{
    t.helper();

    match find_with(&element, slice, options) {
        Ok(None) => true,
        Ok(Some(found)) => {
            t.error(format_args!(
                "expected slice to not contain element\nelement: {element:?}\n  found: {found:?}"
            ));
            false
        }
        Err(error) => {
            t.error(format_args!("cannot compare values: {error}"));
            false
        }
    }
}

/// Passes if `value` is nil.
///
/// Only types implementing [`Nilable`] are accepted. A `None` is nil however
/// deeply it is wrapped in references or smart pointers.
///
/// ```
/// use std::collections::HashMap;
/// use vouch::check;
///
/// vouch::test(|t| {
///     let map: Option<HashMap<String, String>> = None;
///     check::nil(t, &map);
///     check::not_nil(t, 42);
/// });
/// ```
#[track_caller]
pub fn nil<R, N>(t: &R, value: N) -> bool
where
    R: ?Sized + Reporter,
    N: Nilable,
{
    t.helper();

    if value.is_nil() {
        return true;
    }

    let ty = any::type_name::<N>();
    t.error(format_args!("expected nil, received a non-nil `{ty}`"));
    false
}

/// Passes if `value` is not nil.
#[track_caller]
pub fn not_nil<R, N>(t: &R, value: N) -> bool
where
    R: ?Sized + Reporter,
    N: Nilable,
{
    t.helper();

    if !value.is_nil() {
        return true;
    }

    let ty = any::type_name::<N>();
    t.error(format_args!("expected a non-nil value, received a nil `{ty}`"));
    false
}

fn find_with<'a, T>(
    element: &T,
    slice: &'a [T],
    options: &Options<'_, T>,
) -> Result<Option<&'a T>, CompareError>
where
    T: Serialize,
{
    for value in slice {
        if options.is_equal(element, value)? {
            return Ok(Some(value));
        }
    }

    Ok(None)
}

fn incomparable<T>(a: &T, b: &T) -> &'static str
where
    T: PartialOrd,
{
    if a.partial_cmp(b).is_none() {
        " (values are not comparable)"
    } else {
        ""
    }
}
