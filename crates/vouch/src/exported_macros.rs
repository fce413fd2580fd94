/// Check a condition, reporting the condition itself or a formatted message
/// if it does not hold.
///
/// Evaluates to `true` if the condition held. See [`check::that`].
///
/// ```
/// vouch::test(|t| {
///     let values = [1, 2, 3];
///     vouch::check!(t, values.len() == 3);
///     vouch::check!(t, values[0] < values[1], "values are not sorted: {values:?}");
/// });
/// ```
///
/// [`check::that`]: crate::check::that
#[macro_export]
macro_rules! check {
    ($t:expr, $cond:expr $(,)?) => {
        $crate::check::that(
            $t,
            $cond,
            ::core::format_args!("check failed: {}", ::core::stringify!($cond)),
        )
    };

    ($t:expr, $cond:expr, $($arg:tt)+) => {
        $crate::check::that($t, $cond, ::core::format_args!($($arg)+))
    };
}

/// Assert a condition, reporting the condition itself or a formatted message
/// and stopping the unit if it does not hold.
///
/// See [`assert::that`].
///
/// ```
/// let report = vouch::run("require", |t| {
///     vouch::require!(t, 1 + 1 == 3, "arithmetic is broken");
///     unreachable!();
/// });
///
/// assert!(report.aborted());
/// assert_eq!(report.failures()[0].message(), "arithmetic is broken");
/// ```
///
/// [`assert::that`]: crate::assert::that
#[macro_export]
macro_rules! require {
    ($t:expr, $cond:expr $(,)?) => {
        $crate::assert::that(
            $t,
            $cond,
            ::core::format_args!("assertion failed: {}", ::core::stringify!($cond)),
        )
    };

    ($t:expr, $cond:expr, $($arg:tt)+) => {
        $crate::assert::that($t, $cond, ::core::format_args!($($arg)+))
    };
}

/// Run closures through [`assert::no_failures`].
///
/// With only a reporter this checks that nothing has failed so far.
///
/// ```
/// use vouch::check;
///
/// vouch::test(|t| {
///     check::equal(t, 2, 2);
///     vouch::no_failures!(t);
///
///     vouch::no_failures!(t, || {
///         check::less_than(t, 1, 2);
///     }, || {
///         check::is_true(t, true);
///     });
/// });
/// ```
///
/// [`assert::no_failures`]: crate::assert::no_failures
#[macro_export]
macro_rules! no_failures {
    ($t:expr $(, $step:expr)* $(,)?) => {{
        let steps: ::std::vec::Vec<$crate::assert::Step<'_>> =
            ::std::vec![$($crate::assert::step($step)),*];
        $crate::assert::no_failures($t, steps)
    }};
}

/// Run closures through [`assert::no_errors`].
///
/// Each closure returns an [`anyhow::Result`], so `?` can be used inside of
/// them.
///
/// ```
/// use vouch::check;
///
/// vouch::test(|t| {
///     vouch::no_errors!(t, || {
///         let value: u32 = "42".parse()?;
///         check::equal(t, value, 42);
///         Ok(())
///     });
/// });
/// ```
///
/// [`assert::no_errors`]: crate::assert::no_errors
/// [`anyhow::Result`]: https://docs.rs/anyhow/1/anyhow/type.Result.html
#[macro_export]
macro_rules! no_errors {
    ($t:expr $(, $thunk:expr)* $(,)?) => {{
        let thunks: ::std::vec::Vec<$crate::assert::Thunk<'_>> =
            ::std::vec![$($crate::assert::thunk($thunk)),*];
        $crate::assert::no_errors($t, thunks)
    }};
}
