//! Check and assert helpers for Rust tests.
//!
//! Every helper comes in two flavors:
//!
//! * [`check`] functions record a failure and let the test keep running. They
//!   return `true` if the condition held, so call sites can branch on them.
//! * [`assert`] functions record a failure and stop the current unit of
//!   execution immediately.
//!
//! Both report through a [`Reporter`], the capability a test supplies to
//! record failures. Inside of a `#[test]` function the simplest way to get one
//! is [`test`], which runs a closure with a fresh [`Context`] and fails the
//! test with every recorded diagnostic once the closure is done:
//!
//! ```
//! use vouch::{assert, check};
//!
//! vouch::test(|t| {
//!     // Checks keep going when they fail, and every failure is reported
//!     // once the unit completes.
//!     check::is_true(t, true);
//!     check::equal(t, vec!["hello"], vec!["hello"]);
//!     check::less_than(t, 1, 4);
//!     check::is_in(t, 4, &[2, 3, 4, 5]);
//!     check::nil(t, None::<Vec<u8>>);
//!
//!     // Asserts stop the unit at the first failure.
//!     assert::not_equal(t, 5, 0);
//!     assert::no_error(t, &"42".parse::<u32>());
//!
//!     // Stop here if anything above failed.
//!     vouch::no_failures!(t);
//! });
//! ```
//!
//! Structural comparison with [`Options`] can exclude fields, tolerate
//! approximate numbers or treat missing and empty values as equal. The
//! runners [`assert::no_failures`] and [`assert::no_errors`] run a series of
//! closures and stop at the first one which causes a failure.

#![deny(missing_docs)]

pub mod assert;

pub mod check;

mod compare;
pub use self::compare::Options;

mod config;
pub use self::config::Config;

mod context;
pub use self::context::{Context, Failure};

mod diff;

mod error;
pub use self::error::{CompareError, ConfigurationError, TestFailed};

mod exported_macros;

mod mock;
pub use self::mock::MockReporter;

mod nil;
pub use self::nil::Nilable;

mod reporter;
pub use self::reporter::Reporter;

mod runner;
pub use self::runner::{run, test, Report, Suite, Summary};

mod tree;
