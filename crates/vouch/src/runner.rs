use core::fmt;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

use crate::context::Abort;
use crate::error::TestFailed;
use crate::{Config, Context, Failure, Reporter};

/// The outcome of running one unit.
#[derive(Debug, Clone)]
pub struct Report {
    name: String,
    failed: bool,
    aborted: bool,
    panicked: bool,
    failures: Vec<Failure>,
}

impl Report {
    /// The name of the unit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test if the unit completed without failures.
    pub fn passed(&self) -> bool {
        !self.failed
    }

    /// Test if the unit was stopped by [`Reporter::fail_now`].
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Test if the unit was stopped by a panic.
    pub fn panicked(&self) -> bool {
        self.panicked
    }

    /// The failures recorded by the unit, in order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Convert into a result, failing if the unit failed.
    pub fn into_result(self) -> Result<(), TestFailed> {
        if self.passed() {
            return Ok(());
        }

        Err(TestFailed {
            name: self.name,
            failures: self.failures,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "test `{}` passed", self.name);
        }

        write!(f, "test `{}` failed", self.name)?;

        if self.failures.is_empty() {
            write!(f, " without a diagnostic")?;
        }

        for failure in &self.failures {
            write!(f, "\n\n{failure}")?;
        }

        Ok(())
    }
}

/// Run a unit of execution with a fresh [`Context`].
///
/// The unit stops when it returns, when it calls [`Reporter::fail_now`], or
/// when it panics. A panic is recorded as a failure of the unit.
///
/// ```
/// use std::cell::Cell;
/// use vouch::assert;
///
/// let reached = Cell::new(false);
///
/// let report = vouch::run("stops", |t| {
///     assert::equal(t, 1, 2);
///     reached.set(true);
/// });
///
/// assert!(report.aborted());
/// assert!(!reached.get());
/// ```
pub fn run<N, F>(name: N, f: F) -> Report
where
    N: Into<String>,
    F: FnOnce(&Context),
{
    run_context(Context::new(name), f)
}

/// Run a unit of execution from inside of a `#[test]` function.
///
/// The unit is named after the current thread, which the standard test
/// harness names after the test. If the unit fails, this panics with every
/// recorded failure so that the harness reports them.
///
/// ```should_panic
/// use vouch::check;
///
/// vouch::test(|t| {
///     check::equal(t, "hello", "world");
///     check::less_than(t, 4, 1);
/// });
/// ```
#[track_caller]
pub fn test<F>(f: F)
where
    F: FnOnce(&Context),
{
    let thread = thread::current();
    let report = run(thread.name().unwrap_or("test"), f);

    if !report.passed() {
        panic!("{report}");
    }
}

#[tracing::instrument(skip_all, fields(name = context.name()))]
fn run_context<F>(context: Context, f: F) -> Report
where
    F: FnOnce(&Context),
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| f(&context)));

    let mut aborted = false;
    let mut panicked = false;

    if let Err(payload) = result {
        if payload.is::<Abort>() {
            aborted = true;
        } else {
            panicked = true;
            let message = format!("panicked: {}", panic_message(&*payload));
            context.record(Failure::new(message, None));
        }
    }

    let failed = context.failed();
    let name = context.name().to_owned();
    let failures = context.into_failures();

    tracing::debug!(failed, aborted, panicked, failures = failures.len(), "unit completed");

    Report {
        name,
        failed,
        aborted,
        panicked,
        failures,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "Box<dyn Any>"
    }
}

/// Totals from running a [`Suite`].
#[derive(Debug, Clone)]
pub struct Summary {
    /// Reports for every case which ran, in order.
    pub reports: Vec<Report>,
    /// Number of cases which ran.
    pub executed: usize,
    /// Number of cases which failed.
    pub failures: usize,
    /// Number of cases which did not run.
    pub skipped: usize,
    /// Time spent running the suite.
    pub elapsed: Duration,
}

impl Summary {
    /// Test if every case ran and passed.
    pub fn passed(&self) -> bool {
        self.failures == 0 && self.skipped == 0
    }
}

/// A sequence of named units run one after another.
///
/// Each case gets its own [`Context`]. By default the suite stops at the first
/// failing case, see [`Config`].
///
/// ```
/// use vouch::{check, Config, Suite};
///
/// let mut out = Vec::new();
///
/// let summary = Suite::new(Config::default())
///     .case("adds", |t| {
///         check::equal(t, 1 + 1, 2);
///     })
///     .case("compares", |t| {
///         check::less_than(t, 1, 2);
///     })
///     .run(&mut out)?;
///
/// assert!(summary.passed());
/// assert_eq!(summary.executed, 2);
/// # Ok::<_, std::io::Error>(())
/// ```
pub struct Suite<'a> {
    config: Config,
    cases: Vec<(String, Box<dyn FnOnce(&Context) + 'a>)>,
}

impl<'a> Suite<'a> {
    /// Construct an empty suite.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cases: Vec::new(),
        }
    }

    /// Add a case to the suite.
    pub fn case<N, F>(mut self, name: N, f: F) -> Self
    where
        N: Into<String>,
        F: 'a + FnOnce(&Context),
    {
        self.cases.push((name.into(), Box::new(f)));
        self
    }

    /// Run every case, writing progress and failures to `out`.
    pub fn run<W>(self, out: &mut W) -> io::Result<Summary>
    where
        W: ?Sized + Write,
    {
        let start = Instant::now();
        let total = self.cases.len();
        let mut reports = Vec::with_capacity(total);
        let mut failures = 0usize;

        for (name, case) in self.cases {
            if !self.config.quiet {
                write!(out, "{name} ")?;
            }

            let report = run(name, case);

            if self.config.quiet {
                let mark = if report.panicked() {
                    "F"
                } else if !report.passed() {
                    "f"
                } else {
                    "."
                };

                write!(out, "{mark}")?;
            } else {
                let outcome = if report.panicked() {
                    "panicked"
                } else if report.aborted() {
                    "aborted"
                } else if !report.passed() {
                    "failed"
                } else {
                    "passed"
                };

                writeln!(out, "{outcome}")?;
            }

            let passed = report.passed();
            reports.push(report);

            if !passed {
                failures += 1;

                if !self.config.no_fail_fast {
                    break;
                }
            }
        }

        if self.config.quiet {
            writeln!(out)?;
        }

        for report in reports.iter().filter(|report| !report.passed()) {
            writeln!(out, "----------------------------------------")?;
            writeln!(out, "{report}")?;
        }

        let elapsed = start.elapsed();
        let executed = reports.len();
        let skipped = total - executed;

        writeln!(out, "====")?;
        writeln!(
            out,
            "Executed {executed} tests with {failures} failures ({skipped} skipped) in {:.3} seconds",
            elapsed.as_secs_f64()
        )?;

        tracing::info!(executed, failures, skipped, "suite completed");

        Ok(Summary {
            reports,
            executed,
            failures,
            skipped,
            elapsed,
        })
    }
}

impl fmt::Debug for Suite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("config", &self.config)
            .field("cases", &self.cases.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}
