//! Fixed-input self-check over the u32 kernels.
//!
//! [`self_check`] evaluates `sum(5)`, `fib(8)` and `collatz(12)` against 15,
//! 21 and 9. A failure carries the tag (1, 2 or 3) of the assertion that broke.

pub mod check;
pub mod report;

pub use check::{Check, CheckFailure, CheckId, Kernel, STANDARD_CHECKS};
pub use numcheck_kernels::Arithmetic;
pub use report::{CheckOutcome, CheckReport};

use tracing::{debug, info, warn};

/// Result type for self-check operations
pub type Result<T> = std::result::Result<T, CheckFailure>;

/// Options for running a self-check
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Overflow behaviour of the kernels, checked by default.
    pub arithmetic: Arithmetic,
    /// Stop after the first failing check, true by default.
    pub stop_at_first_failure: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            arithmetic: Arithmetic::Checked,
            stop_at_first_failure: true,
        }
    }
}

/// Runs the built-in checks with default options.
///
/// Returns normally when every check passes, otherwise the first failure.
pub fn self_check() -> Result<()> {
    self_check_with(&CheckOptions::default())
}

/// Runs the built-in checks with the given options.
pub fn self_check_with(options: &CheckOptions) -> Result<()> {
    run_checks(&STANDARD_CHECKS, options).into_result()
}

/// Runs `checks` in order and collects their outcomes.
pub fn run_checks(checks: &[Check], options: &CheckOptions) -> CheckReport {
    let mut report = CheckReport::default();

    for check in checks {
        let result = check.run(options.arithmetic);
        match &result {
            Ok(value) => debug!(%check, value, "check passed"),
            Err(failure) => warn!(code = failure.code(), "{failure}"),
        }

        let failed = result.is_err();
        report.push(CheckOutcome {
            check: *check,
            result,
        });
        if failed && options.stop_at_first_failure {
            break;
        }
    }

    info!(
        arithmetic = %options.arithmetic,
        run = report.outcomes().len(),
        failed = report.failures().count(),
        "self-check finished"
    );
    report
}
