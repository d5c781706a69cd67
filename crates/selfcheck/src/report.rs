use crate::check::{Check, CheckFailure};

/// Result of running a single [`Check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: Check,
    /// The kernel's value on success.
    pub result: Result<u32, CheckFailure>,
}

impl CheckOutcome {
    pub const fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a self-check run, in table order.
///
/// When the run stops at the first failure, checks after it are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub(crate) fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    pub fn first_failure(&self) -> Option<&CheckFailure> {
        self.failures().next()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Process exit status for this report: 0 when every check passed,
    /// otherwise the tag of the first failing check.
    pub fn exit_status(&self) -> u8 {
        self.first_failure().map_or(0, |failure| failure.id().get())
    }

    /// Collapses the report into the first failure, if any.
    pub fn into_result(self) -> Result<(), CheckFailure> {
        match self.outcomes.into_iter().find_map(|o| o.result.err()) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
