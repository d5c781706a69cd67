use std::fmt;
use std::num::NonZeroU8;

use numcheck_kernels::{
    collatz_with, fib_with, sum_with, ArithError, Arithmetic, Checked, OverflowPolicy, Wrapping,
};

/// One of the u32 kernels under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    Sum,
    Fib,
    Collatz,
}

impl Kernel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Fib => "fib",
            Self::Collatz => "collatz",
        }
    }

    /// Evaluates the kernel on `n` with the selected overflow behaviour.
    pub fn eval(self, n: u32, arithmetic: Arithmetic) -> Result<u32, ArithError> {
        match arithmetic {
            Arithmetic::Checked => self.eval_with::<Checked>(n),
            Arithmetic::Wrapping => self.eval_with::<Wrapping>(n),
        }
    }

    fn eval_with<P: OverflowPolicy>(self, n: u32) -> Result<u32, ArithError> {
        match self {
            Self::Sum => sum_with::<P>(n),
            Self::Fib => fib_with::<P>(n),
            Self::Collatz => collatz_with::<P>(n),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tag identifying a self-check assertion. Doubles as the process exit code,
/// so it is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckId(NonZeroU8);

impl CheckId {
    /// # Panics
    /// Panics if `id` is 0, which would read as a successful exit.
    pub const fn new(id: u8) -> Self {
        match NonZeroU8::new(id) {
            Some(id) => Self(id),
            None => panic!("check id 0 is reserved for success"),
        }
    }

    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed-input assertion: `kernel(input) == expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub id: CheckId,
    pub kernel: Kernel,
    pub input: u32,
    pub expected: u32,
}

impl Check {
    pub const fn new(id: u8, kernel: Kernel, input: u32, expected: u32) -> Self {
        Self {
            id: CheckId::new(id),
            kernel,
            input,
            expected,
        }
    }

    /// Runs the kernel and compares against the expected value.
    ///
    /// An arithmetic error raised by the kernel is reported under this
    /// check's tag, same as a mismatch.
    pub fn run(&self, arithmetic: Arithmetic) -> Result<u32, CheckFailure> {
        let actual = self
            .kernel
            .eval(self.input, arithmetic)
            .map_err(|source| CheckFailure::Arithmetic {
                id: self.id,
                kernel: self.kernel,
                input: self.input,
                source,
            })?;

        if actual != self.expected {
            return Err(CheckFailure::Mismatch {
                id: self.id,
                kernel: self.kernel,
                input: self.input,
                expected: self.expected,
                actual,
            });
        }
        Ok(actual)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check {}: {}({}) == {}",
            self.id, self.kernel, self.input, self.expected
        )
    }
}

/// The built-in self-check table.
pub const STANDARD_CHECKS: [Check; 3] = [
    Check::new(1, Kernel::Sum, 5, 15),
    Check::new(2, Kernel::Fib, 8, 21),
    Check::new(3, Kernel::Collatz, 12, 9),
];

/// A failed self-check assertion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckFailure {
    #[error("check {id} failed: {kernel}({input}) returned {actual}, expected {expected}")]
    Mismatch {
        id: CheckId,
        kernel: Kernel,
        input: u32,
        expected: u32,
        actual: u32,
    },

    #[error("check {id} failed: {kernel}({input}) raised an error: {source}")]
    Arithmetic {
        id: CheckId,
        kernel: Kernel,
        input: u32,
        #[source]
        source: ArithError,
    },
}

impl CheckFailure {
    pub const fn id(&self) -> CheckId {
        match self {
            Self::Mismatch { id, .. } | Self::Arithmetic { id, .. } => *id,
        }
    }

    /// Numeric tag of the failed check, used as the process exit status.
    pub const fn code(&self) -> i32 {
        self.id().get() as i32
    }
}
