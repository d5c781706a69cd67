use std::fmt;

/// Result type for kernel evaluation
pub type Result<T> = std::result::Result<T, ArithError>;

/// The arithmetic operation that left the u32 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Mul,
}

impl ArithOp {
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Mul => '*',
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "addition"),
            Self::Mul => write!(f, "multiplication"),
        }
    }
}

/// Errors that can occur while evaluating a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    #[error("u32 {op} overflow: {lhs} {symbol} {rhs}", symbol = .op.symbol())]
    Overflow { op: ArithOp, lhs: u32, rhs: u32 },

    #[error("collatz is undefined for 0: the sequence never reaches 1")]
    CollatzZero,
}

impl ArithError {
    pub const fn overflow(op: ArithOp, lhs: u32, rhs: u32) -> Self {
        Self::Overflow { op, lhs, rhs }
    }
}
