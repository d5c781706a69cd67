//! Overflow policies for fixed-width u32 arithmetic.
//!
//! A kernel is written once against [`OverflowPolicy`] and instantiated with
//! either [`Checked`] (fail fast, the default everywhere) or [`Wrapping`]
//! (results reduced mod 2^32). A single kernel invocation never mixes the two.

use std::fmt;

use crate::error::{ArithError, ArithOp, Result};

/// How additions and multiplications behave when the true result does not
/// fit in a u32.
pub trait OverflowPolicy {
    const NAME: &'static str;

    fn add(lhs: u32, rhs: u32) -> Result<u32>;

    fn mul(lhs: u32, rhs: u32) -> Result<u32>;
}

/// Fails with [`ArithError::Overflow`] as soon as a result leaves the u32 range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

impl OverflowPolicy for Checked {
    const NAME: &'static str = "checked";

    fn add(lhs: u32, rhs: u32) -> Result<u32> {
        lhs.checked_add(rhs).ok_or(ArithError::overflow(ArithOp::Add, lhs, rhs))
    }

    fn mul(lhs: u32, rhs: u32) -> Result<u32> {
        lhs.checked_mul(rhs).ok_or(ArithError::overflow(ArithOp::Mul, lhs, rhs))
    }
}

/// Two's complement wraparound. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wrapping;

impl OverflowPolicy for Wrapping {
    const NAME: &'static str = "wrapping";

    fn add(lhs: u32, rhs: u32) -> Result<u32> {
        Ok(lhs.wrapping_add(rhs))
    }

    fn mul(lhs: u32, rhs: u32) -> Result<u32> {
        Ok(lhs.wrapping_mul(rhs))
    }
}

/// Runtime selector for an [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    #[default]
    Checked,
    Wrapping,
}

impl Arithmetic {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checked => Checked::NAME,
            Self::Wrapping => Wrapping::NAME,
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_in_range() {
        assert_eq!(Checked::add(2, 3), Ok(5));
        assert_eq!(Checked::mul(3, 7), Ok(21));
        assert_eq!(Checked::add(u32::MAX - 1, 1), Ok(u32::MAX));
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            Checked::add(u32::MAX, 1),
            Err(ArithError::overflow(ArithOp::Add, u32::MAX, 1))
        );
        assert_eq!(
            Checked::mul(0x1_0000, 0x1_0000),
            Err(ArithError::overflow(ArithOp::Mul, 0x1_0000, 0x1_0000))
        );
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Wrapping::add(u32::MAX, 1), Ok(0));
        assert_eq!(Wrapping::add(u32::MAX, u32::MAX), Ok(u32::MAX - 1));
        assert_eq!(Wrapping::mul(0x1_0000, 0x1_0000), Ok(0));
        assert_eq!(Wrapping::mul(3, 1431655766), Ok(2));
    }

    #[test]
    fn test_arithmetic_default_is_checked() {
        assert_eq!(Arithmetic::default(), Arithmetic::Checked);
        assert_eq!(Arithmetic::Checked.to_string(), "checked");
        assert_eq!(Arithmetic::Wrapping.to_string(), "wrapping");
    }
}
