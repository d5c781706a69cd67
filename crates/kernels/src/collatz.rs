//! Collatz step counting.
//!
//! Termination for every input is the Collatz conjecture, which is unproven.
//! All u32 inputs whose trajectory stays in range are known to reach 1, but
//! nothing here relies on a proof of that; under [`crate::Wrapping`] a
//! trajectory that wraps around may never reach 1. A trajectory that wraps
//! onto 0 is stuck at that fixed point and is rejected like a 0 input.

use crate::error::{ArithError, Result};
use crate::policy::{Checked, OverflowPolicy};

/// Returns the number of Collatz steps needed for `n` to reach 1, failing on
/// u32 overflow of `3n + 1`.
///
/// `n` must be at least 1: 0 is a fixed point of the map and never reaches 1,
/// so it is rejected with [`ArithError::CollatzZero`].
pub fn collatz(n: u32) -> Result<u32> {
    collatz_with::<Checked>(n)
}

/// Returns the number of Collatz steps for `n` under the overflow policy `P`.
///
/// The multiplication, the increment and the step counter all go through `P`.
/// Reaching 0 at any step fails with [`ArithError::CollatzZero`].
pub fn collatz_with<P: OverflowPolicy>(mut n: u32) -> Result<u32> {
    if n == 0 {
        return Err(ArithError::CollatzZero);
    }

    let mut count = 0;
    while n != 1 {
        n = if n % 2 == 0 {
            n / 2
        } else {
            P::add(P::mul(3, n)?, 1)?
        };
        if n == 0 {
            return Err(ArithError::CollatzZero);
        }
        count = P::add(count, 1)?;
    }
    Ok(count)
}
