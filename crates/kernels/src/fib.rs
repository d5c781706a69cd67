use crate::error::Result;
use crate::policy::{Checked, OverflowPolicy};

/// Returns the n-th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// `fib(47)` is the largest term that fits in a u32; `fib(48)` fails.
pub fn fib(n: u32) -> Result<u32> {
    fib_with::<Checked>(n)
}

/// Returns the n-th Fibonacci number under the overflow policy `P`.
pub fn fib_with<P: OverflowPolicy>(n: u32) -> Result<u32> {
    if n == 0 {
        return Ok(0);
    }

    // (a, b) holds (fib(k - 1), fib(k)), starting at k = 1. Each shift
    // advances k by one, so n - 1 shifts leave fib(n) in b.
    let (mut a, mut b) = (0, 1);
    for _ in 1..n {
        let c = P::add(a, b)?;
        a = b;
        b = c;
    }
    Ok(b)
}
