use crate::error::Result;
use crate::policy::{Checked, OverflowPolicy};

/// Returns `1 + 2 + ... + n`, failing on u32 overflow.
///
/// `sum(0)` is 0. The first input whose sum leaves the u32 range is 92682.
pub fn sum(n: u32) -> Result<u32> {
    sum_with::<Checked>(n)
}

/// Returns `1 + 2 + ... + n` under the overflow policy `P`.
///
/// The running index is driven by an inclusive range, so `n == u32::MAX`
/// never overflows the index itself.
pub fn sum_with<P: OverflowPolicy>(n: u32) -> Result<u32> {
    (1..=n).try_fold(0, P::add)
}
