//! Pure u32 kernels: bounded summation, Fibonacci and Collatz step count.
//!
//! Every kernel comes in two forms: a plain one (`sum`, `fib`, `collatz`) that
//! fails fast on overflow, and a `*_with` form generic over an
//! [`OverflowPolicy`] for callers that want modular arithmetic instead.

pub mod collatz;
pub mod error;
pub mod fib;
pub mod policy;
pub mod sum;

pub use collatz::{collatz, collatz_with};
pub use error::{ArithError, ArithOp, Result};
pub use fib::{fib, fib_with};
pub use policy::{Arithmetic, Checked, OverflowPolicy, Wrapping};
pub use sum::{sum, sum_with};
