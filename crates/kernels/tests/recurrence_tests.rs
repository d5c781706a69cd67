//! Recurrence laws for the u32 kernels, checked against u64 reference values.

use numcheck_kernels::{collatz, fib, fib_with, sum, sum_with, ArithError, Wrapping};
use proptest::prelude::*;

// Largest n with sum(n) <= u32::MAX.
const SUM_MAX_INPUT: u32 = 92681;
// Largest n with fib(n) <= u32::MAX.
const FIB_MAX_INPUT: u32 = 47;
// Every trajectory starting below this bound stays within u32.
const COLLATZ_SAFE_BOUND: u32 = 100_000;

fn sum_u64(n: u32) -> u64 {
    let n = n as u64;
    n * (n + 1) / 2
}

fn fib_u64(n: u32) -> u64 {
    let mut current = 0u64;
    let mut next = 1u64;
    for _ in 0..n {
        let new_next = current + next;
        current = next;
        next = new_next;
    }
    current
}

#[test]
fn test_documented_values() {
    assert_eq!(sum(0), Ok(0));
    assert_eq!(sum(1), Ok(1));
    assert_eq!(sum(5), Ok(15));
    assert_eq!(sum(10), Ok(55));

    assert_eq!(fib(0), Ok(0));
    assert_eq!(fib(1), Ok(1));
    assert_eq!(fib(8), Ok(21));
    assert_eq!(fib(10), Ok(55));

    assert_eq!(collatz(1), Ok(0));
    assert_eq!(collatz(12), Ok(9));
}

#[test]
fn test_overflow_boundaries() {
    assert!(sum(SUM_MAX_INPUT).is_ok());
    assert!(matches!(sum(SUM_MAX_INPUT + 1), Err(ArithError::Overflow { .. })));
    assert!(fib(FIB_MAX_INPUT).is_ok());
    assert!(matches!(fib(FIB_MAX_INPUT + 1), Err(ArithError::Overflow { .. })));
}

proptest! {
    #[test]
    fn property_sum_recurrence(n in 1u32..=SUM_MAX_INPUT) {
        prop_assert_eq!(sum(n)?, sum(n - 1)? + n);
    }

    #[test]
    fn property_sum_closed_form(n in 0u32..=SUM_MAX_INPUT) {
        prop_assert_eq!(sum(n)? as u64, sum_u64(n));
    }

    #[test]
    fn property_sum_wrapping_is_modular(n in 0u32..150_000) {
        prop_assert_eq!(sum_with::<Wrapping>(n)?, sum_u64(n) as u32);
    }

    #[test]
    fn property_fib_recurrence(n in 2u32..=FIB_MAX_INPUT) {
        prop_assert_eq!(fib(n)?, fib(n - 1)? + fib(n - 2)?);
    }

    #[test]
    fn property_fib_matches_reference(n in 0u32..=FIB_MAX_INPUT) {
        prop_assert_eq!(fib(n)? as u64, fib_u64(n));
    }

    #[test]
    fn property_fib_wrapping_is_modular(n in 0u32..90) {
        prop_assert_eq!(fib_with::<Wrapping>(n)?, fib_u64(n) as u32);
    }

    #[test]
    fn property_collatz_even_step(half in 1u32..COLLATZ_SAFE_BOUND / 2) {
        let n = half * 2;
        prop_assert_eq!(collatz(n)?, 1 + collatz(half)?);
    }

    #[test]
    fn property_collatz_odd_step(k in 1u32..COLLATZ_SAFE_BOUND / 2) {
        let n = k * 2 + 1;
        prop_assert_eq!(collatz(n)?, 1 + collatz(3 * n + 1)?);
    }
}
