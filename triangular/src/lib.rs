//! Triangular numbers: the sum `1 + 2 + ... + n`.

use thiserror::Error;

/// Largest `n` whose triangular number fits in an `i64`.
pub const MAX_EXACT_INPUT: i64 = 4_294_967_295;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("triangular number of {n} overflows i64")]
    Overflow { n: i64 },
}

/// Computes `n * (n + 1) / 2` in constant time.
///
/// The even factor is halved before multiplying, so the division is exact and
/// the product is the only step that can overflow. Negative `n` is evaluated
/// with the same formula.
pub fn sum_to_n(n: i64) -> Result<i64, SumError> {
    let overflow = || SumError::Overflow { n };
    let next = n.checked_add(1).ok_or_else(overflow)?;
    let (a, b) = if n % 2 == 0 { (n / 2, next) } else { (n, next / 2) };
    a.checked_mul(b).ok_or_else(overflow)
}

/// Adds `1..=n` one term at a time. Zero for `n <= 0`.
pub fn sum_to_n_iter(n: i64) -> Result<i64, SumError> {
    (1..=n).try_fold(0i64, |acc, i| {
        acc.checked_add(i).ok_or(SumError::Overflow { n })
    })
}
