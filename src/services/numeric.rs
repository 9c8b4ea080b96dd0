//! Numeric routines behind the dispatch endpoint.
//!
//! All reductions are left-to-right folds; overflow is reported rather than
//! wrapped so the handler can map it to a 500.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("arithmetic overflow")]
    Overflow,
}

/// First `n` Fibonacci numbers, starting at 0. Non-positive `n` yields an
/// empty sequence.
pub fn fibonacci(n: i64) -> Result<Vec<u64>, NumericError> {
    if n <= 0 {
        return Ok(Vec::new());
    }
    let mut series = vec![0u64];
    if n == 1 {
        return Ok(series);
    }
    series.push(1);
    for i in 2..n as usize {
        let next = series[i - 1]
            .checked_add(series[i - 2])
            .ok_or(NumericError::Overflow)?;
        series.push(next);
    }
    Ok(series)
}

/// Trial division up to the integer square root. Anything below 2 is not prime.
pub fn is_prime(num: i64) -> bool {
    if num < 2 {
        return false;
    }
    // d <= num / d avoids overflowing d * d near i64::MAX.
    let mut d = 2i64;
    while d <= num / d {
        if num % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Keep only the primes, preserving input order.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&v| is_prime(v)).collect()
}

/// Euclidean GCD. `gcd(a, 0) = a`. `i64::MIN % -1` overflows, so the
/// remainder is checked.
pub fn gcd(a: i64, b: i64) -> Result<i64, NumericError> {
    if b == 0 {
        Ok(a)
    } else {
        let r = a.checked_rem(b).ok_or(NumericError::Overflow)?;
        gcd(b, r)
    }
}

/// Pairwise GCD folded left to right. `None` for an empty slice.
pub fn hcf_all(values: &[i64]) -> Option<Result<i64, NumericError>> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.try_fold(first, gcd))
}

fn lcm_pair(a: i64, b: i64) -> Result<i64, NumericError> {
    let g = gcd(a, b)?;
    if g == 0 {
        return Ok(0);
    }
    a.checked_div(g)
        .ok_or(NumericError::Overflow)?
        .checked_mul(b)
        .ok_or(NumericError::Overflow)
}

/// Pairwise LCM folded left to right. `None` for an empty slice.
pub fn lcm_all(values: &[i64]) -> Option<Result<i64, NumericError>> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.try_fold(first, lcm_pair))
}
