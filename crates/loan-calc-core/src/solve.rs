//! Generic bisection root-finding over `rust_decimal::Decimal`.
//!
//! Kept separate from the amortization code so the search can be unit-tested
//! against hand-computed residuals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::LoanCalcResult;

/// Bisection over a monotonically decreasing residual function.
///
/// The caller guarantees `f(lo) >= 0 >= f(hi)`. The interval is halved until
/// it is no wider than `tolerance`, and the upper endpoint is returned — the
/// first candidate guaranteed not to undershoot the root.
pub fn bisect_decreasing<F>(
    f: F,
    mut lo: Decimal,
    mut hi: Decimal,
    tolerance: Decimal,
    max_iterations: u32,
    function: &str,
) -> LoanCalcResult<Decimal>
where
    F: Fn(Decimal) -> Decimal,
{
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    for _ in 0..max_iterations {
        if hi - lo <= tolerance {
            return Ok(hi);
        }
        let mid = (lo + hi) / dec!(2);
        if f(mid) > Decimal::ZERO {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if hi - lo <= tolerance {
        return Ok(hi);
    }

    Err(LoanCalcError::ConvergenceFailure {
        function: function.into(),
        iterations: max_iterations,
        last_delta: hi - lo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_root() {
        // f(x) = 10 - x, root at 10
        let root = bisect_decreasing(|x| dec!(10) - x, dec!(0), dec!(100), dec!(0.001), 200, "linear")
            .unwrap();
        assert!((root - dec!(10)).abs() < dec!(0.01));
        // Upper endpoint never undershoots
        assert!(root >= dec!(10));
    }

    #[test]
    fn test_quadratic_root() {
        // f(x) = 2 - x^2, root at sqrt(2)
        let root = bisect_decreasing(|x| dec!(2) - x * x, dec!(0), dec!(2), dec!(0.0001), 200, "sqrt2")
            .unwrap();
        assert!((root - dec!(1.41421)).abs() < dec!(0.001));
    }

    #[test]
    fn test_swapped_bounds() {
        let root = bisect_decreasing(|x| dec!(10) - x, dec!(100), dec!(0), dec!(0.001), 200, "swap")
            .unwrap();
        assert!((root - dec!(10)).abs() < dec!(0.01));
    }

    #[test]
    fn test_iteration_cap_exceeded() {
        // One iteration cannot shrink [0, 100] under 0.001
        let err = bisect_decreasing(|x| dec!(10) - x, dec!(0), dec!(100), dec!(0.001), 1, "capped")
            .unwrap_err();
        match err {
            LoanCalcError::ConvergenceFailure { iterations, .. } => assert_eq!(iterations, 1),
            other => panic!("Expected ConvergenceFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_tight_bracket_returns_immediately() {
        let root =
            bisect_decreasing(|_| Decimal::ZERO, dec!(5), dec!(5.0001), dec!(0.01), 200, "tight")
                .unwrap();
        assert_eq!(root, dec!(5.0001));
    }
}
