pub mod error;
pub mod solve;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "rate_estimate")]
pub mod rate_estimate;

pub use error::LoanCalcError;
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
