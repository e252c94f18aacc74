//! The assertion-backend capability.
//!
//! The lifecycle core is polymorphic over the pass/fail oracle: it never
//! hard-codes a failure type, constructing every comparison failure through
//! [`Oracle::build_failure`]. The stock backend, [`EqOracle`], compares with
//! `PartialEq`; a test framework adapter can substitute its own message shape
//! by overriding `build_failure`.

use std::fmt;

use crate::error::ParamError;

/// Pass/fail oracle over values of type `T`.
pub trait Oracle<T: ?Sized> {
    /// Succeeds when the backend considers the values equal; fails with a
    /// comparison failure otherwise.
    fn assert_equal(&self, expected: &T, actual: &T) -> Result<(), ParamError>;

    /// Constructs the backend-specific failure signal carrying `message`.
    fn build_failure(&self, message: &str) -> ParamError {
        ParamError::failure(message)
    }
}

/// Default oracle: `PartialEq` equality with a labeled mismatch message.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqOracle;

impl<T> Oracle<T> for EqOracle
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    fn assert_equal(&self, expected: &T, actual: &T) -> Result<(), ParamError> {
        if expected == actual {
            Ok(())
        } else {
            Err(<Self as Oracle<T>>::build_failure(self, &format!(
                "Assertion failed. Expected:<{expected:?}> Actual:<{actual:?}>."
            )))
        }
    }
}
