//! The `ParamValue` capability: what a type must provide to travel through
//! the fixture lifecycle.
//!
//! A param value only needs to be debug-renderable and to answer whether it is
//! "null" for comparison purposes. There is no reflection: the set of types
//! that participate is enumerated by explicit impls, `Option<T>` is the one
//! null carrier, and text types are atomic because they only ever satisfy the
//! scalar path.

use std::fmt;

/// A value that can occupy an expected/actual slot.
pub trait ParamValue: fmt::Debug {
    /// True when the value plays the role of null in comparisons. A null pair
    /// compares equal without consulting the assertion backend.
    fn is_null(&self) -> bool {
        false
    }
}

/// Renders a value for diagnostic lines: `null` for null values, `{:?}`
/// otherwise.
pub fn render<T: ParamValue + ?Sized>(value: &T) -> String {
    if value.is_null() {
        "null".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Implements [`ParamValue`] with scalar (never-null) semantics for the named
/// types. Exported so downstream fixtures can register their own value types.
#[macro_export]
macro_rules! scalar_param_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::value::ParamValue for $ty {})+
    };
}

scalar_param_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    String, &str
);

impl<T: fmt::Debug> ParamValue for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

// Whole sequences are values too, so a sequence-typed fixture can still be
// forced through the scalar path (`treat_as_scalar`).
impl<T: fmt::Debug> ParamValue for Vec<T> {}
impl<T: fmt::Debug> ParamValue for &[T] {}
impl<T: fmt::Debug, const N: usize> ParamValue for [T; N] {}
