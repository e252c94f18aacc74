//! # testparam
//!
//! Arrange-Act-Assert test parameter fixtures with first-class support for
//! scalar and sequence-typed values.
//!
//! A fixture describes once how to produce an expected value ([`Fixture::arrange`]),
//! an actual value ([`Fixture::act`]), and the lifecycle core ([`TestParam`])
//! drives the cycle: trace the pair to an injected [`OutputSink`], then hand
//! it to an injected assertion backend ([`Oracle`]). Sequence-typed values are
//! compared element by element in index lockstep, with length divergence
//! reported through two fixed messages.
//!
//! ```
//! use testparam::{run_scalar, Fixture};
//!
//! struct Doubling {
//!     input: i32,
//! }
//!
//! impl Fixture for Doubling {
//!     type Value = i32;
//!
//!     fn arrange(&mut self) -> i32 {
//!         self.input * 2
//!     }
//!
//!     fn act(&mut self) -> i32 {
//!         self.input + self.input
//!     }
//! }
//!
//! run_scalar(&mut Doubling { input: 21 }).unwrap();
//! ```

pub mod compare;
pub mod error;
pub mod oracle;
pub mod output;
pub mod param;
pub mod slot;
pub mod value;

pub use crate::compare::{compare_sequences, ACTUAL_LONGER, ACTUAL_SHORTER};
pub use crate::error::ParamError;
pub use crate::oracle::{EqOracle, Oracle};
pub use crate::output::{ConsoleSink, NullSink, OutputBuffer, OutputSink, StdoutSink};
pub use crate::param::{
    run_scalar, run_sequence, Fixture, IndexedFixture, RunOptions, TestParam,
};
pub use crate::slot::ValueSlot;
pub use crate::value::{render, ParamValue};
