//! Lockstep element comparison for sequence-typed test values.
//!
//! The comparator only ever moves two forward cursors, so it tolerates lazy or
//! streamed sequences of unknown length; it never asks for random access or a
//! length up front. Each aligned pair is traced to the sink before the
//! per-item oracle runs on it, and a length divergence is reported the moment
//! one cursor runs dry.

use crate::error::ParamError;
use crate::oracle::Oracle;
use crate::output::OutputSink;
use crate::value::{render, ParamValue};

/// Failure message when the actual sequence outlives the expected one.
pub const ACTUAL_LONGER: &str = "Number of <Actual> is greater than <Expected>.";

/// Failure message when the actual sequence runs dry first.
pub const ACTUAL_SHORTER: &str = "Number of <Actual> is less than <Expected>.";

/// Compares two sequences element by element, in index lockstep.
///
/// At each aligned index the pair is written to `sink` as `Expected(i)` /
/// `Actual(i)` lines and then handed to the oracle, unless both elements are
/// null (a null pair is equal by definition). When one side is exhausted
/// first, the divergence is traced and the run fails with the matching fixed
/// message, built through [`Oracle::build_failure`].
pub fn compare_sequences<'a, I, O, S>(
    expected: impl IntoIterator<Item = &'a I>,
    actual: impl IntoIterator<Item = &'a I>,
    oracle: &O,
    sink: &mut S,
) -> Result<(), ParamError>
where
    I: ParamValue + 'a,
    O: Oracle<I> + ?Sized,
    S: OutputSink + ?Sized,
{
    let mut expected = expected.into_iter();
    let mut actual = actual.into_iter();
    let mut index = 0usize;

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Ok(()),
            (Some(e), Some(a)) => {
                sink.write_line(&format!("Expected({index}) = {}", render(e)));
                sink.write_line(&format!("Actual({index}) = {}", render(a)));
                if !(e.is_null() && a.is_null()) {
                    oracle.assert_equal(e, a)?;
                }
                index += 1;
            }
            (None, Some(extra)) => {
                sink.write_line(&format!("Actual({index}) = {}", render(extra)));
                return Err(oracle.build_failure(ACTUAL_LONGER));
            }
            (Some(_), None) => {
                sink.write_line(&format!("Actual({index}) = <none>"));
                return Err(oracle.build_failure(ACTUAL_SHORTER));
            }
        }
    }
}
