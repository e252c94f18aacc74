//! The Arrange-Act-Assert lifecycle core.
//!
//! A [`TestParam`] owns the two value slots and drives one test cycle: write
//! the optional header, populate `Expected` via Arrange, populate `Actual`
//! via Act, then compare. Scalar-vs-sequence dispatch is compile-time and
//! explicit: [`TestParam::run`] is the scalar path, [`TestParam::run_elements`]
//! the per-element path (any forward-iterable container qualifies), and
//! [`TestParam::run_indexed`] the repeated variant that re-arms the slots once
//! per index.
//!
//! Fixture authors implement [`Fixture`] (or [`IndexedFixture`]); both traits
//! have no default bodies, so a fixture that forgets to supply Arrange or Act
//! does not compile.

use crate::compare::compare_sequences;
use crate::error::ParamError;
use crate::oracle::{EqOracle, Oracle};
use crate::output::{ConsoleSink, OutputSink};
use crate::slot::ValueSlot;
use crate::value::{render, ParamValue};

/// Author contract for a single-shot fixture: produce the expected value,
/// produce the actual value.
pub trait Fixture {
    type Value;

    /// Produces the expected value (the Arrange step).
    fn arrange(&mut self) -> Self::Value;

    /// Produces the actual value under test (the Act step).
    fn act(&mut self) -> Self::Value;
}

/// Author contract for the indexed/repeated variant: one expected/actual pair
/// per index.
pub trait IndexedFixture {
    type Value;

    fn arrange_at(&mut self, index: usize) -> Self::Value;

    fn act_at(&mut self, index: usize) -> Self::Value;
}

/// Knobs for one lifecycle run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Write an empty line before any other output. On by default.
    pub leading_blank_line: bool,
    /// Write the `[keyword]` header when the keyword is non-empty.
    pub print_keyword: bool,
    /// Leave the `Expected` slot as-is instead of invoking Arrange.
    pub skip_arrange: bool,
    /// Leave the `Actual` slot as-is instead of invoking Act.
    pub skip_act: bool,
    /// Force scalar comparison in `run_elements`, comparing the sequences as
    /// whole values.
    pub treat_as_scalar: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            leading_blank_line: true,
            print_keyword: true,
            skip_arrange: false,
            skip_act: false,
            treat_as_scalar: false,
        }
    }
}

/// One test parameter: the expected/actual slot pair plus a diagnostic
/// keyword. Exclusively owns its slots; not meant to be shared across
/// concurrently running test cases.
#[derive(Debug)]
pub struct TestParam<T> {
    expected: ValueSlot<T>,
    actual: ValueSlot<T>,
    keyword: Option<String>,
}

impl<T> Default for TestParam<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TestParam<T> {
    pub fn new() -> Self {
        Self {
            expected: ValueSlot::new("Expected"),
            actual: ValueSlot::new("Actual"),
            keyword: None,
        }
    }

    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        let mut param = Self::new();
        param.keyword = Some(keyword.into());
        param
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = Some(keyword.into());
    }

    /// Reads the expected value; fails until Arrange (or manual arming) has
    /// run.
    pub fn expected(&self) -> Result<&T, ParamError> {
        self.expected.get()
    }

    /// Reads the actual value; fails until Act (or manual arming) has run.
    pub fn actual(&self) -> Result<&T, ParamError> {
        self.actual.get()
    }

    /// Arms the `Expected` slot directly; pairs with `skip_arrange`.
    pub fn set_expected(&mut self, value: T) {
        self.expected.set(value);
    }

    /// Arms the `Actual` slot directly; pairs with `skip_act`.
    pub fn set_actual(&mut self, value: T) {
        self.actual.set(value);
    }

    fn write_header<S>(&self, sink: &mut S, options: &RunOptions)
    where
        S: OutputSink + ?Sized,
    {
        if options.leading_blank_line {
            sink.write_line("");
        }
        if options.print_keyword {
            if let Some(keyword) = self.keyword.as_deref() {
                if !keyword.is_empty() {
                    sink.write_keyword(keyword);
                }
            }
        }
    }
}

impl<T: ParamValue> TestParam<T> {
    /// Runs one scalar cycle: header, Arrange, Act, trace, assert.
    ///
    /// The `Expected` and `Actual` lines reach the sink before the oracle
    /// runs, so a failure's context is already visible when the error
    /// propagates. A null pair passes without consulting the oracle.
    pub fn run<F, O, S>(
        &mut self,
        fixture: &mut F,
        oracle: &O,
        sink: &mut S,
        options: &RunOptions,
    ) -> Result<(), ParamError>
    where
        F: Fixture<Value = T>,
        O: Oracle<T> + ?Sized,
        S: OutputSink + ?Sized,
    {
        self.write_header(sink, options);
        if !options.skip_arrange {
            self.expected.set(fixture.arrange());
        }
        if !options.skip_act {
            self.actual.set(fixture.act());
        }
        self.compare_scalar(oracle, sink)
    }

    /// Runs one sequence cycle: as [`run`](Self::run), but the comparison is
    /// per-element through [`compare_sequences`], unless `treat_as_scalar`
    /// forces whole-value comparison.
    pub fn run_elements<F, I, O, S>(
        &mut self,
        fixture: &mut F,
        oracle: &O,
        sink: &mut S,
        options: &RunOptions,
    ) -> Result<(), ParamError>
    where
        F: Fixture<Value = T>,
        for<'a> &'a T: IntoIterator<Item = &'a I>,
        I: ParamValue,
        O: Oracle<T> + Oracle<I> + ?Sized,
        S: OutputSink + ?Sized,
    {
        self.write_header(sink, options);
        if !options.skip_arrange {
            self.expected.set(fixture.arrange());
        }
        if !options.skip_act {
            self.actual.set(fixture.act());
        }
        if options.treat_as_scalar {
            return self.compare_scalar(oracle, sink);
        }
        compare_sequences(self.expected.get()?, self.actual.get()?, oracle, sink)
    }

    /// Runs `count` scalar cycles, one per index. Both slots are re-armed on
    /// every iteration; after the run they hold the last index's pair.
    pub fn run_indexed<F, O, S>(
        &mut self,
        fixture: &mut F,
        count: usize,
        oracle: &O,
        sink: &mut S,
        options: &RunOptions,
    ) -> Result<(), ParamError>
    where
        F: IndexedFixture<Value = T>,
        O: Oracle<T> + ?Sized,
        S: OutputSink + ?Sized,
    {
        self.write_header(sink, options);
        for index in 0..count {
            if !options.skip_arrange {
                self.expected.set(fixture.arrange_at(index));
            }
            if !options.skip_act {
                self.actual.set(fixture.act_at(index));
            }
            let expected = self.expected.get()?;
            let actual = self.actual.get()?;
            sink.write_line(&format!("Expected({index}) = {}", render(expected)));
            sink.write_line(&format!("Actual({index}) = {}", render(actual)));
            if !(expected.is_null() && actual.is_null()) {
                oracle.assert_equal(expected, actual)?;
            }
        }
        Ok(())
    }

    fn compare_scalar<O, S>(&self, oracle: &O, sink: &mut S) -> Result<(), ParamError>
    where
        O: Oracle<T> + ?Sized,
        S: OutputSink + ?Sized,
    {
        let expected = self.expected.get()?;
        let actual = self.actual.get()?;
        sink.write_line(&format!("Expected = {}", render(expected)));
        sink.write_line(&format!("Actual = {}", render(actual)));
        if !(expected.is_null() && actual.is_null()) {
            oracle.assert_equal(expected, actual)?;
        }
        Ok(())
    }
}

/// Runs a scalar fixture with the default oracle, console sink, and options.
pub fn run_scalar<F>(fixture: &mut F) -> Result<(), ParamError>
where
    F: Fixture,
    F::Value: ParamValue + PartialEq,
{
    TestParam::new().run(
        fixture,
        &EqOracle,
        &mut ConsoleSink::new(),
        &RunOptions::default(),
    )
}

/// Runs a sequence fixture per-element with the default oracle, console sink,
/// and options.
pub fn run_sequence<F, I>(fixture: &mut F) -> Result<(), ParamError>
where
    F: Fixture,
    F::Value: ParamValue + PartialEq,
    for<'a> &'a F::Value: IntoIterator<Item = &'a I>,
    I: ParamValue + PartialEq,
{
    TestParam::new().run_elements(
        fixture,
        &EqOracle,
        &mut ConsoleSink::new(),
        &RunOptions::default(),
    )
}
