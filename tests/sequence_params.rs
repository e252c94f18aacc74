//! Sequence lifecycle tests: index-aligned comparison, the two length-mismatch
//! messages, and the diagnostic trace order.

use testparam::{
    run_sequence, EqOracle, Fixture, OutputBuffer, RunOptions, TestParam, ACTUAL_LONGER,
    ACTUAL_SHORTER,
};

struct SeqFixture<T: Clone> {
    value1: Vec<T>,
    value2: Vec<T>,
}

impl<T: Clone> Fixture for SeqFixture<T> {
    type Value = Vec<T>;

    fn arrange(&mut self) -> Vec<T> {
        self.value1.clone()
    }

    fn act(&mut self) -> Vec<T> {
        self.value2.clone()
    }
}

fn quiet() -> RunOptions {
    RunOptions {
        leading_blank_line: false,
        ..RunOptions::default()
    }
}

#[test]
fn equal_int_sequences_pass() {
    let mut fixture = SeqFixture {
        value1: vec![0, 1, 2],
        value2: vec![0, 1, 2],
    };
    let mut sink = OutputBuffer::new();
    TestParam::with_keyword("IntArrayAssertTest")
        .run_elements(&mut fixture, &EqOracle, &mut sink, &quiet())
        .unwrap();
    assert_eq!(
        sink.lines(),
        &[
            "[IntArrayAssertTest]",
            "Expected(0) = 0",
            "Actual(0) = 0",
            "Expected(1) = 1",
            "Actual(1) = 1",
            "Expected(2) = 2",
            "Actual(2) = 2",
        ]
    );
}

#[test]
fn element_mismatch_is_an_element_failure_not_a_length_failure() {
    let mut fixture = SeqFixture {
        value1: vec![0, 1, 2],
        value2: vec![0, 1, 3],
    };
    let err = TestParam::new()
        .run_elements(
            &mut fixture,
            &EqOracle,
            &mut OutputBuffer::new(),
            &quiet(),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Assertion failed. Expected:<2> Actual:<3>.");
}

#[test]
fn longer_actual_fails_with_the_greater_message() {
    let mut fixture = SeqFixture {
        value1: vec![1, 2, 3],
        value2: vec![1, 2, 3, 4],
    };
    let mut sink = OutputBuffer::new();
    let err = TestParam::new()
        .run_elements(&mut fixture, &EqOracle, &mut sink, &quiet())
        .unwrap_err();
    assert_eq!(err.to_string(), ACTUAL_LONGER);
    assert_eq!(err.to_string(), "Number of <Actual> is greater than <Expected>.");
    // The extra element is traced before the failure propagates.
    assert_eq!(sink.lines().last().unwrap(), "Actual(3) = 4");
}

#[test]
fn shorter_actual_fails_with_the_less_message() {
    let mut fixture = SeqFixture {
        value1: vec![1, 2, 3, 4],
        value2: vec![1, 2, 3],
    };
    let mut sink = OutputBuffer::new();
    let err = TestParam::new()
        .run_elements(&mut fixture, &EqOracle, &mut sink, &quiet())
        .unwrap_err();
    assert_eq!(err.to_string(), ACTUAL_SHORTER);
    assert_eq!(err.to_string(), "Number of <Actual> is less than <Expected>.");
    assert_eq!(sink.lines().last().unwrap(), "Actual(3) = <none>");
}

#[test]
fn equal_string_sequences_pass() {
    let mut fixture = SeqFixture {
        value1: vec!["ABC".to_string(), "XYZ".to_string()],
        value2: vec!["ABC".to_string(), "XYZ".to_string()],
    };
    TestParam::with_keyword("StringArrayAssertTest")
        .run_elements(
            &mut fixture,
            &EqOracle,
            &mut OutputBuffer::new(),
            &RunOptions::default(),
        )
        .unwrap();
}

#[test]
fn string_sequence_mismatch_fails() {
    let mut fixture = SeqFixture {
        value1: vec!["ABC".to_string(), "XYZ".to_string()],
        value2: vec!["ABC".to_string(), "XY".to_string()],
    };
    let err = TestParam::new()
        .run_elements(
            &mut fixture,
            &EqOracle,
            &mut OutputBuffer::new(),
            &quiet(),
        )
        .unwrap_err();
    assert!(err.is_failure());
}

#[test]
fn empty_sequences_pass() {
    let mut fixture: SeqFixture<i32> = SeqFixture {
        value1: vec![],
        value2: vec![],
    };
    TestParam::new()
        .run_elements(
            &mut fixture,
            &EqOracle,
            &mut OutputBuffer::new(),
            &quiet(),
        )
        .unwrap();
}

#[test]
fn convenience_wrapper_runs_the_element_path() {
    let mut fixture = SeqFixture {
        value1: vec![7, 8],
        value2: vec![7, 8],
    };
    run_sequence(&mut fixture).unwrap();
}

#[test]
fn null_elements_at_the_same_index_are_equal() {
    let mut fixture = SeqFixture {
        value1: vec![Some(1), None, Some(3)],
        value2: vec![Some(1), None, Some(3)],
    };
    let mut sink = OutputBuffer::new();
    TestParam::new()
        .run_elements(&mut fixture, &EqOracle, &mut sink, &quiet())
        .unwrap();
    assert_eq!(sink.lines()[2], "Expected(1) = null");
    assert_eq!(sink.lines()[3], "Actual(1) = null");
}
