//! Scenario test suites

pub mod test_utils;
