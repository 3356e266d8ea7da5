//! tests for branch selection
use piecewise::function::branch::{LOWER_THRESHOLD, UPPER_THRESHOLD};
use piecewise::function::Branch;

#[test]
fn thresholds() {
    assert_eq!(LOWER_THRESHOLD, 0.0);
    assert_eq!(UPPER_THRESHOLD, 5.0);
}

#[test]
fn selects_by_domain() {
    assert_eq!(Branch::of(-100.0), Branch::Negative);
    assert_eq!(Branch::of(-1e-300), Branch::Negative);
    assert_eq!(Branch::of(0.0), Branch::Smooth);
    assert_eq!(Branch::of(-0.0), Branch::Smooth);
    assert_eq!(Branch::of(4.999_999), Branch::Smooth);
    assert_eq!(Branch::of(5.0), Branch::Series);
    assert_eq!(Branch::of(1e9), Branch::Series);
}

#[test]
fn names() {
    assert_eq!(Branch::Negative.to_string(), "negative");
    assert_eq!(Branch::Smooth.to_string(), "smooth");
    assert_eq!(Branch::Series.branch_name(), "series");
}
