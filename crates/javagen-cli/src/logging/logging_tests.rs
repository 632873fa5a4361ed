#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(0, false, "info")]
#[test_case(1, false, "debug")]
#[test_case(2, false, "trace")]
#[test_case(5, false, "trace")]
#[test_case(0, true, "error")]
fn default_directive___maps_flags(verbose: u8, quiet: bool, expected: &str) {
    assert_eq!(default_directive(verbose, quiet), expected);
}

#[test]
fn init_logging___twice___does_not_panic() {
    init_logging(0, false);
    init_logging(2, false);
}
