//! Parsing of number fields ("1,2,3", "01 05 17", "3|7").
//!
//! Every run of ASCII digits is one number; anything else separates.
//! Parsing never fails: a malformed field simply yields fewer numbers,
//! and an empty or garbage field yields none.

use std::collections::BTreeSet;

pub fn parse_numbers(field: &str) -> Vec<u32> {
    field
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<u32>().ok())
        .collect()
}

pub fn number_set(field: &str) -> BTreeSet<u32> {
    parse_numbers(field).into_iter().collect()
}
