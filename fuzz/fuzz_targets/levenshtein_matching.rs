// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The early exits (length gap, row minimum) must never change the answer, only
//! how fast it arrives. Checked against the textbook full-table distance.

#![no_main]

use arbitrary::Arbitrary;
use blogsift::fuzzy::bounded_distance;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fn full_distance(a: &[char], b: &[char]) -> usize {
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let next = (row[j + 1] + 1)
                .min(row[j] + 1)
                .min(prev + usize::from(ac != bc));
            prev = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a: Vec<char> = input.a.chars().take(40).collect();
    let b: Vec<char> = input.b.chars().take(40).collect();
    let max = usize::from(input.max % 8);

    let a_str: String = a.iter().collect();
    let b_str: String = b.iter().collect();
    let expected = full_distance(&a, &b);

    // INVARIANT 1: agrees with the unbounded distance inside the budget
    let got = bounded_distance(&a_str, &b_str, max);
    if expected <= max {
        assert_eq!(got, Some(expected), "a={a_str:?} b={b_str:?} max={max}");
    } else {
        assert_eq!(got, None, "a={a_str:?} b={b_str:?} max={max}");
    }

    // INVARIANT 2: symmetric
    assert_eq!(got, bounded_distance(&b_str, &a_str, max));

    // INVARIANT 3: identity
    assert_eq!(bounded_distance(&a_str, &a_str, 0), Some(0));
});
