#![no_main]

// Harness: rights_algebra
// Strategy: apply an arbitrary sequence of in-place operations to an arbitrary
// starting mask and check each step against plain integer arithmetic.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use access_rights::rights::{self, AccessRights};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Add(u32),
    Remove(u32),
}

#[derive(Arbitrary, Debug)]
struct Input {
    start: u32,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut r = rights::convert_from_bits(input.start);
    let mut expected = input.start;
    for op in input.ops {
        match op {
            Op::Add(bits) => {
                rights::add(&mut r, rights::convert_from_bits(bits));
                expected |= bits;
            }
            Op::Remove(bits) => {
                rights::remove(&mut r, rights::convert_from_bits(bits));
                expected &= !bits;
            }
        }
        assert_eq!(rights::convert_to_bits(r), expected);
        assert!(rights::has(r, AccessRights::NONE));
    }
    let _ = r.to_string();
});
