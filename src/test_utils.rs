//! Proptest strategies for rights sets, shared with the integration tests.

use proptest::prelude::*;

use crate::rights::{convert_from_bits, AccessRights};

/// Any single named flag, including `NONE` and `FULL`.
pub fn named_flag() -> impl Strategy<Value = AccessRights> {
    prop_oneof![
        Just(AccessRights::NONE),
        Just(AccessRights::READ),
        Just(AccessRights::WRITE),
        Just(AccessRights::EXECUTE),
        Just(AccessRights::FULL),
    ]
}

/// Any value reachable through the named flags alone (`0..=7`).
pub fn named_rights() -> impl Strategy<Value = AccessRights> {
    (0u32..=7).prop_map(convert_from_bits)
}

/// Any value at all, unnamed bits included.
pub fn any_rights() -> impl Strategy<Value = AccessRights> {
    any::<u32>().prop_map(convert_from_bits)
}
