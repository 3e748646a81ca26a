//!
//! Access rights algebra.
//! Defines the permission bit flags and the helper functions for their manipulation:
//! membership, equality, union, difference and the raw integer encoding.

use crate::types::RightsBits;

/// A set of access permissions stored as a bitmask.
///
/// Bit 0 is read, bit 1 is write, bit 2 is execute. Any other bit is kept as-is
/// (see [`convert_from_bits`]) and takes part in every operation like a named one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AccessRights(RightsBits);

bitflags::bitflags! {
    impl AccessRights: RightsBits {
        /// No permissions.
        const NONE = 0;
        /// Permission to read.
        const READ = 0b001;
        /// Permission to write.
        const WRITE = 0b010;
        /// Permission to execute.
        const EXECUTE = 0b100;
        /// Every named permission. An alias, not a distinct bit.
        const FULL = Self::READ.bits() | Self::WRITE.bits() | Self::EXECUTE.bits();
    }
}

/// Checks whether every right in `to_check` is present in `rights`.
///
/// This is the rule `(rights & to_check) == to_check`, so checking for
/// [`AccessRights::NONE`] always succeeds.
#[inline]
pub fn has(rights: AccessRights, to_check: AccessRights) -> bool {
    rights.contains(to_check)
}

/// Checks whether two rights sets are bit-for-bit identical.
#[inline]
pub fn is(rights: AccessRights, other: AccessRights) -> bool {
    rights == other
}

/// Returns the union of `rights` and `to_add`.
#[inline]
pub fn join(rights: AccessRights, to_add: AccessRights) -> AccessRights {
    rights.union(to_add)
}

/// Adds `to_add` to the caller's rights set in place.
pub fn add(rights: &mut AccessRights, to_add: AccessRights) {
    let before = *rights;
    *rights = join(before, to_add);
    tracing::trace!(
        before = before.bits(),
        operand = to_add.bits(),
        after = rights.bits(),
        "added access rights"
    );
}

/// Returns `rights` with every bit of `to_remove` cleared.
///
/// Bits of `to_remove` that are absent from `rights` are ignored.
#[inline]
pub fn separate(rights: AccessRights, to_remove: AccessRights) -> AccessRights {
    // `difference` keeps unnamed bits; `rights & !to_remove` would truncate them.
    rights.difference(to_remove)
}

/// Removes `to_remove` from the caller's rights set in place.
pub fn remove(rights: &mut AccessRights, to_remove: AccessRights) {
    let before = *rights;
    *rights = separate(before, to_remove);
    tracing::trace!(
        before = before.bits(),
        operand = to_remove.bits(),
        after = rights.bits(),
        "removed access rights"
    );
}

/// Reinterprets an integer as a rights set.
///
/// The value is stored verbatim. Bits outside the named range are retained.
#[inline]
pub fn convert_from_bits(bits: RightsBits) -> AccessRights {
    AccessRights::from_bits_retain(bits)
}

/// Returns the integer encoding of a rights set.
#[inline]
pub fn convert_to_bits(rights: AccessRights) -> RightsBits {
    rights.bits()
}
