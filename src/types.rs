//! Shared scalar types.

/// Integer encoding of an access rights set, as produced by
/// [`crate::rights::convert_to_bits`] and accepted by
/// [`crate::rights::convert_from_bits`].
///
/// The interpretation of its bits is:
/// - Bit 0: read.
/// - Bit 1: write.
/// - Bit 2: execute.
/// - Bits 3-31: unnamed. Preserved verbatim by every operation.
pub type RightsBits = u32;
