//! Named rendering of an [`AccessRights`] value.
//!
//! `0` renders as `None`, an exact named value as its name, and any other value
//! as the names it decomposes into, lowest bit first (`Read, Write`). A value
//! carrying unnamed bits renders as its plain integer.

use std::fmt;

use crate::rights::AccessRights;

/// Named values, highest first. Decomposition is greedy in this order.
const NAMED: [(AccessRights, &str); 4] = [
    (AccessRights::FULL, "Full"),
    (AccessRights::EXECUTE, "Execute"),
    (AccessRights::WRITE, "Write"),
    (AccessRights::READ, "Read"),
];

impl fmt::Display for AccessRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        if let Some((_, name)) = NAMED.iter().find(|(value, _)| value == self) {
            return f.write_str(name);
        }

        let mut remaining = self.bits();
        let mut names = Vec::with_capacity(NAMED.len());
        for (value, name) in NAMED {
            if remaining & value.bits() == value.bits() {
                remaining &= !value.bits();
                names.push(name);
            }
        }
        if remaining != 0 {
            return write!(f, "{}", self.bits());
        }

        names.reverse();
        f.write_str(&names.join(", "))
    }
}
