use std::fmt::Write as _;

use crate::types::{COLUMN_WIDTH, Rendering};

/// Lays out a validated binary string as two aligned lines: the bits
/// themselves, and the reversed index (length-1-i) under each '1' bit.
///
/// Every position gets a fixed-width column; values are centered with the
/// extra pad space on the right, so a two-digit index still lines up under
/// its bit. Trailing column padding is kept as computed.
pub fn format(input: &str) -> Rendering {
    let len = input.chars().count();
    let mut bits = String::with_capacity(len * COLUMN_WIDTH);
    let mut indices = String::with_capacity(len * COLUMN_WIDTH);

    for (i, bit) in input.chars().enumerate() {
        let _ = write!(bits, "{:^w$}", bit, w = COLUMN_WIDTH);
        if bit == '1' {
            let _ = write!(indices, "{:^w$}", len - 1 - i, w = COLUMN_WIDTH);
        } else {
            indices.push_str(&" ".repeat(COLUMN_WIDTH));
        }
    }

    Rendering { bits, indices }
}
