use serde::Serialize;

/// Horizontal space allotted to each input bit and its index slot.
pub const COLUMN_WIDTH: usize = 3;

/// The two aligned output lines for one binary string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    /// Input bits, each centered in its column.
    pub bits: String,
    /// Reversed index under each '1' bit, blanks under '0' bits.
    pub indices: String,
}
