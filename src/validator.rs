/// Fixed message printed when the input fails validation.
pub const INVALID_INPUT_MESSAGE: &str =
    "Error: Input must be a binary string containing only '0' and '1'.";

/// Returns true iff every character of `s` is '0' or '1'.
///
/// The empty string is vacuously valid. Any character outside the set,
/// including non-ASCII, makes the whole input invalid.
pub fn is_binary(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '1')
}
