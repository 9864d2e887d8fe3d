//! Index <-> character rendering table for colors, and the placeholder
//! character for an unknown/undecided cell.
//!
//! The table is fixed regardless of grid size; a grid of side `N` only ever
//! uses the first `N` entries.

/// Renders an "unknown" cell -- a candidate set equal to `full(N)`.
pub const UNKNOWN: char = '_';

const TABLE: &str = "123456789\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
@\
abcdefghijklmnopqrstuvwxyz\
&*";

/// The character used to render color index `color`, if any.
#[must_use]
pub fn index_to_char(color: u32) -> Option<char> {
    TABLE.chars().nth(color as usize)
}

/// The color index `c` denotes in the table, regardless of grid size.
///
/// Does not recognize [`UNKNOWN`] -- callers that need to special-case the
/// placeholder should check for it themselves (it means "all colors", not
/// one particular color).
#[must_use]
pub fn char_to_index(c: char) -> Option<u32> {
    TABLE.chars().position(|t| t == c).map(|i| i as u32)
}

/// The characters valid in a grid of side `size`: `size` table entries plus
/// [`UNKNOWN`].
pub fn valid_chars(size: usize) -> impl Iterator<Item = char> {
    TABLE.chars().take(size).chain(std::iter::once(UNKNOWN))
}

/// Whether `c` is a valid cell character for a grid of side `size`.
#[must_use]
pub fn is_valid_char(size: usize, c: char) -> bool {
    c == UNKNOWN || char_to_index(c).is_some_and(|i| (i as usize) < size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_supported_size() {
        for &size in &[1, 4, 9, 16, 25, 36, 49, 64] {
            for color in 0..size as u32 {
                let c = index_to_char(color).unwrap();
                assert_eq!(char_to_index(c), Some(color));
                assert!(is_valid_char(size, c));
            }
        }
    }

    #[test]
    fn unknown_is_valid_everywhere_but_not_a_color() {
        assert!(is_valid_char(1, UNKNOWN));
        assert!(is_valid_char(64, UNKNOWN));
        assert_eq!(char_to_index(UNKNOWN), None);
    }

    #[test]
    fn out_of_range_color_for_size_is_invalid() {
        assert!(!is_valid_char(4, '5'));
        assert!(is_valid_char(9, '5'));
    }

    #[test]
    fn table_order_matches_spec() {
        assert_eq!(index_to_char(0), Some('1'));
        assert_eq!(index_to_char(8), Some('9'));
        assert_eq!(index_to_char(9), Some('A'));
        assert_eq!(index_to_char(34), Some('Z'));
        assert_eq!(index_to_char(35), Some('@'));
        assert_eq!(index_to_char(36), Some('a'));
        assert_eq!(index_to_char(61), Some('z'));
        assert_eq!(index_to_char(62), Some('&'));
        assert_eq!(index_to_char(63), Some('*'));
        assert_eq!(index_to_char(64), None);
    }
}
