//! Left columns of a grid whose top row is `123456789`.
//!
//! The top-left digit is always `1`, and since the top-left block already contains
//! `1`, `2` and `3`, the next two cells of the column can't be `2` or `3`.
//! That leaves 6 * 5 * 6! = 21600 of the 9! permutations.
use crate::errors::LeftSideError;
use crate::solver::N_CELLS;
use std::fmt;

/// Number of admissible left sides
pub const N_LEFT_SIDES: usize = 21_600;

/// Index of the bottom-left cell
const LOW_LEFT: usize = 9 * 8;

/// The nine digits of column 0, top to bottom, as ASCII bytes
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeftSide(pub [u8; 9]);

impl LeftSide {
    /// Digit of the top-left cell
    #[inline]
    pub fn top(self) -> u8 {
        self.0[0]
    }

    /// Digit of the bottom-left cell
    #[inline]
    pub fn low(self) -> u8 {
        self.0[8]
    }
}

impl fmt::Display for LeftSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{}", digit as char)?;
        }
        Ok(())
    }
}

/// All left sides compatible with the top row `123456789`, in lexicographic order.
pub fn possible_left_sides() -> Vec<LeftSide> {
    let mut left_sides = Vec::with_capacity(N_LEFT_SIDES);
    let mut column = *b"123456789";
    loop {
        if !matches!(column[1], b'2' | b'3') && !matches!(column[2], b'2' | b'3') {
            left_sides.push(LeftSide(column));
        }
        // column[0] is the smallest digit, so stepping past the
        // permutations starting with '1' means we're done
        if !next_permutation(&mut column) || column[0] != b'1' {
            break;
        }
    }
    left_sides
}

// Rearranges into the next lexicographically greater permutation.
// Returns false, leaving the slice untouched, if it was already the greatest.
fn next_permutation(digits: &mut [u8]) -> bool {
    let pivot = match digits.windows(2).rposition(|pair| pair[0] < pair[1]) {
        Some(pivot) => pivot,
        None => return false,
    };
    // a successor exists, the suffix after `pivot` is non-increasing
    let successor = digits.iter().rposition(|&d| d > digits[pivot]).unwrap_or(pivot);
    digits.swap(pivot, successor);
    digits[pivot + 1..].reverse();
    true
}

/// Digit in the bottom-left corner of `board`, if the board is long enough to have one.
/// Boards are expected to be ASCII.
pub fn low_left_digit(board: &str) -> Option<u8> {
    board.as_bytes().get(LOW_LEFT).copied()
}

/// Replace column 0 of `board` with `left_side`.
///
/// The board has to agree with `left_side` in both left corners.
pub fn insert_left_side(left_side: LeftSide, board: &str) -> Result<String, LeftSideError> {
    let mut cells = board.chars().collect::<Vec<_>>();
    if cells.len() != N_CELLS {
        return Err(LeftSideError::BoardLength(cells.len()));
    }
    let (top, low) = (left_side.top() as char, left_side.low() as char);
    if cells[0] != top {
        return Err(LeftSideError::TopLeftMismatch { board: cells[0], left: top });
    }
    if cells[LOW_LEFT] != low {
        return Err(LeftSideError::LowLeftMismatch {
            board: cells[LOW_LEFT],
            left: low,
        });
    }

    for (row, &digit) in left_side.0.iter().enumerate() {
        cells[row * 9] = digit as char;
    }
    Ok(cells.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // top, right and bottom border of the grid built from the left side 147258369
    const BORDER: &str = concat!(
        "123456789",
        "4.......3",
        "7.......6",
        "2.......1",
        "5.......4",
        "8.......7",
        "3.......2",
        "6.......5",
        "912345678",
    );

    #[test]
    fn left_side_count() {
        let left_sides = possible_left_sides();
        assert_eq!(left_sides.len(), N_LEFT_SIDES);
        assert_eq!(left_sides.iter().collect::<HashSet<_>>().len(), N_LEFT_SIDES);
    }

    #[test]
    fn left_sides_are_admissible() {
        for left_side in possible_left_sides() {
            let mut digits = left_side.0;
            assert_eq!(left_side.top(), b'1');
            assert!(!b"23".contains(&digits[1]), "{}", left_side);
            assert!(!b"23".contains(&digits[2]), "{}", left_side);
            digits.sort_unstable();
            assert_eq!(&digits, b"123456789");
        }
    }

    #[test]
    fn left_sides_are_sorted() {
        let left_sides = possible_left_sides();
        assert!(left_sides.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(left_sides[0].to_string(), "145236789");
        assert_eq!(left_sides[N_LEFT_SIDES - 1].to_string(), "198765432");
    }

    #[test]
    fn left_sides_per_low_digit() {
        let left_sides = possible_left_sides();
        let count = |digit| left_sides.iter().filter(|left| left.low() == digit).count();
        // '2' and '3' are free to sit anywhere in rows 3..=8
        assert_eq!(count(b'2'), 6 * 5 * 120);
        assert_eq!(count(b'3'), 6 * 5 * 120);
        for digit in b'4'..=b'9' {
            assert_eq!(count(digit), 5 * 4 * 120);
        }
    }

    #[test]
    fn permutation_steps() {
        let mut digits = *b"132";
        assert!(next_permutation(&mut digits));
        assert_eq!(&digits, b"213");
        let mut digits = *b"321";
        assert!(!next_permutation(&mut digits));
        assert_eq!(&digits, b"321");
    }

    #[test]
    fn low_left() {
        assert_eq!(low_left_digit(BORDER), Some(b'9'));
        assert_eq!(low_left_digit("123"), None);
    }

    #[test]
    fn insert_replaces_only_column_zero() {
        let board = BORDER.replace("4.......3", "........3");
        let left_side = LeftSide(*b"147258369");
        let inserted = insert_left_side(left_side, &board).unwrap();
        assert_eq!(inserted, BORDER);

        let other = LeftSide(*b"154263879");
        let inserted = insert_left_side(other, &board).unwrap();
        for (cell, (new, old)) in inserted.bytes().zip(board.bytes()).enumerate() {
            if cell % 9 == 0 {
                assert_eq!(new, other.0[cell / 9]);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn insert_checks_corners() {
        assert_eq!(
            insert_left_side(LeftSide(*b"147258396"), BORDER),
            Err(LeftSideError::LowLeftMismatch { board: '9', left: '6' })
        );
        let board = format!("2{}", &BORDER[1..]);
        assert_eq!(
            insert_left_side(LeftSide(*b"147258369"), &board),
            Err(LeftSideError::TopLeftMismatch { board: '2', left: '1' })
        );
        assert_eq!(
            insert_left_side(LeftSide(*b"147258369"), &BORDER[..80]),
            Err(LeftSideError::BoardLength(80))
        );
    }
}
