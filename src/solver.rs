//! The solver seam. The binding only ever talks to a [`Solver`], the search itself lives
//! in the `sudoku` crate.
use sudoku::Sudoku;

/// Number of cells in a board string
pub const N_CELLS: usize = 81;

/// A routine that counts the solutions of a board, stopping after `max_solutions`.
///
/// `solutions`, if present, receives every solution found as an 81-digit line.
/// The returned count never exceeds `max_solutions` and is 0 for boards that
/// cannot be read or have no solution.
pub trait Solver {
    /// Count solutions of `board`, up to `max_solutions`.
    fn solve(&self, board: &str, solutions: Option<&mut Vec<String>>, max_solutions: i32) -> i32;
}

impl<S: Solver + ?Sized> Solver for &S {
    #[inline]
    fn solve(&self, board: &str, solutions: Option<&mut Vec<String>>, max_solutions: i32) -> i32 {
        (**self).solve(board, solutions, max_solutions)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    #[inline]
    fn solve(&self, board: &str, solutions: Option<&mut Vec<String>>, max_solutions: i32) -> i32 {
        (**self).solve(board, solutions, max_solutions)
    }
}

/// The default solver, backed by [`sudoku::Sudoku`].
///
/// Boards are read one character per cell. `'1'..='9'` are clues, every
/// other character is an empty cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FastSolver;

impl Solver for FastSolver {
    fn solve(&self, board: &str, solutions: Option<&mut Vec<String>>, max_solutions: i32) -> i32 {
        if max_solutions <= 0 {
            return 0;
        }
        let sudoku = match read_board(board) {
            Some(sudoku) => sudoku,
            None => {
                tracing::debug!(
                    len = board.chars().count(),
                    "board is not 81 cells long, no solutions"
                );
                return 0;
            }
        };
        let limit = max_solutions as usize;

        let found = match solutions {
            Some(solutions) => {
                let found = sudoku.solutions_up_to(limit);
                solutions.extend(found.iter().map(|solution| to_line(solution.to_bytes())));
                found.len()
            }
            None => sudoku.solutions_count_up_to(limit),
        };
        // `found <= limit <= i32::MAX`
        found as i32
    }
}

fn read_board(board: &str) -> Option<Sudoku> {
    let mut bytes = [0; N_CELLS];
    let mut cells = board.chars();
    for byte in bytes.iter_mut() {
        *byte = match cells.next()? {
            ch @ '1'..='9' => ch as u8 - b'0',
            _ => 0,
        };
    }
    if cells.next().is_some() {
        return None;
    }
    // entries are all <= 9, so this can't fail
    Sudoku::from_bytes(bytes).ok()
}

fn to_line(bytes: [u8; N_CELLS]) -> String {
    bytes.iter().map(|&digit| char::from(b'0' + digit)).collect()
}
