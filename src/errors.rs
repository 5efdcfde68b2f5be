//! Errors of the binding and of the left-side survey
#[cfg(doc)]
use crate::{binding::JSolve, left_sides::insert_left_side, survey::load_boards};

/// Error for [`JSolve::call`]: the call-time arguments did not have the shape `(str, int)`
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Wrong number of arguments
    #[error("takes exactly {expected} arguments ({given} given)")]
    Arity {
        /// Always 2
        expected: usize,
        /// Number of arguments actually passed
        given: usize,
    },
    /// Argument of the wrong type. `position` counts from 1.
    #[error("argument {position} must be {expected}, not {found}")]
    Type {
        /// 1-based argument position
        position: usize,
        /// Name of the accepted type
        expected: &'static str,
        /// Name of the type that was passed
        found: String,
    },
    /// Integer argument does not fit into a C `int`
    #[error("argument {position}: signed integer is {}", overflow_bound(.value))]
    Overflow {
        /// 1-based argument position
        position: usize,
        /// The rejected value
        value: i128,
    },
    /// String argument contains a NUL byte
    #[error("argument {position}: embedded null character")]
    EmbeddedNul {
        /// 1-based argument position
        position: usize,
    },
}

fn overflow_bound(value: &i128) -> &'static str {
    if *value < 0 {
        "less than minimum"
    } else {
        "greater than maximum"
    }
}

/// Error for [`insert_left_side`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeftSideError {
    /// Board is not 81 cells long
    #[error("board should have length 81, found {0}")]
    BoardLength(usize),
    /// Top-left cell of the board differs from the left side's first digit
    #[error("top-left cell is '{board}' but the left side starts with '{left}'")]
    TopLeftMismatch {
        /// Cell content on the board
        board: char,
        /// First digit of the left side
        left: char,
    },
    /// Bottom-left cell of the board differs from the left side's last digit
    #[error("bottom-left cell is '{board}' but the left side ends with '{left}'")]
    LowLeftMismatch {
        /// Cell content on the board
        board: char,
        /// Last digit of the left side
        left: char,
    },
}

/// Error for [`load_boards`]. Line numbers start at 1.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Reading the data failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line is not exactly 81 characters
    #[error("line {line}: board should have length 81, found {found}")]
    LineLength {
        /// Offending line
        line: usize,
        /// Its length in characters
        found: usize,
    },
    /// A line does not start with the fixed top row
    #[error("line {line}: board does not start with the top row 123456789")]
    TopRow {
        /// Offending line
        line: usize,
    },
    /// The file holds a different number of boards than expected
    #[error("expected {expected} boards, found {found}")]
    Count {
        /// Number of boards asked for
        expected: usize,
        /// Number of boards read
        found: usize,
    },
}

/// Error for the survey as a whole
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Data file could not be loaded
    #[error(transparent)]
    Data(#[from] DataError),
    /// A completion could not be built
    #[error(transparent)]
    LeftSide(#[from] LeftSideError),
    /// Writing a report failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Settings are unusable
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The solver returned a count outside `0..=max_solutions`
    #[error("solver returned {count} solutions for {board} with a limit of {max_solutions}")]
    UnexpectedCount {
        /// Board that was solved
        board: String,
        /// Returned count
        count: i32,
        /// Limit passed to the solver
        max_solutions: i32,
    },
    /// The worker pool could not be started
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
