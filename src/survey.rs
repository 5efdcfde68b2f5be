//! Census of uniquely completable left sides.
//!
//! The input is a list of boards whose top row is `123456789` and whose right and bottom
//! borders are filled in. For every board, each admissible [`LeftSide`] that agrees with
//! the bottom-left corner is inserted. The binding then counts the solutions of the result,
//! capped at `max_solutions`. A board's report says how many of those completions are unique,
//! how many have more than one solution, and how many were tried.
use crate::binding::JSolve;
use crate::errors::{DataError, LeftSideError, SurveyError};
use crate::left_sides::{insert_left_side, low_left_digit, possible_left_sides, LeftSide};
use crate::solver::{Solver, N_CELLS};
use rand::{rngs::StdRng, seq::index, SeedableRng};
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// File the survey reads when no other is given
pub const DEFAULT_DATA: &str = "top-right-bottom-reduced.txt";
/// Number of boards in the full data set
pub const EXPECTED_BOARDS: usize = 147_372;
/// Row every board starts with
pub const TOP_ROW: &str = "123456789";

/// Settings of a survey run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Data file, one board per line
    pub data: PathBuf,
    /// Number of boards the data file must hold. `None` skips the check.
    pub expected_boards: Option<usize>,
    /// Cap passed to the solver. Needs to be at least 2 to tell unique completions apart.
    pub max_solutions: i32,
    /// Worker threads. `None` lets rayon decide.
    pub jobs: Option<usize>,
    /// Boards tested between two flushes of the report sink
    pub chunk_size: usize,
    /// Only survey this many randomly chosen boards
    pub sample: Option<usize>,
    /// Seed for `sample`
    pub seed: u64,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            data: PathBuf::from(DEFAULT_DATA),
            expected_boards: Some(EXPECTED_BOARDS),
            max_solutions: 2,
            jobs: None,
            chunk_size: 256,
            sample: None,
            seed: 0,
        }
    }
}

impl SurveyConfig {
    /// Reject settings a survey can't run with
    pub fn validate(&self) -> Result<(), SurveyError> {
        if self.max_solutions < 2 {
            return Err(SurveyError::Config(format!(
                "max_solutions must be at least 2, got {}",
                self.max_solutions
            )));
        }
        if self.chunk_size == 0 {
            return Err(SurveyError::Config("chunk_size must be positive".into()));
        }
        if self.jobs == Some(0) {
            return Err(SurveyError::Config("jobs must be positive".into()));
        }
        Ok(())
    }
}

/// Outcome for one board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardReport {
    /// The board as read
    pub board: String,
    /// Completions with exactly one solution
    pub uniques: usize,
    /// Completions with more than one solution
    pub non_uniques: usize,
    /// Left sides that fit the board's corners
    pub completions: usize,
}

impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.board, self.uniques, self.non_uniques, self.completions
        )
    }
}

/// Totals over all boards of a run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveySummary {
    /// Boards tested
    pub boards: usize,
    /// Left sides tried, over all boards
    pub completions: usize,
    /// Completions with exactly one solution
    pub uniques: usize,
    /// Completions with more than one solution
    pub non_uniques: usize,
}

impl SurveySummary {
    fn add(&mut self, report: &BoardReport) {
        self.boards += 1;
        self.completions += report.completions;
        self.uniques += report.uniques;
        self.non_uniques += report.non_uniques;
    }
}

/// Read boards, one per line, and check that they're consistent.
///
/// Each line must be 81 characters long and start with [`TOP_ROW`]. If `expected` is
/// given, the number of boards must match it.
pub fn load_boards<R: BufRead>(
    reader: R,
    expected: Option<usize>,
) -> Result<Vec<String>, DataError> {
    let mut boards = vec![];
    for (i, line) in reader.lines().enumerate() {
        let mut board = line?;
        if board.ends_with('\r') {
            board.pop();
        }
        let found = board.chars().count();
        if found != N_CELLS {
            return Err(DataError::LineLength { line: i + 1, found });
        }
        if !board.starts_with(TOP_ROW) {
            return Err(DataError::TopRow { line: i + 1 });
        }
        boards.push(board);
    }

    match expected {
        Some(expected) if expected != boards.len() => Err(DataError::Count {
            expected,
            found: boards.len(),
        }),
        _ => Ok(boards),
    }
}

/// Try every left side in `left_sides` that fits the corners of `board`.
pub fn test_board<S: Solver>(
    binding: &JSolve<S>,
    board: &str,
    left_sides: &[LeftSide],
    max_solutions: i32,
) -> Result<BoardReport, SurveyError> {
    let low_left =
        low_left_digit(board).ok_or_else(|| LeftSideError::BoardLength(board.chars().count()))?;

    let mut report = BoardReport {
        board: board.to_owned(),
        uniques: 0,
        non_uniques: 0,
        completions: 0,
    };
    for &left_side in left_sides.iter().filter(|left_side| left_side.low() == low_left) {
        report.completions += 1;
        let completed = insert_left_side(left_side, board)?;
        match binding.count(&completed, max_solutions) {
            0 => {}
            1 => report.uniques += 1,
            count if count > 1 && count <= max_solutions => report.non_uniques += 1,
            count => {
                return Err(SurveyError::UnexpectedCount {
                    board: completed,
                    count,
                    max_solutions,
                })
            }
        }
    }
    Ok(report)
}

/// Keep `amount` boards picked uniformly at random, in their original order.
pub fn sample(boards: Vec<String>, amount: usize, seed: u64) -> Vec<String> {
    if amount >= boards.len() {
        return boards;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keep = vec![false; boards.len()];
    for i in index::sample(&mut rng, boards.len(), amount).iter() {
        keep[i] = true;
    }
    boards
        .into_iter()
        .zip(keep)
        .filter_map(|(board, keep)| if keep { Some(board) } else { None })
        .collect()
}

/// A configured survey, ready to run over a list of boards
pub struct Survey<S> {
    config: SurveyConfig,
    binding: JSolve<S>,
    left_sides: Vec<LeftSide>,
}

impl<S: Solver + Sync> Survey<S> {
    /// Validate `config` and precompute the left sides
    pub fn new(config: SurveyConfig, binding: JSolve<S>) -> Result<Self, SurveyError> {
        config.validate()?;
        Ok(Survey {
            config,
            binding,
            left_sides: possible_left_sides(),
        })
    }

    /// The settings this survey runs with
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Load the configured data file, sampled if so configured
    pub fn load(&self) -> Result<Vec<String>, SurveyError> {
        let file = File::open(&self.config.data).map_err(DataError::from)?;
        let boards = load_boards(BufReader::new(file), self.config.expected_boards)?;
        tracing::info!(boards = boards.len(), data = %self.config.data.display(), "loaded boards");

        Ok(match self.config.sample {
            Some(amount) => {
                let boards = sample(boards, amount, self.config.seed);
                tracing::info!(boards = boards.len(), seed = self.config.seed, "sampled boards");
                boards
            }
            None => boards,
        })
    }

    /// Test all `boards`, writing one report line per board to `sink` in input order.
    pub fn run<W: Write>(
        &self,
        boards: &[String],
        mut sink: W,
    ) -> Result<SurveySummary, SurveyError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs.unwrap_or(0))
            .build()?;
        let max_solutions = self.config.max_solutions;

        let mut summary = SurveySummary::default();
        for chunk in boards.chunks(self.config.chunk_size) {
            let reports = pool.install(|| {
                chunk
                    .par_iter()
                    .map(|board| test_board(&self.binding, board, &self.left_sides, max_solutions))
                    .collect::<Result<Vec<_>, _>>()
            })?;
            for report in &reports {
                writeln!(sink, "{}", report)?;
                summary.add(report);
            }
            sink.flush()?;
            tracing::info!(done = summary.boards, total = boards.len(), "surveyed chunk");
        }

        tracing::debug!(
            boards = summary.boards,
            completions = summary.completions,
            uniques = summary.uniques,
            non_uniques = summary.non_uniques,
            "survey finished"
        );
        Ok(summary)
    }
}
