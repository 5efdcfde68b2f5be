#![warn(missing_docs)]
//! The JSolve binding
//!
//! ## Overview
//!
//! `JSolve` counts the solutions of a sudoku board, stopping after a given maximum.
//! The search is done by the [`sudoku`] crate. This crate is the glue that makes it
//! callable from Python, with the same argument checking as a C extension, plus the
//! left-side survey that the binding was written for.
//!
//! ## Example
//!
//! ```
//! use jsolve::{jsolve, JSolve, Value};
//!
//! let board = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
//!
//! // Typed call
//! assert_eq!(jsolve(board, 2), 1);
//!
//! // Host-style call, arguments are checked before the solver runs
//! let binding: JSolve = JSolve::default();
//! assert_eq!(binding.call(&[Value::from(board), Value::Int(2)]), Ok(1));
//! assert!(binding.call(&[Value::from(board)]).is_err());
//! ```
pub mod binding;
mod errors;
pub mod left_sides;
#[cfg(feature = "python")]
pub mod python;
pub mod solver;
pub mod survey;

pub use binding::{jsolve, JSolve, Value};
pub use errors::{ArgumentError, DataError, LeftSideError, SurveyError};
pub use solver::{FastSolver, Solver};
pub use survey::{BoardReport, Survey, SurveyConfig, SurveySummary};
