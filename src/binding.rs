//! The argument adapter between a scripting host and a [`Solver`].
//!
//! A host call arrives as a list of [`Value`]s. [`JSolve::call`] checks that there are
//! exactly two of them, a string and an integer that fits into a C `int`, and then hands
//! them to the solver without a solution list. Whatever the solver returns is passed
//! back unchanged. If the arguments don't fit, the solver is not invoked at all.
use crate::errors::ArgumentError;
use crate::solver::{FastSolver, Solver};

/// Number of arguments a call takes
pub const ARITY: usize = 2;

/// One call-time argument, as seen from the host
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text
    Str(String),
    /// Integer. Wider than any host integer the adapter accepts so that overflow can be reported.
    Int(i128),
    /// Floating point number
    Float(f64),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// The host's null value
    None,
    /// Anything else, identified by its type name
    Other(String),
}

impl Value {
    /// Host-facing name of the value's type, used in error messages
    pub fn type_name(&self) -> &str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
            Value::None => "NoneType",
            Value::Other(name) => name,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

/// The `JSolve` entry point, generic over the solver it forwards to.
#[derive(Clone, Debug, Default)]
pub struct JSolve<S = FastSolver> {
    solver: S,
}

impl<S: Solver> JSolve<S> {
    /// Create a binding that forwards to `solver`
    pub fn new(solver: S) -> Self {
        JSolve { solver }
    }

    /// Access the underlying solver
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Validate `args` as `(board: str, max_solutions: int)` and count the solutions.
    pub fn call(&self, args: &[Value]) -> Result<i32, ArgumentError> {
        let (board, max_solutions) = parse_args(args)?;
        Ok(self.count(board, max_solutions))
    }

    /// Count the solutions of `board`, up to `max_solutions`. The solution list is never requested.
    pub fn count(&self, board: &str, max_solutions: i32) -> i32 {
        let result = self.solver.solve(board, None, max_solutions);
        tracing::trace!(board, max_solutions, result, "JSolve");
        result
    }
}

/// Count the solutions of `board` with the default solver, up to `max_solutions`.
pub fn jsolve(board: &str, max_solutions: i32) -> i32 {
    JSolve::<FastSolver>::default().count(board, max_solutions)
}

fn parse_args(args: &[Value]) -> Result<(&str, i32), ArgumentError> {
    let (board, max_solutions) = match args {
        [board, max_solutions] => (board, max_solutions),
        _ => {
            return Err(ArgumentError::Arity {
                expected: ARITY,
                given: args.len(),
            })
        }
    };

    let board = match board {
        Value::Str(board) if board.contains('\0') => {
            return Err(ArgumentError::EmbeddedNul { position: 1 })
        }
        Value::Str(board) => board.as_str(),
        other => return Err(type_error(1, "str", other)),
    };

    let max_solutions = match *max_solutions {
        Value::Int(value) => {
            i32::try_from(value).map_err(|_| ArgumentError::Overflow { position: 2, value })?
        }
        ref other => return Err(type_error(2, "int", other)),
    };

    Ok((board, max_solutions))
}

fn type_error(position: usize, expected: &'static str, found: &Value) -> ArgumentError {
    ArgumentError::Type {
        position,
        expected,
        found: found.type_name().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    struct Call {
        board: String,
        wanted_list: bool,
        max_solutions: i32,
    }

    /// Returns a fixed count and remembers what it was asked.
    #[derive(Default)]
    struct Recorder {
        result: i32,
        calls: RefCell<Vec<Call>>,
    }

    impl Recorder {
        fn returning(result: i32) -> Self {
            Recorder {
                result,
                ..Recorder::default()
            }
        }
    }

    impl Solver for Recorder {
        fn solve(
            &self,
            board: &str,
            solutions: Option<&mut Vec<String>>,
            max_solutions: i32,
        ) -> i32 {
            self.calls.borrow_mut().push(Call {
                board: board.to_owned(),
                wanted_list: solutions.is_some(),
                max_solutions,
            });
            self.result
        }
    }

    #[test]
    fn passes_result_through() {
        for &result in &[0, 1, 2, 17, -1, i32::MAX] {
            let binding = JSolve::new(Recorder::returning(result));
            assert_eq!(binding.call(&[Value::from("board"), Value::Int(2)]), Ok(result));
        }
    }

    #[test]
    fn forwards_arguments_without_solution_list() {
        let binding = JSolve::new(Recorder::returning(1));
        binding.call(&[Value::from("1.3"), Value::Int(7)]).unwrap();
        binding.count("456", -2);
        assert_eq!(
            *binding.solver().calls.borrow(),
            vec![
                Call {
                    board: "1.3".into(),
                    wanted_list: false,
                    max_solutions: 7,
                },
                Call {
                    board: "456".into(),
                    wanted_list: false,
                    max_solutions: -2,
                },
            ]
        );
    }

    #[test]
    fn wrong_arity() {
        let binding = JSolve::new(Recorder::returning(1));
        for given in 0..5 {
            if given == 2 {
                continue;
            }
            let values = vec![Value::from("board"); given];
            assert_eq!(
                binding.call(&values),
                Err(ArgumentError::Arity { expected: 2, given })
            );
        }
        assert!(binding.solver().calls.borrow().is_empty());
    }

    #[test]
    fn board_must_be_a_string() {
        let binding = JSolve::new(Recorder::returning(1));
        let cases = vec![
            (Value::Int(0), "int"),
            (Value::Float(1.5), "float"),
            (Value::Bytes(b"...".to_vec()), "bytes"),
            (Value::None, "NoneType"),
            (Value::Other("list".into()), "list"),
        ];
        for (board, found) in cases {
            assert_eq!(
                binding.call(&[board, Value::Int(2)]),
                Err(ArgumentError::Type {
                    position: 1,
                    expected: "str",
                    found: found.into(),
                })
            );
        }
        assert!(binding.solver().calls.borrow().is_empty());
    }

    #[test]
    fn limit_must_be_an_int() {
        let binding = JSolve::new(Recorder::returning(1));
        for limit in vec![Value::Float(2.0), Value::from("2"), Value::None] {
            let found = limit.type_name().to_owned();
            assert_eq!(
                binding.call(&[Value::from("board"), limit]),
                Err(ArgumentError::Type {
                    position: 2,
                    expected: "int",
                    found,
                })
            );
        }
        assert!(binding.solver().calls.borrow().is_empty());
    }

    #[test]
    fn first_bad_argument_is_reported() {
        let binding = JSolve::new(Recorder::returning(1));
        let err = binding.call(&[Value::Float(0.0), Value::None]).unwrap_err();
        assert!(matches!(err, ArgumentError::Type { position: 1, .. }));
    }

    #[test]
    fn limit_must_fit_into_c_int() {
        let binding = JSolve::new(Recorder::returning(1));
        let too_big = i128::from(i32::MAX) + 1;
        let too_small = i128::from(i32::MIN) - 1;
        for &value in &[too_big, too_small, i128::MAX] {
            assert_eq!(
                binding.call(&[Value::from("board"), Value::Int(value)]),
                Err(ArgumentError::Overflow { position: 2, value })
            );
        }
        assert!(binding.solver().calls.borrow().is_empty());

        assert_eq!(binding.call(&[Value::from("b"), Value::Int(i32::MIN.into())]), Ok(1));
        assert_eq!(binding.call(&[Value::from("b"), Value::Int(i32::MAX.into())]), Ok(1));
    }

    #[test]
    fn nul_in_board_is_rejected() {
        let binding = JSolve::new(Recorder::returning(1));
        assert_eq!(
            binding.call(&[Value::from("12\03"), Value::Int(2)]),
            Err(ArgumentError::EmbeddedNul { position: 1 })
        );
        assert!(binding.solver().calls.borrow().is_empty());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ArgumentError::Arity { expected: 2, given: 1 }.to_string(),
            "takes exactly 2 arguments (1 given)"
        );
        assert_eq!(
            ArgumentError::Overflow { position: 2, value: 1 << 40 }.to_string(),
            "argument 2: signed integer is greater than maximum"
        );
        assert_eq!(
            ArgumentError::Overflow { position: 2, value: i128::MIN }.to_string(),
            "argument 2: signed integer is less than minimum"
        );
        assert_eq!(
            type_error(1, "str", &Value::Int(0)).to_string(),
            "argument 1 must be str, not int"
        );
    }

    #[test]
    fn default_solver() {
        let board = format!("{}{}", "123456789", ".".repeat(72));
        assert_eq!(jsolve(&board, 2), 2);
        assert_eq!(jsolve(&board, 0), 0);
    }
}
