//! The `JSolve` Python module.
//!
//! ```python
//! from JSolve import JSolve
//! JSolve("." * 81, 2)  # 2
//! ```
use crate::binding::{JSolve, Value, ARITY};
use crate::errors::ArgumentError;
use pyo3::exceptions::{PyOverflowError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyFloat, PyInt, PyString, PyTuple};

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> PyErr {
        let msg = format!("JSolve() {}", err);
        match err {
            ArgumentError::Arity { .. } | ArgumentError::Type { .. } => PyTypeError::new_err(msg),
            ArgumentError::Overflow { .. } => PyOverflowError::new_err(msg),
            ArgumentError::EmbeddedNul { .. } => PyValueError::new_err(msg),
        }
    }
}

// Never fails for ints, errors are reported in argument order by the binding.
// bool is a subclass of int and accepted as one, like anything with `__index__`.
fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::Str(s.to_cow()?.into_owned()));
    }
    if obj.is_instance_of::<PyInt>() {
        return int_value(obj);
    }
    if obj.is_instance_of::<PyFloat>() {
        return Ok(Value::Float(obj.extract()?));
    }
    if let Ok(bytes) = obj.downcast::<PyBytes>() {
        return Ok(Value::Bytes(bytes.as_bytes().to_vec()));
    }
    if obj.is_none() {
        return Ok(Value::None);
    }
    if obj.hasattr("__index__")? {
        let index = obj.py().import("operator")?.getattr("index")?.call1((obj,));
        if let Ok(index) = index {
            return int_value(&index);
        }
    }
    Ok(Value::Other(obj.get_type().name()?.to_string()))
}

// ints beyond 128 bits saturate, they are out of `i32` range either way
fn int_value(int: &Bound<'_, PyAny>) -> PyResult<Value> {
    match int.extract::<i128>() {
        Ok(value) => Ok(Value::Int(value)),
        Err(err) if err.is_instance_of::<PyOverflowError>(int.py()) => {
            let value = if int.lt(0)? { i128::MIN } else { i128::MAX };
            Ok(Value::Int(value))
        }
        Err(err) => Err(err),
    }
}

/// JSolve(board, max_solutions) -> int
///
/// Count the solutions of `board`, stopping after `max_solutions`.
#[pyfunction]
#[pyo3(name = "JSolve", signature = (*args))]
fn jsolve(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<i32> {
    if args.len() != ARITY {
        let given = args.len();
        return Err(ArgumentError::Arity { expected: ARITY, given }.into());
    }
    let args = args.iter().map(|arg| to_value(&arg)).collect::<PyResult<Vec<_>>>()?;
    let binding: JSolve = JSolve::default();
    let count = py.allow_threads(|| binding.call(&args))?;
    Ok(count)
}

/// Add the `JSolve` function to `module`
pub fn register(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(jsolve, module)?)
}

#[pymodule]
#[pyo3(name = "JSolve")]
fn jsolve_module(module: &Bound<'_, PyModule>) -> PyResult<()> {
    register(module)
}
