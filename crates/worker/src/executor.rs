//! Task execution, dispatched by task type.

use serde_json::{json, Value};

/// Execute a claimed task's payload, returning the result value.
///
/// An unknown task type is an execution failure, not a panic; the runner
/// records the message on the task row.
pub fn execute(task_type: &str, parameters: &Value) -> Result<Value, String> {
    match task_type {
        "add" => add(parameters),
        other => Err(format!("Unknown task type: {other}")),
    }
}

/// Integer addition: `{"x": a, "y": b}` -> `{"sum": a + b}`.
fn add(parameters: &Value) -> Result<Value, String> {
    let x = int_param(parameters, "x")?;
    let y = int_param(parameters, "y")?;

    let sum = x
        .checked_add(y)
        .ok_or_else(|| "Addition overflowed".to_string())?;

    Ok(json!({ "sum": sum }))
}

/// Extract a required integer parameter by name.
fn int_param(parameters: &Value, name: &str) -> Result<i64, String> {
    parameters
        .get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| format!("Parameter '{name}' must be an integer"))
}
