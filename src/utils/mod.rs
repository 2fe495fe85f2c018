//! Project-specific utilities live here.

use serde_json::Value;

/// Reports whether a JSON value counts as "present" for partial updates.
///
/// `null`, `false`, numeric zero, and the empty string are treated as
/// absent; every other value, including empty arrays and objects, is
/// present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_false_zero_and_empty_string_are_falsy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn non_empty_values_are_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1999)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("Dune")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
