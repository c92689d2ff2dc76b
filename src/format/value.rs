use serde_json::Value;

/// Truthiness as used by the report rules: `null`, `false`, `0`, `NaN` and
/// the empty string are falsy; arrays and objects are always truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ids are printable when numeric (including zero) or otherwise truthy.
#[must_use]
pub fn is_valid_id(value: &Value) -> bool {
    value.is_number() || is_truthy(value)
}

#[must_use]
pub fn is_non_empty_array(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty())
}

#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Renders a number the way a JavaScript template literal would: integral
/// values without a fractional part, everything else in shortest form.
#[must_use]
pub fn display_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if number == 0.0 {
        return "0".to_owned();
    }
    format!("{number}")
}

/// String form of a scalar tree value.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => integer.to_string(),
            None => number.as_f64().map(display_number).unwrap_or_default(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn truthiness_matches_report_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("main")));
    }

    #[test]
    fn zero_ids_are_valid_but_empty_names_are_not() {
        assert!(is_valid_id(&json!(0)));
        assert!(is_valid_id(&json!("vendors")));
        assert!(!is_valid_id(&json!("")));
        assert!(!is_valid_id(&json!(false)));
        assert!(!is_valid_id(&json!(null)));
    }

    #[test]
    fn numbers_print_without_trailing_fraction() {
        assert_eq!(display_value(&json!(12.0)), "12");
        assert_eq!(display_value(&json!(12.5)), "12.5");
        assert_eq!(display_value(&json!(7)), "7");
        assert_eq!(display_value(&json!(["a", 1])), "a,1");
    }
}
