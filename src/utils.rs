// Utility functions
use chrono::NaiveDate;
use serde_json::Value;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an API date (`YYYY-MM-DD`).
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Renders a raw JSON scalar as CSV cell text. `null` renders empty.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        // Capitalised to match the existing export files.
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON falsiness: `null`, `false`, zero, and empty strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Like [`render_value`] but keeps absence distinguishable.
pub fn render_opt(value: Option<&Value>) -> Option<String> {
    value.map(render_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2024-11-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 11, 5).unwrap());
        assert!(parse_date("05/11/2024").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-01-01 | 2024-01-02").is_err());
    }

    #[test]
    fn renders_scalars() {
        assert_eq!(render_value(&Value::Null), "");
        assert_eq!(render_value(&json!(true)), "True");
        assert_eq!(render_value(&json!(false)), "False");
        assert_eq!(render_value(&json!(18)), "18");
        assert_eq!(render_value(&json!("mail")), "mail");
        assert_eq!(render_value(&json!({"en_US": "x"})), r#"{"en_US":"x"}"#);
        assert_eq!(render_opt(None), None);
    }

    #[test]
    fn truthiness_follows_json_emptiness() {
        for falsy in [Value::Null, json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{}", falsy);
        }
        for truthy in [json!(true), json!(-1), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{}", truthy);
        }
    }
}
