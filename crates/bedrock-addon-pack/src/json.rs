//! JSON helpers shared by every document writer.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::{AddonError, Result};

/// Render `value` pretty-printed with 4-space indentation.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Serialize `value` and overwrite the file at `path` with it.
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_pretty_string(value).map_err(|source| AddonError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|e| AddonError::io(path, e))
}

/// A JSON number that drops the fractional part when there is none,
/// so `5.0` is written as `5` and `1.5` stays `1.5`.
pub fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_uses_four_spaces() {
        let text = to_pretty_string(&json!({"a": [1]})).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn whole_numbers_are_integers() {
        assert_eq!(number(5.0), json!(5));
        assert_eq!(number(1.5), json!(1.5));
        assert_eq!(number(-2.0), json!(-2));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let text = to_pretty_string(&json!({"zeta": 1, "alpha": 2})).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }
}
