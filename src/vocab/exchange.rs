//! # Import / Export Format
//!
//! Vocabulary lists are exchanged as a pretty-printed JSON array (two-space indent):
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "word": "猫",
//!     "meaning": "cat",
//!     "description": "..."
//!   }
//! ]
//! ```
//!
//! Importing checks the shape before anything touches the store: the document must
//! be an array and every element an object carrying at least `id`, `word` and
//! `meaning`. Ids are taken as they are, without renumbering or deduplication.

use crate::error::{ImportError, Result};
use crate::model::Record;
use serde_json::Value;

const REQUIRED_KEYS: [&str; 3] = ["id", "word", "meaning"];

/// Serialize `records` in store order.
pub fn export(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse and validate an exported document.
pub fn import(text: &str) -> std::result::Result<Vec<Record>, ImportError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ImportError::MalformedDocument(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ImportError::InvalidShape(format!(
                "top level is {}, not a list",
                kind_of(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode_entry(i, item))
        .collect()
}

fn decode_entry(position: usize, item: Value) -> std::result::Result<Record, ImportError> {
    let Some(object) = item.as_object() else {
        return Err(ImportError::InvalidShape(format!(
            "entry {} is {}, not an object",
            position + 1,
            kind_of(&item)
        )));
    };

    if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !object.contains_key(**k)) {
        return Err(ImportError::InvalidShape(format!(
            "entry {} has no \"{}\"",
            position + 1,
            missing
        )));
    }

    serde_json::from_value(item)
        .map_err(|e| ImportError::InvalidShape(format!("entry {}: {}", position + 1, e)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_records, RecordId};

    #[test]
    fn export_is_pretty_with_two_space_indent() {
        let text = export(&[Record::new(1, "猫", "cat", "")]).unwrap();
        let expected = "[\n  {\n    \"id\": 1,\n    \"word\": \"猫\",\n    \"meaning\": \"cat\",\n    \"description\": \"\"\n  }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn seed_set_survives_export_then_import() {
        let seed = seed_records();
        let text = export(&seed).unwrap();
        assert_eq!(import(&text).unwrap(), seed);
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(import("[]").unwrap(), Vec::new());
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            import("not json"),
            Err(ImportError::MalformedDocument(_))
        ));
    }

    #[test]
    fn object_at_top_level_is_invalid_shape() {
        assert!(matches!(import("{}"), Err(ImportError::InvalidShape(_))));
    }

    #[test]
    fn missing_word_is_invalid_shape() {
        let err = import(r#"[{"id":5,"meaning":"x"}]"#).unwrap_err();
        assert!(matches!(&err, ImportError::InvalidShape(msg) if msg.contains("word")));
    }

    #[test]
    fn non_object_entry_is_invalid_shape() {
        assert!(matches!(
            import(r#"[{"id":1,"word":"a","meaning":"b"}, 3]"#),
            Err(ImportError::InvalidShape(_))
        ));
    }

    #[test]
    fn mistyped_word_is_invalid_shape() {
        assert!(matches!(
            import(r#"[{"id":1,"word":5,"meaning":"b"}]"#),
            Err(ImportError::InvalidShape(_))
        ));
    }

    #[test]
    fn ids_are_trusted_as_is() {
        let records =
            import(r#"[{"id":"a","word":"x","meaning":"y"},{"id":"a","word":"z","meaning":"w"}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, records[1].id);
        assert_eq!(records[0].id, RecordId::Other(Value::String("a".into())));
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn integral_float_ids_export_as_integers() {
        let records = import(r#"[{"id":5.0,"word":"x","meaning":"y"}]"#).unwrap();
        assert_eq!(records[0].id, RecordId::from(5));

        let text = export(&records).unwrap();
        assert!(text.contains("\"id\": 5,"));
        assert!(!text.contains("5.0"));
    }

    #[test]
    fn unknown_keys_are_kept_on_export() {
        let records = import(r#"[{"id":1,"word":"x","meaning":"y","tags":["n5"]}]"#).unwrap();
        let text = export(&records).unwrap();
        assert!(text.contains("\"tags\""));
        assert_eq!(import(&text).unwrap(), records);
    }
}
