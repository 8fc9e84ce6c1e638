use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Value of a single parsed resume field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResumeFieldValue {
    Text(String),
    List(Vec<String>),
    /// Anything else the service may send (numbers, mixed arrays, ...)
    Other(Value),
}

impl ResumeFieldValue {
    /// Text shown in the value column of the resume table
    pub fn display(&self) -> String {
        match self {
            ResumeFieldValue::Text(s) => s.clone(),
            ResumeFieldValue::List(items) => items.join(", "),
            ResumeFieldValue::Other(value) => display_json(value),
        }
    }
}

fn display_json(value: &Value) -> String {
    match value {
        // Browsers render null and booleans as nothing
        Value::Null | Value::Bool(_) => String::new(),
        Value::Array(items) => join_elements(items, ", "),
        Value::Object(_) => value.to_string(),
        other => join_element(other),
    }
}

/// Text of one array element: null is empty, nested arrays are comma-joined
fn join_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_elements(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn join_elements(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(join_element)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Parsed resume fields in the order the service sent them.
///
/// The field set is open: any key is accepted and rendered generically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeData {
    fields: Vec<(String, ResumeFieldValue)>,
}

impl ResumeData {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResumeFieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&ResumeFieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

struct ResumeDataVisitor;

impl<'de> Visitor<'de> for ResumeDataVisitor {
    type Value = ResumeData;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of resume field names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields: Vec<(String, ResumeFieldValue)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, ResumeFieldValue>()? {
            // Duplicate keys: last one wins, first position kept
            match fields.iter_mut().find(|entry| entry.0 == key) {
                Some(slot) => slot.1 = value,
                None => fields.push((key, value)),
            }
        }
        Ok(ResumeData { fields })
    }
}

impl<'de> Deserialize<'de> for ResumeData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResumeDataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_server_key_order() {
        let data: ResumeData = serde_json::from_str(
            r#"{"name": "Jane", "skills": ["Rust", "SQL"], "experience": "5 years", "achievements": []}"#,
        )
        .unwrap();
        let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "skills", "experience", "achievements"]);
    }

    #[test]
    fn test_display_values() {
        let data: ResumeData =
            serde_json::from_str(r#"{"a": "x", "tags": ["p", "q"], "empty": []}"#).unwrap();
        assert_eq!(data.field_count(), 3);
        assert_eq!(data.get("a").unwrap().display(), "x");
        assert_eq!(data.get("tags").unwrap().display(), "p, q");
        assert_eq!(data.get("empty").unwrap().display(), "");
    }

    #[test]
    fn test_other_values() {
        let data: ResumeData = serde_json::from_str(
            r#"{"years": 5, "mixed": ["a", 1], "flag": true, "missing": null}"#,
        )
        .unwrap();
        assert_eq!(data.get("years").unwrap().display(), "5");
        assert_eq!(data.get("mixed").unwrap().display(), "a, 1");
        assert_eq!(data.get("flag").unwrap().display(), "");
        assert_eq!(data.get("missing").unwrap().display(), "");
    }

    #[test]
    fn test_array_elements_join_like_list_text() {
        let data: ResumeData = serde_json::from_str(
            r#"{"m": ["React", true], "n": [["a", "b"], "c"], "o": [null, 2.5, {"k": 1}]}"#,
        )
        .unwrap();
        assert_eq!(data.get("m").unwrap().display(), "React, true");
        assert_eq!(data.get("n").unwrap().display(), "a,b, c");
        assert_eq!(data.get("o").unwrap().display(), ", 2.5, [object Object]");
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let data: ResumeData =
            serde_json::from_str(r#"{"name": "A", "skills": ["x"], "name": "B"}"#).unwrap();
        assert_eq!(data.field_count(), 2);
        let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "skills"]);
        assert_eq!(data.get("name").unwrap().display(), "B");
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<ResumeData>(r#"["name"]"#).is_err());
    }
}
