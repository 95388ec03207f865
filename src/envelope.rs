//! List Response Normalizer
//!
//! The backend answers list requests either with a bare JSON array or with
//! an `{ "items": [...] }` envelope. Both are accepted; anything else reads
//! as an empty list.

use serde_json::Value;

/// Shape of a list response body
#[derive(Debug, Clone, PartialEq)]
pub enum ListEnvelope {
    /// Body is the array itself
    Sequence(Vec<Value>),
    /// Array is wrapped under `items`
    Enveloped(Vec<Value>),
    /// Neither shape
    Unrecognized,
}

impl ListEnvelope {
    /// Classify a parsed body. A bare array wins over an `items` property.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(records) => ListEnvelope::Sequence(records),
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(records)) => ListEnvelope::Enveloped(records),
                _ => ListEnvelope::Unrecognized,
            },
            _ => ListEnvelope::Unrecognized,
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            ListEnvelope::Sequence(records) | ListEnvelope::Enveloped(records) => records,
            ListEnvelope::Unrecognized => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(body: Value) -> Vec<Value> {
        ListEnvelope::classify(body).into_records()
    }

    #[test]
    fn test_bare_and_enveloped_yield_same_records() {
        let records = json!([{ "_id": "a" }, { "_id": "b" }, { "_id": "c" }]);
        let bare = normalize(records.clone());
        let wrapped = normalize(json!({ "items": records, "total": 3 }));
        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 3);
        assert_eq!(bare[0]["_id"], "a");
        assert_eq!(bare[2]["_id"], "c");
    }

    #[test]
    fn test_classify_tags() {
        assert!(matches!(ListEnvelope::classify(json!([])), ListEnvelope::Sequence(_)));
        assert!(matches!(
            ListEnvelope::classify(json!({ "items": [] })),
            ListEnvelope::Enveloped(_)
        ));
        assert_eq!(ListEnvelope::classify(json!({ "data": [] })), ListEnvelope::Unrecognized);
    }

    #[test]
    fn test_malformed_bodies_are_empty() {
        for body in [
            json!(null),
            json!("oops"),
            json!(42),
            json!({}),
            json!({ "items": null }),
            json!({ "items": { "_id": "a" } }),
            json!({ "error": "boom" }),
        ] {
            assert!(normalize(body).is_empty());
        }
    }
}
