//! Field access over loosely shaped server records.
//!
//! The API mixes snake_case and camelCase keys between endpoints and
//! versions. `Record` reads a field from the first key that carries a
//! usable value; empty strings and nulls count as absent.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Record<'a>(&'a Value);

impl<'a> Record<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// First non-empty string (numbers are rendered) among `keys`.
    pub(crate) fn string(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Like [`Record::string`], with an empty string when nothing matches.
    pub(crate) fn string_or_default(&self, keys: &[&str]) -> String {
        self.string(keys).unwrap_or_default()
    }

    /// First non-zero unsigned integer among `keys`.
    pub(crate) fn u64(&self, keys: &[&str]) -> Option<u64> {
        keys.iter().find_map(|key| match self.0.get(key)? {
            Value::Number(n) => n.as_u64().filter(|n| *n != 0),
            Value::String(s) => s.parse().ok().filter(|n| *n != 0),
            _ => None,
        })
    }
}

/// Current time in the ISO 8601 form the API uses.
pub(crate) fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_prefers_first_non_empty_key() {
        let value = json!({"tip_tx_hash": "", "transactionHash": "0xabc", "amount": 12.5});
        let record = Record::new(&value);

        assert_eq!(
            record.string(&["tip_tx_hash", "transactionHash"]),
            Some("0xabc".to_string())
        );
        assert_eq!(record.string(&["amount"]), Some("12.5".to_string()));
        assert_eq!(record.string(&["missing"]), None);
        assert_eq!(record.string_or_default(&["missing"]), "");
    }

    #[test]
    fn test_u64_treats_zero_as_absent() {
        let value = json!({"block_number": 0, "blockNumber": "812"});
        let record = Record::new(&value);

        assert_eq!(record.u64(&["block_number", "blockNumber"]), Some(812));
    }

    #[test]
    fn test_non_object_has_no_fields() {
        let value = json!([1, 2, 3]);

        assert_eq!(Record::new(&value).string(&["id"]), None);
    }
}
