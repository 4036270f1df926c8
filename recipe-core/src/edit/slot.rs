//! Slot keys and slot values of the edit buffers

use shared::models::Ingredient;
use std::fmt;

/// Textual slot key with its numeric sort position.
///
/// Keys are decimal integers stored as text. A key that does not parse
/// sorts as index `0`. Existing edit sessions depend on that ordering, so
/// it is kept as is. Keys with the same index order by their text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    index: i64,
    raw: String,
}

impl SlotKey {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            index: raw.parse().unwrap_or(0),
            raw,
        }
    }

    pub fn from_index(index: i64) -> Self {
        Self {
            index,
            raw: index.to_string(),
        }
    }

    /// Numeric position used for ordering
    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for SlotKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SlotKey {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Value stored in an edit slot
pub trait SlotValue: Clone {
    /// Value of a freshly added row
    fn placeholder() -> Self;

    /// Blank rows are dropped by compaction
    fn is_blank(&self) -> bool;
}

impl SlotValue for Ingredient {
    fn placeholder() -> Self {
        Ingredient::placeholder()
    }

    fn is_blank(&self) -> bool {
        Ingredient::is_blank(self)
    }
}

impl SlotValue for String {
    fn placeholder() -> Self {
        String::new()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_order_numerically() {
        let mut keys: Vec<SlotKey> = ["10", "2", "0", "1"].into_iter().map(SlotKey::from).collect();
        keys.sort();
        let order: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["0", "1", "2", "10"]);
    }

    #[test]
    fn test_malformed_key_sorts_as_zero() {
        let key = SlotKey::parse("abc");
        assert_eq!(key.index(), 0);
        assert_eq!(key.as_str(), "abc");

        let mut keys = vec![SlotKey::parse("1"), SlotKey::parse("abc"), SlotKey::parse("0")];
        keys.sort();
        let order: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["0", "abc", "1"]);
    }

    #[test]
    fn test_signed_keys() {
        assert_eq!(SlotKey::parse("-1").index(), -1);
        assert_eq!(SlotKey::parse("+3").index(), 3);
        assert_eq!(SlotKey::parse(" 3").index(), 0);
        assert!(SlotKey::parse("-1") < SlotKey::parse("0"));
    }

    #[test]
    fn test_from_index() {
        let key = SlotKey::from_index(7);
        assert_eq!(key, SlotKey::parse("7"));
        assert_eq!(key.to_string(), "7");
    }

    #[test]
    fn test_blank_values() {
        assert!(<String as SlotValue>::placeholder().is_blank());
        assert!(!"Oprati pirinac".to_string().is_blank());
        assert!(<Ingredient as SlotValue>::placeholder().is_blank());
        assert!(!SlotValue::is_blank(&Ingredient::new(1.0, "kg", "brasna")));
    }
}
