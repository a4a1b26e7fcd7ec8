use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// The `{"data": [...]}` envelope every search endpoint returns.
///
/// A body without `data` (or with `data: null`) decodes to an empty list.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_missing_data_is_empty() {
        let list: List<Value> = serde_json::from_str(r#"{"metadata": {}}"#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_null_data_is_empty() {
        let list: List<Value> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let list: List<Value> = serde_json::from_str(r#"{"data": [1, 2, 3]}"#).unwrap();
        let values: Vec<i64> = list.iter().filter_map(|v| v.as_i64()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_data_must_be_array() {
        let result: Result<List<Value>, _> = serde_json::from_str(r#"{"data": "nope"}"#);
        assert!(result.is_err());
    }
}
