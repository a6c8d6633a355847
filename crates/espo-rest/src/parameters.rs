//! List query parameters and their query-string encoding.
//!
//! # Example
//!
//! ```rust
//! use espocrm_rest::{FilterType, Order, Parameters, Where};
//!
//! let params = Parameters::new()
//!     .max_size(20)
//!     .offset(0)
//!     .order(Order::Ascending)
//!     .where_condition(Where::new(FilterType::Equals, "status", "New"));
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "maxSize=20&offset=0&order=asc\
//!      &where%5B0%5D%5Btype%5D=equals\
//!      &where%5B0%5D%5Battribute%5D=status\
//!      &where%5B0%5D%5Bvalue%5D=New"
//! );
//! ```

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::filter::Where;

/// Sort direction.
///
/// Defaults to descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// Filtering, ordering and pagination options for list-style calls.
///
/// Every field is optional. Unset fields never reach the query string; set
/// fields are always emitted, even when zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameters {
    pub max_size: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<String>,
    pub order: Option<Order>,
    pub select: Option<String>,
    pub return_total: Option<bool>,
    #[serde(rename = "where")]
    pub conditions: Vec<Where>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of records to return.
    pub fn max_size(mut self, max_size: u32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Number of records to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Attribute to sort by.
    pub fn order_by(mut self, attribute: impl Into<String>) -> Self {
        self.order_by = Some(attribute.into());
        self
    }

    /// Sort direction.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Comma-separated list of attributes to return.
    pub fn select(mut self, attributes: impl Into<String>) -> Self {
        self.select = Some(attributes.into());
        self
    }

    /// Attributes to return, joined with commas.
    pub fn select_attributes(self, attributes: &[impl AsRef<str>]) -> Self {
        let joined = attributes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.select(joined)
    }

    /// Ask the server to include the total record count.
    pub fn return_total(mut self, return_total: bool) -> Self {
        self.return_total = Some(return_total);
        self
    }

    /// Append conditions after any already present.
    pub fn where_conditions(mut self, conditions: impl IntoIterator<Item = Where>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    /// Append a single condition.
    pub fn where_condition(mut self, condition: Where) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Returns true if encoding would produce no pairs.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flatten into ordered `(key, value)` pairs.
    ///
    /// Scalars come first in fixed order (`maxSize`, `offset`, `orderBy`,
    /// `order`, `select`, `returnTotal`), then three pairs per condition:
    /// `where[i][type]`, `where[i][attribute]`, `where[i][value]`.
    pub fn encode(&self) -> Vec<(String, String)> {
        let scalars: [(&str, Option<String>); 6] = [
            ("maxSize", self.max_size.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
            ("orderBy", self.order_by.clone()),
            ("order", self.order.map(|o| o.as_str().to_string())),
            ("select", self.select.clone()),
            ("returnTotal", self.return_total.map(|v| v.to_string())),
        ];

        let mut pairs: Vec<(String, String)> = scalars
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
            .collect();

        for (i, condition) in self.conditions.iter().enumerate() {
            pairs.push((format!("where[{i}][type]"), condition.filter_type.to_string()));
            pairs.push((format!("where[{i}][attribute]"), condition.attribute.clone()));
            pairs.push((format!("where[{i}][value]"), condition.value.clone()));
        }

        pairs
    }

    /// Percent-encoded query string (without a leading `?`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.encode())
            .finish()
    }
}

/// Encode optional parameters. `None` yields no pairs.
pub fn encode_query(params: Option<&Parameters>) -> Vec<(String, String)> {
    params.map(Parameters::encode).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterType;
    use std::collections::BTreeSet;

    fn keys(pairs: &[(String, String)]) -> BTreeSet<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_absent_and_empty_encode_to_nothing() {
        assert!(encode_query(None).is_empty());
        assert!(Parameters::new().encode().is_empty());
        assert_eq!(Parameters::new().to_query_string(), "");
        assert!(Parameters::new().is_empty());
    }

    #[test]
    fn test_full_key_mapping() {
        let pairs = Parameters::new()
            .max_size(25)
            .offset(50)
            .order_by("createdAt")
            .order(Order::Ascending)
            .select("id,name")
            .return_total(true)
            .encode();

        assert_eq!(
            pairs,
            vec![
                ("maxSize".to_string(), "25".to_string()),
                ("offset".to_string(), "50".to_string()),
                ("orderBy".to_string(), "createdAt".to_string()),
                ("order".to_string(), "asc".to_string()),
                ("select".to_string(), "id,name".to_string()),
                ("returnTotal".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_key_set_matches_populated_fields() {
        let cases: Vec<(Parameters, Vec<&str>)> = vec![
            (Parameters::new().max_size(1), vec!["maxSize"]),
            (Parameters::new().offset(3).select("id"), vec!["offset", "select"]),
            (
                Parameters::new().order_by("name").return_total(false),
                vec!["orderBy", "returnTotal"],
            ),
            (Parameters::new().order(Order::Descending), vec!["order"]),
        ];

        for (params, expected) in cases {
            let pairs = params.encode();
            assert_eq!(keys(&pairs), expected.into_iter().collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn test_zero_and_false_are_emitted() {
        let pairs = Parameters::new().offset(0).max_size(0).return_total(false).encode();
        assert_eq!(
            pairs,
            vec![
                ("maxSize".to_string(), "0".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("returnTotal".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_rendering() {
        assert!(!keys(&Parameters::new().max_size(5).encode()).contains("order"));
        assert_eq!(
            Parameters::new().order(Order::Ascending).to_query_string(),
            "order=asc"
        );
        assert_eq!(
            Parameters::new().order(Order::Descending).to_query_string(),
            "order=desc"
        );
        assert_eq!(
            Parameters::new().order(Order::default()).to_query_string(),
            "order=desc"
        );
    }

    #[test]
    fn test_conditions_are_indexed_in_order() {
        let conditions = vec![
            Where::new(FilterType::Equals, "lastName", "Smith"),
            Where::new(FilterType::IsTrue, "doNotCall", ""),
            Where::new(FilterType::In, "status", "New,Assigned"),
        ];
        let pairs = Parameters::new().where_conditions(conditions.clone()).encode();

        assert_eq!(pairs.len(), 3 * conditions.len());
        for (i, condition) in conditions.iter().enumerate() {
            let chunk = &pairs[i * 3..i * 3 + 3];
            assert_eq!(chunk[0], (format!("where[{i}][type]"), condition.filter_type.to_string()));
            assert_eq!(chunk[1], (format!("where[{i}][attribute]"), condition.attribute.clone()));
            assert_eq!(chunk[2], (format!("where[{i}][value]"), condition.value.clone()));
        }
    }

    #[test]
    fn test_where_conditions_append() {
        let params = Parameters::new()
            .where_conditions([Where::new(FilterType::Past, "closeDate", "")])
            .where_conditions([Where::new(FilterType::Like, "name", "%acme%")])
            .where_condition(Where::new(FilterType::NotEquals, "stage", "Closed Lost"));

        let pairs = params.encode();
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs[0], ("where[0][type]".to_string(), "past".to_string()));
        assert_eq!(pairs[3], ("where[1][type]".to_string(), "like".to_string()));
        assert_eq!(pairs[8], ("where[2][value]".to_string(), "Closed Lost".to_string()));
    }

    #[test]
    fn test_conditions_follow_scalars() {
        let pairs = Parameters::new()
            .where_condition(Where::new(FilterType::Equals, "a", "b"))
            .max_size(10)
            .encode();
        assert_eq!(pairs[0].0, "maxSize");
        assert_eq!(pairs[1].0, "where[0][type]");
    }

    #[test]
    fn test_query_string_percent_encodes() {
        let query = Parameters::new()
            .where_condition(Where::new(FilterType::Equals, "name", "A & B"))
            .to_query_string();
        assert_eq!(
            query,
            "where%5B0%5D%5Btype%5D=equals&where%5B0%5D%5Battribute%5D=name&where%5B0%5D%5Bvalue%5D=A+%26+B"
        );
    }

    #[test]
    fn test_select_attributes_joins_with_commas() {
        let params = Parameters::new().select_attributes(&["id", "name", "emailAddress"]);
        assert_eq!(params.select.as_deref(), Some("id,name,emailAddress"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let params: Parameters = serde_json::from_value(serde_json::json!({
            "maxSize": 10,
            "order": "asc",
            "where": [
                {"type": "greaterThan", "attribute": "amount", "value": "1000"}
            ]
        }))
        .unwrap();

        assert_eq!(params.max_size, Some(10));
        assert_eq!(params.order, Some(Order::Ascending));
        assert_eq!(params.offset, None);
        assert_eq!(
            params.conditions,
            vec![Where::new(FilterType::GreaterThan, "amount", "1000")]
        );
    }
}
