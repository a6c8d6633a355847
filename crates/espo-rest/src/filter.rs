//! Filter conditions for list queries.
//!
//! The server owns the meaning of each operator. This module only names them
//! and carries `(type, attribute, value)` triples to the encoder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Operator of a `where` condition.
///
/// Serialized with the server's camelCase names (`equals`, `lastXDays`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
    LinkedWith,
    NotLinkedWith,
    IsLinked,
    IsNotLinked,
    In,
    NotIn,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    Like,
    NotLike,
    Or,
    AndToday,
    Past,
    Future,
    LastSevenDays,
    CurrentMonth,
    LastMonth,
    NextMonth,
    CurrentQuarter,
    LastQuarter,
    CurrentYear,
    LastYear,
    CurrentFiscalYear,
    LastFiscalYear,
    CurrentFiscalQuarter,
    LastFiscalQuarter,
    LastXDays,
    NextXDays,
    OlderThanXDays,
    AfterXDays,
    Between,
    ArrayAnyOf,
    ArrayNoneOf,
    ArrayAllOf,
    ArrayIsEmpty,
    ArrayIsNotEmpty,
}

impl FilterType {
    /// Every operator, in declaration order.
    pub const ALL: [FilterType; 48] = [
        FilterType::Equals,
        FilterType::NotEquals,
        FilterType::GreaterThan,
        FilterType::LessThan,
        FilterType::GreaterThanOrEquals,
        FilterType::LessThanOrEquals,
        FilterType::IsNull,
        FilterType::IsNotNull,
        FilterType::IsTrue,
        FilterType::IsFalse,
        FilterType::LinkedWith,
        FilterType::NotLinkedWith,
        FilterType::IsLinked,
        FilterType::IsNotLinked,
        FilterType::In,
        FilterType::NotIn,
        FilterType::Contains,
        FilterType::NotContains,
        FilterType::StartsWith,
        FilterType::EndsWith,
        FilterType::Like,
        FilterType::NotLike,
        FilterType::Or,
        FilterType::AndToday,
        FilterType::Past,
        FilterType::Future,
        FilterType::LastSevenDays,
        FilterType::CurrentMonth,
        FilterType::LastMonth,
        FilterType::NextMonth,
        FilterType::CurrentQuarter,
        FilterType::LastQuarter,
        FilterType::CurrentYear,
        FilterType::LastYear,
        FilterType::CurrentFiscalYear,
        FilterType::LastFiscalYear,
        FilterType::CurrentFiscalQuarter,
        FilterType::LastFiscalQuarter,
        FilterType::LastXDays,
        FilterType::NextXDays,
        FilterType::OlderThanXDays,
        FilterType::AfterXDays,
        FilterType::Between,
        FilterType::ArrayAnyOf,
        FilterType::ArrayNoneOf,
        FilterType::ArrayAllOf,
        FilterType::ArrayIsEmpty,
        FilterType::ArrayIsNotEmpty,
    ];

    /// The operator name as the server expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Equals => "equals",
            FilterType::NotEquals => "notEquals",
            FilterType::GreaterThan => "greaterThan",
            FilterType::LessThan => "lessThan",
            FilterType::GreaterThanOrEquals => "greaterThanOrEquals",
            FilterType::LessThanOrEquals => "lessThanOrEquals",
            FilterType::IsNull => "isNull",
            FilterType::IsNotNull => "isNotNull",
            FilterType::IsTrue => "isTrue",
            FilterType::IsFalse => "isFalse",
            FilterType::LinkedWith => "linkedWith",
            FilterType::NotLinkedWith => "notLinkedWith",
            FilterType::IsLinked => "isLinked",
            FilterType::IsNotLinked => "isNotLinked",
            FilterType::In => "in",
            FilterType::NotIn => "notIn",
            FilterType::Contains => "contains",
            FilterType::NotContains => "notContains",
            FilterType::StartsWith => "startsWith",
            FilterType::EndsWith => "endsWith",
            FilterType::Like => "like",
            FilterType::NotLike => "notLike",
            FilterType::Or => "or",
            FilterType::AndToday => "andToday",
            FilterType::Past => "past",
            FilterType::Future => "future",
            FilterType::LastSevenDays => "lastSevenDays",
            FilterType::CurrentMonth => "currentMonth",
            FilterType::LastMonth => "lastMonth",
            FilterType::NextMonth => "nextMonth",
            FilterType::CurrentQuarter => "currentQuarter",
            FilterType::LastQuarter => "lastQuarter",
            FilterType::CurrentYear => "currentYear",
            FilterType::LastYear => "lastYear",
            FilterType::CurrentFiscalYear => "currentFiscalYear",
            FilterType::LastFiscalYear => "lastFiscalYear",
            FilterType::CurrentFiscalQuarter => "currentFiscalQuarter",
            FilterType::LastFiscalQuarter => "lastFiscalQuarter",
            FilterType::LastXDays => "lastXDays",
            FilterType::NextXDays => "nextXDays",
            FilterType::OlderThanXDays => "olderThanXDays",
            FilterType::AfterXDays => "afterXDays",
            FilterType::Between => "between",
            FilterType::ArrayAnyOf => "arrayAnyOf",
            FilterType::ArrayNoneOf => "arrayNoneOf",
            FilterType::ArrayAllOf => "arrayAllOf",
            FilterType::ArrayIsEmpty => "arrayIsEmpty",
            FilterType::ArrayIsNotEmpty => "arrayIsNotEmpty",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterType::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::InvalidInput(format!("unknown filter type: {s}"))))
    }
}

/// One `where` condition: operator, attribute, value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Where {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub attribute: String,
    pub value: String,
}

impl Where {
    pub fn new(
        filter_type: FilterType,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            filter_type,
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
