//! Where filters as they appear in metric and saved-query definitions.
//!
//! Authors may write a filter as a bare string, as an object, or as a list
//! of either. All forms deserialize to the same values; serialization always
//! writes the object form.

use serde::{Deserialize, Serialize};

use super::FilterCallParameterSets;
use crate::filter::{self, FilterExpressionParameterSets, ParseWhereFilterError};

/// A single where-filter template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawWhereFilter")]
pub struct WhereFilter {
    pub where_sql_template: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWhereFilter {
    Template(String),
    Object { where_sql_template: String },
}

impl From<RawWhereFilter> for WhereFilter {
    fn from(raw: RawWhereFilter) -> Self {
        match raw {
            RawWhereFilter::Template(where_sql_template)
            | RawWhereFilter::Object { where_sql_template } => Self { where_sql_template },
        }
    }
}

impl WhereFilter {
    pub fn new(where_sql_template: impl Into<String>) -> Self {
        Self {
            where_sql_template: where_sql_template.into(),
        }
    }

    /// The macro references in this filter.
    pub fn call_parameter_sets(&self) -> Result<FilterCallParameterSets, ParseWhereFilterError> {
        filter::parse(&self.where_sql_template)
    }
}

impl From<&str> for WhereFilter {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

/// Filters combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawWhereFilterIntersection")]
pub struct WhereFilterIntersection {
    pub where_filters: Vec<WhereFilter>,
}

// Variant order matters: an object with `where_filters` must not be read as
// a single filter.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawWhereFilterIntersection {
    Intersection { where_filters: Vec<WhereFilter> },
    Many(Vec<WhereFilter>),
    Single(WhereFilter),
}

impl From<RawWhereFilterIntersection> for WhereFilterIntersection {
    fn from(raw: RawWhereFilterIntersection) -> Self {
        let where_filters = match raw {
            RawWhereFilterIntersection::Intersection { where_filters }
            | RawWhereFilterIntersection::Many(where_filters) => where_filters,
            RawWhereFilterIntersection::Single(filter) => vec![filter],
        };
        Self { where_filters }
    }
}

impl WhereFilterIntersection {
    pub fn new(where_filters: Vec<WhereFilter>) -> Self {
        Self { where_filters }
    }

    pub fn templates(&self) -> Vec<&str> {
        self.where_filters
            .iter()
            .map(|f| f.where_sql_template.as_str())
            .collect()
    }

    /// Parse every filter, keyed by its template.
    ///
    /// # Errors
    ///
    /// Returns [`ParseWhereFilterError::Aggregate`] when any filter fails.
    pub fn filter_expression_parameter_sets(
        &self,
    ) -> Result<FilterExpressionParameterSets, ParseWhereFilterError> {
        filter::parse_intersection(&self.templates())
    }
}

impl From<WhereFilter> for WhereFilterIntersection {
    fn from(filter: WhereFilter) -> Self {
        Self {
            where_filters: vec![filter],
        }
    }
}

impl FromIterator<WhereFilter> for WhereFilterIntersection {
    fn from_iter<I: IntoIterator<Item = WhereFilter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
