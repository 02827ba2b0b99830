//! Naming conventions for elements referenced from filter macros.
//!
//! A name passed to `Dimension(...)` or `TimeDimension(...)` may carry one
//! entity hop in front of the element name, joined with the separator:
//! `user__country` names the `country` dimension reached through `user`.
//! Longer chains must be written out with the `entity_path` argument.

use serde::{Deserialize, Serialize};

use crate::filter::ParseWhereFilterError;
use crate::model::{EntityPath, EntityReference};

/// A double underscore used as a separator.
pub const DUNDER: &str = "__";

/// The name of the time dimension that metrics are tabulated / plotted against.
pub const METRIC_TIME_ELEMENT_NAME: &str = "metric_time";

/// Returns true if the given element name corresponds to metric time.
pub fn is_metric_time_name(element_name: &str) -> bool {
    element_name == METRIC_TIME_ELEMENT_NAME
}

/// The separator and reserved names used when decoding element names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConventions {
    /// Token joining an entity hop to an element name.
    pub separator: String,

    /// The reserved time axis name. Never split on the separator.
    pub metric_time: String,
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            separator: DUNDER.to_string(),
            metric_time: METRIC_TIME_ELEMENT_NAME.to_string(),
        }
    }
}

/// An element name split into its leaf name and optional entity hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedName<'a> {
    pub element_name: &'a str,
    pub entity_link: Option<&'a str>,
}

impl NamingConventions {
    pub fn is_metric_time_name(&self, element_name: &str) -> bool {
        element_name == self.metric_time
    }

    pub fn contains_separator(&self, name: &str) -> bool {
        name.contains(self.separator.as_str())
    }

    /// Split a raw macro name into a leaf element name and an implied entity hop.
    ///
    /// # Errors
    ///
    /// Returns [`ParseWhereFilterError::NameFormat`] when the name has more
    /// than one entity hop or an empty segment.
    pub fn decode<'a>(&self, raw: &'a str) -> Result<DecodedName<'a>, ParseWhereFilterError> {
        if self.is_metric_time_name(raw) {
            return Ok(DecodedName {
                element_name: raw,
                entity_link: None,
            });
        }

        let segments: Vec<&str> = raw.split(self.separator.as_str()).collect();
        match segments.as_slice() {
            [name] if !name.is_empty() => Ok(DecodedName {
                element_name: *name,
                entity_link: None,
            }),
            [entity, name] if !entity.is_empty() && !name.is_empty() => Ok(DecodedName {
                element_name: *name,
                entity_link: Some(*entity),
            }),
            _ => Err(ParseWhereFilterError::NameFormat {
                name: raw.to_string(),
                separator: self.separator.clone(),
            }),
        }
    }
}

/// Append the implied entity hop, if any, after the explicitly written path.
///
/// The hop embedded in the element name is always the join closest to the
/// element, so it sorts last.
pub fn compose_entity_path<S: AsRef<str>>(explicit: &[S], entity_link: Option<&str>) -> EntityPath {
    explicit
        .iter()
        .map(|name| EntityReference::new(name.as_ref()))
        .chain(entity_link.map(EntityReference::new))
        .collect()
}
