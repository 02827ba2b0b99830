//! Structured results of parsed filter macro calls.
//!
//! Each macro call in a where filter produces one call parameter set. The
//! sets extracted from a single filter are grouped by kind in
//! [`FilterCallParameterSets`], keeping source order within each kind.

use serde::{Deserialize, Serialize};

use super::references::{DimensionReference, EntityPath, EntityReference, TimeDimensionReference};
use super::time::{DatePart, TimeGranularity};

/// A `Dimension(...)` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionCallParameterSet {
    pub dimension_reference: DimensionReference,
    pub entity_path: EntityPath,
}

/// A `TimeDimension(...)` call, or a `Dimension(...)` call chained with
/// `.grain(...)` or `.date_part(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeDimensionCallParameterSet {
    pub time_dimension_reference: TimeDimensionReference,
    pub entity_path: EntityPath,
    pub time_granularity: Option<TimeGranularity>,
    #[serde(default)]
    pub date_part: Option<DatePart>,
}

/// An `Entity(...)` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityCallParameterSet {
    pub entity_reference: EntityReference,
    pub entity_path: EntityPath,
}

/// One parsed macro call of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallParameterSet {
    Dimension(DimensionCallParameterSet),
    TimeDimension(TimeDimensionCallParameterSet),
    Entity(EntityCallParameterSet),
}

impl CallParameterSet {
    pub fn entity_path(&self) -> &EntityPath {
        match self {
            CallParameterSet::Dimension(set) => &set.entity_path,
            CallParameterSet::TimeDimension(set) => &set.entity_path,
            CallParameterSet::Entity(set) => &set.entity_path,
        }
    }

    /// Name of the referenced element, without entity hops.
    pub fn element_name(&self) -> &str {
        match self {
            CallParameterSet::Dimension(set) => &set.dimension_reference.element_name,
            CallParameterSet::TimeDimension(set) => &set.time_dimension_reference.element_name,
            CallParameterSet::Entity(set) => &set.entity_reference.element_name,
        }
    }
}

impl From<DimensionCallParameterSet> for CallParameterSet {
    fn from(set: DimensionCallParameterSet) -> Self {
        CallParameterSet::Dimension(set)
    }
}

impl From<TimeDimensionCallParameterSet> for CallParameterSet {
    fn from(set: TimeDimensionCallParameterSet) -> Self {
        CallParameterSet::TimeDimension(set)
    }
}

impl From<EntityCallParameterSet> for CallParameterSet {
    fn from(set: EntityCallParameterSet) -> Self {
        CallParameterSet::Entity(set)
    }
}

/// Every call parameter set found in one filter expression.
///
/// Duplicates are kept. Within each sequence the order is the order in which
/// the calls appear in the expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCallParameterSets {
    pub dimension_call_parameter_sets: Vec<DimensionCallParameterSet>,
    pub time_dimension_call_parameter_sets: Vec<TimeDimensionCallParameterSet>,
    pub entity_call_parameter_sets: Vec<EntityCallParameterSet>,
}

impl FilterCallParameterSets {
    /// Total number of call parameter sets of all kinds.
    pub fn len(&self) -> usize {
        self.dimension_call_parameter_sets.len()
            + self.time_dimension_call_parameter_sets.len()
            + self.entity_call_parameter_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<CallParameterSet> for FilterCallParameterSets {
    fn from_iter<T: IntoIterator<Item = CallParameterSet>>(iter: T) -> Self {
        let mut sets = FilterCallParameterSets::default();
        for set in iter {
            match set {
                CallParameterSet::Dimension(set) => sets.dimension_call_parameter_sets.push(set),
                CallParameterSet::TimeDimension(set) => {
                    sets.time_dimension_call_parameter_sets.push(set)
                }
                CallParameterSet::Entity(set) => sets.entity_call_parameter_sets.push(set),
            }
        }
        sets
    }
}
