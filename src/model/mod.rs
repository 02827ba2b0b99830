//! Value types describing what a where filter references.

pub mod call_parameter_sets;
pub mod references;
pub mod time;
pub mod where_filter;

pub use call_parameter_sets::{
    CallParameterSet, DimensionCallParameterSet, EntityCallParameterSet, FilterCallParameterSets,
    TimeDimensionCallParameterSet,
};
pub use references::{
    entity_path, DimensionReference, ElementReference, EntityPath, EntityReference,
    TimeDimensionReference,
};
pub use time::{DatePart, TimeGranularity};
pub use where_filter::{WhereFilter, WhereFilterIntersection};
