//! # semfilter
//!
//! Static introspection of semantic-layer where filters.
//!
//! ## Architecture
//!
//! A where filter is SQL text with macro calls embedded in `{{ ... }}`
//! blocks. semfilter extracts every referenced element without evaluating
//! the filter:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Where-filter template                    │
//! │   {{ Dimension('user__country') }} = 'US'                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [template + lexer + parser]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Macro call AST (per block)                  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [evaluator + naming]
//! ┌─────────────────────────────────────────────────────────┐
//! │        FilterCallParameterSets (per expression)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [intersection]
//! ┌─────────────────────────────────────────────────────────┐
//! │     expression text -> FilterCallParameterSets           │
//! │     or one aggregate error for every failure             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! use semfilter::prelude::*;
//!
//! let sets = parse("{{ Dimension('user__country', entity_path=['listing']) }} = 'US'").unwrap();
//! let dim = &sets.dimension_call_parameter_sets[0];
//! assert_eq!(dim.dimension_reference.element_name, "country");
//! assert_eq!(dim.entity_path, entity_path(["listing", "user"]));
//! ```

pub mod config;
pub mod filter;
pub mod model;
pub mod naming;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{Settings, SettingsError};
    pub use crate::filter::{
        parse, parse_intersection, FilterExpressionParameterSets, FilterParseFailure,
        ParseWhereFilterError, WhereFilterParser,
    };
    pub use crate::model::{
        entity_path, CallParameterSet, DatePart, DimensionCallParameterSet, DimensionReference,
        ElementReference, EntityCallParameterSet, EntityPath, EntityReference,
        FilterCallParameterSets, TimeDimensionCallParameterSet, TimeDimensionReference,
        TimeGranularity, WhereFilter, WhereFilterIntersection,
    };
    pub use crate::naming::{NamingConventions, DUNDER, METRIC_TIME_ELEMENT_NAME};
}

// Also export at crate root for convenience
pub use filter::{parse, parse_intersection, ParseWhereFilterError, WhereFilterParser};
pub use model::{FilterCallParameterSets, WhereFilter, WhereFilterIntersection};
