//! References to linkable elements of a semantic model.
//!
//! A reference only names an element; it says nothing about whether the
//! element exists. Resolving references against the manifest is left to the
//! validators that consume parsed filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that identifies an element by name.
pub trait ElementReference {
    fn element_name(&self) -> &str;
}

macro_rules! element_reference {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name {
            pub element_name: String,
        }

        impl $name {
            pub fn new(element_name: impl Into<String>) -> Self {
                Self {
                    element_name: element_name.into(),
                }
            }
        }

        impl ElementReference for $name {
            fn element_name(&self) -> &str {
                &self.element_name
            }
        }

        impl From<&str> for $name {
            fn from(element_name: &str) -> Self {
                Self::new(element_name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.element_name)
            }
        }
    };
}

element_reference! {
    /// A reference to a categorical dimension.
    DimensionReference
}

element_reference! {
    /// A reference to a time dimension, including metric time.
    TimeDimensionReference
}

element_reference! {
    /// A reference to an entity (a join key between semantic models).
    EntityReference
}

impl TimeDimensionReference {
    /// The same element seen as a plain dimension.
    pub fn dimension_reference(&self) -> DimensionReference {
        DimensionReference::new(self.element_name.clone())
    }
}

/// Ordered entity hops from the filtered model to the model owning an element.
///
/// The first hop is joined first. An empty path means the element lives on
/// the model being filtered.
pub type EntityPath = Vec<EntityReference>;

/// Build an entity path from plain entity names.
pub fn entity_path<I, S>(names: I) -> EntityPath
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(EntityReference::new).collect()
}
