//! Builds call parameter sets from the raw arguments of macro calls.
//!
//! This is where naming rules are enforced: element names may carry at most
//! one entity hop, entity names must be atomic, and metric time may only be
//! referenced as a time dimension.

use log::trace;

use super::error::ParseWhereFilterError;
use crate::model::{
    DatePart, DimensionCallParameterSet, DimensionReference, EntityCallParameterSet,
    EntityReference, TimeDimensionCallParameterSet, TimeDimensionReference, TimeGranularity,
};
use crate::naming::{compose_entity_path, NamingConventions};

/// Creates call parameter sets, validating names against the naming conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSetFactory {
    naming: NamingConventions,
}

impl ParameterSetFactory {
    pub fn new(naming: NamingConventions) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &NamingConventions {
        &self.naming
    }

    /// Build the set for `Dimension(name, entity_path)`.
    ///
    /// # Errors
    ///
    /// Fails when `dimension_name` is metric time or is not a valid
    /// (optionally entity-prefixed) element name.
    pub fn create_dimension<S: AsRef<str>>(
        &self,
        dimension_name: &str,
        entity_path: &[S],
    ) -> Result<DimensionCallParameterSet, ParseWhereFilterError> {
        if self.naming.is_metric_time_name(dimension_name) {
            return Err(ParseWhereFilterError::ReservedNameUsage {
                name: dimension_name.to_string(),
            });
        }

        let decoded = self.naming.decode(dimension_name)?;
        if self.naming.is_metric_time_name(decoded.element_name) {
            return Err(ParseWhereFilterError::ReservedNameUsage {
                name: dimension_name.to_string(),
            });
        }

        let set = DimensionCallParameterSet {
            dimension_reference: DimensionReference::new(decoded.element_name),
            entity_path: compose_entity_path(entity_path, decoded.entity_link),
        };
        trace!("dimension call: {:?}", set);
        Ok(set)
    }

    /// Build the set for `TimeDimension(...)` or a chained `Dimension(...)`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed name or an unknown granularity or date part literal.
    pub fn create_time_dimension<S: AsRef<str>>(
        &self,
        time_dimension_name: &str,
        time_granularity_name: Option<&str>,
        entity_path: &[S],
        date_part_name: Option<&str>,
    ) -> Result<TimeDimensionCallParameterSet, ParseWhereFilterError> {
        let decoded = self.naming.decode(time_dimension_name)?;

        let time_granularity = time_granularity_name
            .map(|literal| {
                TimeGranularity::from_str(literal).ok_or_else(|| ParseWhereFilterError::Granularity {
                    literal: literal.to_string(),
                })
            })
            .transpose()?;

        let date_part = date_part_name
            .map(|literal| {
                DatePart::from_str(literal).ok_or_else(|| ParseWhereFilterError::DatePart {
                    literal: literal.to_string(),
                })
            })
            .transpose()?;

        let set = TimeDimensionCallParameterSet {
            time_dimension_reference: TimeDimensionReference::new(decoded.element_name),
            entity_path: compose_entity_path(entity_path, decoded.entity_link),
            time_granularity,
            date_part,
        };
        trace!("time dimension call: {:?}", set);
        Ok(set)
    }

    /// Build the set for `Entity(entity_name, entity_path)`.
    ///
    /// # Errors
    ///
    /// Fails when `entity_name` is empty or contains the separator.
    pub fn create_entity<S: AsRef<str>>(
        &self,
        entity_name: &str,
        entity_path: &[S],
    ) -> Result<EntityCallParameterSet, ParseWhereFilterError> {
        if entity_name.is_empty() || self.naming.contains_separator(entity_name) {
            return Err(ParseWhereFilterError::EntityNameFormat {
                name: entity_name.to_string(),
                separator: self.naming.separator.clone(),
            });
        }

        let set = EntityCallParameterSet {
            entity_reference: EntityReference::new(entity_name),
            entity_path: compose_entity_path(entity_path, None),
        };
        trace!("entity call: {:?}", set);
        Ok(set)
    }
}
