//! Errors raised while parsing where filters.

use thiserror::Error;

use super::span::Span;
use crate::model::{DatePart, TimeGranularity};

/// Result type for filter parsing.
pub type ParseWhereFilterResult<T> = Result<T, ParseWhereFilterError>;

/// A failure to parse one filter, or several filters parsed together.
///
/// Every variant is an authoring mistake in user-supplied filter text. The
/// message is meant to be shown to the author as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseWhereFilterError {
    /// An element name encodes more than one entity hop, or has an empty segment.
    #[error(
        "Name is in an incorrect format: '{name}'. It should be of the form: \
         <entity name>{separator}<element name>, with any further entity hops \
         passed through the `entity_path` argument"
    )]
    NameFormat { name: String, separator: String },

    /// An `Entity(...)` name contains the separator.
    #[error(
        "Entity name is in an incorrect format: '{name}'. It should not contain \
         the separator '{separator}'"
    )]
    EntityNameFormat { name: String, separator: String },

    #[error(
        "Invalid time granularity: '{literal}'. Expected one of: {}",
        TimeGranularity::vocabulary()
    )]
    Granularity { literal: String },

    #[error("Invalid date part: '{literal}'. Expected one of: {}", DatePart::vocabulary())]
    DatePart { literal: String },

    /// Metric time referenced through `Dimension(...)` without a grain or date part.
    #[error(
        "'{name}' is a time dimension, so it should be referenced using \
         TimeDimension or Dimension().grain(<granularity>)"
    )]
    ReservedNameUsage { name: String },

    /// The template or one of its macro calls is malformed.
    #[error("Syntax error at {span:?}: {message}")]
    Syntax { message: String, span: Span },

    /// One or more filters of an intersection failed to parse.
    #[error("{}", format_failures(.failures, .expression_count))]
    Aggregate {
        failures: Vec<FilterParseFailure>,
        expression_count: usize,
    },
}

/// A filter expression that failed to parse, paired with why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseFailure {
    pub expression: String,
    pub error: ParseWhereFilterError,
}

impl ParseWhereFilterError {
    pub fn syntax(span: Span, message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Location of a syntax error in the template.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Syntax { span, .. } => Some(span),
            _ => None,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate { .. })
    }

    /// The per-expression failures of an aggregate error; empty otherwise.
    pub fn failures(&self) -> &[FilterParseFailure] {
        match self {
            Self::Aggregate { failures, .. } => failures,
            _ => &[],
        }
    }
}

fn format_failures(failures: &[FilterParseFailure], expression_count: &usize) -> String {
    let mut message = format!(
        "Encountered errors in {} of {} filter expressions:",
        failures.len(),
        expression_count
    );
    for failure in failures {
        message.push_str(&format!(
            "\n  - `{}`: {}",
            failure.expression.trim(),
            failure.error
        ));
    }
    message
}
