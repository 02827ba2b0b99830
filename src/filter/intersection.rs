//! Parsing of filter intersections (filters combined with AND).
//!
//! Each expression is parsed on its own. If any of them fails the whole
//! intersection is invalid: every failure is reported in one aggregate error
//! and no parameter sets are returned.

use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

use super::error::{FilterParseFailure, ParseWhereFilterError};
use super::WhereFilterParser;
use crate::model::FilterCallParameterSets;

/// Parameter sets of each expression in an intersection, in input order.
pub type FilterExpressionParameterSets = IndexMap<String, FilterCallParameterSets>;

/// Parse every expression of an intersection.
///
/// Repeated expression texts map to a single entry at the position of their
/// first occurrence.
///
/// # Errors
///
/// Returns [`ParseWhereFilterError::Aggregate`] listing every failing
/// expression, in input order, when any expression fails.
pub fn parse_intersection<S>(
    parser: &WhereFilterParser,
    expressions: &[S],
) -> Result<FilterExpressionParameterSets, ParseWhereFilterError>
where
    S: AsRef<str> + Sync,
{
    debug!(
        "parsing filter intersection of {} expression(s){}",
        expressions.len(),
        if parser.is_parallel() { " in parallel" } else { "" }
    );

    // Parallel collection keeps input order.
    let results: Vec<_> = if parser.is_parallel() {
        expressions
            .par_iter()
            .map(|expression| parser.parse_call_parameter_sets(expression.as_ref()))
            .collect()
    } else {
        expressions
            .iter()
            .map(|expression| parser.parse_call_parameter_sets(expression.as_ref()))
            .collect()
    };

    let mut parsed = FilterExpressionParameterSets::with_capacity(expressions.len());
    let mut failures = Vec::new();
    for (expression, result) in expressions.iter().zip(results) {
        let expression = expression.as_ref();
        match result {
            Ok(sets) => {
                parsed.entry(expression.to_string()).or_insert(sets);
            }
            Err(error) => failures.push(FilterParseFailure {
                expression: expression.to_string(),
                error,
            }),
        }
    }

    if !failures.is_empty() {
        warn!(
            "rejecting filter intersection: {} of {} expression(s) failed to parse",
            failures.len(),
            expressions.len()
        );
        return Err(ParseWhereFilterError::Aggregate {
            failures,
            expression_count: expressions.len(),
        });
    }

    Ok(parsed)
}
