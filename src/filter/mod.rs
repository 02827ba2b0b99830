//! Where-filter expression parsing.
//!
//! A where filter is a SQL-like template whose `{{ ... }}` blocks call the
//! semantic layer's macros:
//!
//! ```text
//! {{ Dimension('user__country', entity_path=['listing']) }} = 'US'
//!   AND {{ TimeDimension('booking__created_at', 'month') }} >= '2024-01-01'
//! ```
//!
//! Parsing never evaluates the filter. It records which dimensions, time
//! dimensions and entities the template references:
//!
//! ```text
//! template ──[template]──> blocks ──[lexer/parser]──> Expr
//!          ──[evaluator + factory]──> CallParameterSet ──> FilterCallParameterSets
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod factory;
pub mod intersection;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod signature;
pub mod span;
pub mod template;

pub use error::{FilterParseFailure, ParseWhereFilterError, ParseWhereFilterResult};
pub use factory::ParameterSetFactory;
pub use intersection::FilterExpressionParameterSets;
pub use span::{Span, Spanned};

use once_cell::sync::Lazy;

use crate::config::Settings;
use crate::model::FilterCallParameterSets;
use crate::naming::NamingConventions;
use evaluator::MacroEvaluator;

static DEFAULT_PARSER: Lazy<WhereFilterParser> = Lazy::new(WhereFilterParser::default);

/// Parses where-filter templates with a fixed set of naming conventions.
#[derive(Debug, Clone, Default)]
pub struct WhereFilterParser {
    factory: ParameterSetFactory,
    parallel: bool,
}

impl WhereFilterParser {
    pub fn new(naming: NamingConventions) -> Self {
        Self {
            factory: ParameterSetFactory::new(naming),
            parallel: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.naming.clone()).with_parallel(settings.intersection.parallel)
    }

    /// Parse intersections on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn naming(&self) -> &NamingConventions {
        self.factory.naming()
    }

    /// Extract every macro reference from one where-filter template.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid block; nothing is returned for the blocks
    /// that parsed before it.
    pub fn parse_call_parameter_sets(
        &self,
        template: &str,
    ) -> Result<FilterCallParameterSets, ParseWhereFilterError> {
        let blocks = template::expression_blocks(template)?;
        log::debug!("parsing filter with {} expression block(s): {}", blocks.len(), template.trim());

        let mut calls = Vec::with_capacity(blocks.len());
        for block in &blocks {
            let expr = parser::parse_block(block)?;
            calls.push(MacroEvaluator::new(&self.factory, block).evaluate(&expr)?);
        }
        Ok(calls.into_iter().collect())
    }

    /// Parse the expressions of a filter intersection.
    ///
    /// See [`intersection::parse_intersection`].
    pub fn parse_intersection<S>(
        &self,
        expressions: &[S],
    ) -> Result<FilterExpressionParameterSets, ParseWhereFilterError>
    where
        S: AsRef<str> + Sync,
    {
        intersection::parse_intersection(self, expressions)
    }
}

/// Parse one where-filter template with the default naming conventions.
pub fn parse(template: &str) -> Result<FilterCallParameterSets, ParseWhereFilterError> {
    DEFAULT_PARSER.parse_call_parameter_sets(template)
}

/// Parse a filter intersection with the default naming conventions.
pub fn parse_intersection<S>(expressions: &[S]) -> Result<FilterExpressionParameterSets, ParseWhereFilterError>
where
    S: AsRef<str> + Sync,
{
    DEFAULT_PARSER.parse_intersection(expressions)
}
