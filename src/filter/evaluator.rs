//! Turns parsed expression blocks into call parameter sets.
//!
//! Each block must hold exactly one recognized macro call:
//!
//! - `Dimension(name, entity_path=[])`, optionally chained with
//!   `.grain(time_granularity_name)` and/or `.date_part(date_part_name)`
//! - `TimeDimension(time_dimension_name, time_granularity_name=None,
//!   entity_path=[], descending=None, date_part_name=None)`
//! - `Entity(entity_name, entity_path=[])`
//!
//! Any other shape is a syntax error.

use super::ast::{Arg, Expr};
use super::error::ParseWhereFilterError;
use super::factory::ParameterSetFactory;
use super::signature::{self, BoundArguments, Signature};
use super::span::{shift, Span, Spanned};
use super::template::ExpressionBlock;
use crate::model::CallParameterSet;

/// A `.method(args)` applied to a macro call.
struct MethodCall<'e> {
    name: &'e Spanned<String>,
    args: &'e [Spanned<Arg>],
    span: &'e Span,
}

/// Evaluates the expression of one block against the macro vocabulary.
pub struct MacroEvaluator<'a> {
    factory: &'a ParameterSetFactory,
    block: &'a ExpressionBlock<'a>,
}

impl<'a> MacroEvaluator<'a> {
    pub fn new(factory: &'a ParameterSetFactory, block: &'a ExpressionBlock<'a>) -> Self {
        Self { factory, block }
    }

    /// Evaluate the block's expression into a call parameter set.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for anything that is not a recognized macro
    /// call, and the factory's errors for invalid names or literals.
    pub fn evaluate(&self, expr: &Spanned<Expr>) -> Result<CallParameterSet, ParseWhereFilterError> {
        let (base, methods) = unwind_method_chain(expr);

        let (callee, args) = match &base.value {
            Expr::Call { callee, args } => (callee, args),
            _ => {
                return Err(self.error(
                    &base.span,
                    format!(
                        "expected a Dimension, TimeDimension, or Entity call, found `{}`",
                        self.text(&base.span)
                    ),
                ))
            }
        };

        let macro_name = match &callee.value {
            Expr::Ident(name) => name.as_str(),
            _ => {
                return Err(self.error(
                    &callee.span,
                    format!("`{}` is not a macro", self.text(&callee.span)),
                ))
            }
        };

        match macro_name {
            "Dimension" => self.dimension(args, &base.span, &methods),
            "TimeDimension" => {
                self.reject_methods(&signature::TIME_DIMENSION, &methods)?;
                self.time_dimension(args, &base.span)
            }
            "Entity" => {
                self.reject_methods(&signature::ENTITY, &methods)?;
                self.entity(args, &base.span)
            }
            other => Err(self.error(
                &callee.span,
                format!(
                    "unknown macro `{}`, expected one of Dimension, TimeDimension, Entity",
                    other
                ),
            )),
        }
    }

    fn dimension(
        &self,
        args: &[Spanned<Arg>],
        call_span: &Span,
        methods: &[MethodCall<'_>],
    ) -> Result<CallParameterSet, ParseWhereFilterError> {
        let bound = self.bind(&signature::DIMENSION, args, call_span)?;
        let name = self.required_str(&signature::DIMENSION, &bound, "name")?;
        let entity_path = self.entity_path(&signature::DIMENSION, &bound)?;

        let mut grain: Option<&str> = None;
        let mut date_part: Option<&str> = None;
        for method in methods {
            let (sig, slot) = match method.name.value.as_str() {
                "grain" => (&signature::GRAIN, &mut grain),
                "date_part" => (&signature::DATE_PART, &mut date_part),
                other => {
                    return Err(self.error(
                        &method.name.span,
                        format!(
                            "unknown method `{}` on Dimension(...), expected `grain` or `date_part`",
                            other
                        ),
                    ))
                }
            };
            if slot.is_some() {
                return Err(self.error(
                    method.span,
                    format!("`{}` may only be applied once", sig.name),
                ));
            }
            let bound = self.bind(sig, method.args, method.span)?;
            *slot = Some(self.required_str(sig, &bound, sig.params[0].name)?);
        }

        if grain.is_none() && date_part.is_none() {
            return Ok(self.factory.create_dimension(name, &entity_path)?.into());
        }
        Ok(self
            .factory
            .create_time_dimension(name, grain, &entity_path, date_part)?
            .into())
    }

    fn time_dimension(
        &self,
        args: &[Spanned<Arg>],
        call_span: &Span,
    ) -> Result<CallParameterSet, ParseWhereFilterError> {
        let sig = &signature::TIME_DIMENSION;
        let bound = self.bind(sig, args, call_span)?;
        let name = self.required_str(sig, &bound, "time_dimension_name")?;
        let granularity = self.optional_str(sig, &bound, "time_granularity_name")?;
        let entity_path = self.entity_path(sig, &bound)?;
        // Ordering only; does not change what the filter references.
        let _descending = self.optional_bool(sig, &bound, "descending")?;
        let date_part = self.optional_str(sig, &bound, "date_part_name")?;

        Ok(self
            .factory
            .create_time_dimension(name, granularity, &entity_path, date_part)?
            .into())
    }

    fn entity(
        &self,
        args: &[Spanned<Arg>],
        call_span: &Span,
    ) -> Result<CallParameterSet, ParseWhereFilterError> {
        let sig = &signature::ENTITY;
        let bound = self.bind(sig, args, call_span)?;
        let name = self.required_str(sig, &bound, "entity_name")?;
        let entity_path = self.entity_path(sig, &bound)?;

        Ok(self.factory.create_entity(name, &entity_path)?.into())
    }

    // ========================================================================
    // Argument helpers
    // ========================================================================

    fn bind<'e>(
        &self,
        sig: &Signature,
        args: &'e [Spanned<Arg>],
        call_span: &Span,
    ) -> Result<BoundArguments<'e>, ParseWhereFilterError> {
        sig.bind(args, call_span, self.block.offset())
    }

    fn reject_methods(&self, sig: &Signature, methods: &[MethodCall<'_>]) -> Result<(), ParseWhereFilterError> {
        match methods.first() {
            Some(method) => Err(self.error(
                &method.name.span,
                format!(
                    "{}(...) does not support chained methods, found `.{}(...)`",
                    sig.name, method.name.value
                ),
            )),
            None => Ok(()),
        }
    }

    fn required_str<'e>(
        &self,
        sig: &Signature,
        bound: &BoundArguments<'e>,
        param: &str,
    ) -> Result<&'e str, ParseWhereFilterError> {
        let value = bound.get(param).ok_or_else(|| {
            self.error(
                &(0..self.block.source.len()),
                format!("{}() missing required argument '{}'", sig.name, param),
            )
        })?;
        match &value.value {
            Expr::Str(s) => Ok(s.as_str()),
            other => Err(self.type_error(sig, param, "a string", other, &value.span)),
        }
    }

    fn optional_str<'e>(
        &self,
        sig: &Signature,
        bound: &BoundArguments<'e>,
        param: &str,
    ) -> Result<Option<&'e str>, ParseWhereFilterError> {
        match bound.get(param) {
            None => Ok(None),
            Some(value) => match &value.value {
                Expr::None => Ok(None),
                Expr::Str(s) => Ok(Some(s.as_str())),
                other => Err(self.type_error(sig, param, "a string or None", other, &value.span)),
            },
        }
    }

    fn optional_bool(
        &self,
        sig: &Signature,
        bound: &BoundArguments<'_>,
        param: &str,
    ) -> Result<Option<bool>, ParseWhereFilterError> {
        match bound.get(param) {
            None => Ok(None),
            Some(value) => match &value.value {
                Expr::None => Ok(None),
                Expr::Bool(b) => Ok(Some(*b)),
                other => Err(self.type_error(sig, param, "True, False, or None", other, &value.span)),
            },
        }
    }

    /// The explicit `entity_path` argument: a list or tuple of strings.
    fn entity_path<'e>(
        &self,
        sig: &Signature,
        bound: &BoundArguments<'e>,
    ) -> Result<Vec<&'e str>, ParseWhereFilterError> {
        let Some(value) = bound.get("entity_path") else {
            return Ok(Vec::new());
        };
        let items = match &value.value {
            Expr::None => return Ok(Vec::new()),
            Expr::List(items) | Expr::Tuple(items) => items,
            other => {
                return Err(self.type_error(sig, "entity_path", "a list of strings", other, &value.span))
            }
        };
        items
            .iter()
            .map(|item| match &item.value {
                Expr::Str(s) => Ok(s.as_str()),
                other => Err(self.type_error(sig, "entity_path", "a list of strings", other, &item.span)),
            })
            .collect()
    }

    // ========================================================================
    // Error helpers
    // ========================================================================

    fn text(&self, span: &Span) -> &str {
        self.block.source.get(span.clone()).unwrap_or(self.block.source).trim()
    }

    fn error(&self, span: &Span, message: String) -> ParseWhereFilterError {
        ParseWhereFilterError::syntax(shift(span, self.block.offset()), message)
    }

    fn type_error(
        &self,
        sig: &Signature,
        param: &str,
        expected: &str,
        found: &Expr,
        span: &Span,
    ) -> ParseWhereFilterError {
        self.error(
            span,
            format!(
                "expected {} for `{}` in {}(), found {} `{}`",
                expected,
                param,
                sig.name,
                found.describe(),
                self.text(span)
            ),
        )
    }
}

/// Peel `.method(args)` calls off an expression, innermost first.
fn unwind_method_chain(expr: &Spanned<Expr>) -> (&Spanned<Expr>, Vec<MethodCall<'_>>) {
    let mut methods = Vec::new();
    let mut current = expr;
    while let Expr::Call { callee, args } = &current.value {
        let Expr::Attr { target, name } = &callee.value else {
            break;
        };
        methods.push(MethodCall {
            name,
            args,
            span: &current.span,
        });
        current = &**target;
    }
    methods.reverse();
    (current, methods)
}
