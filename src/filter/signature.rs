//! Argument binding for the filter macros.
//!
//! Macro calls accept positional and keyword arguments. Binding follows the
//! usual rules: positional arguments fill parameters in order, keywords fill
//! the rest by name, and no parameter may be given twice.

use super::ast::{Arg, Expr};
use super::error::ParseWhereFilterError;
use super::span::{shift, Span, Spanned};

/// A parameter of a macro or chained method.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> Param {
    Param {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> Param {
    Param {
        name,
        required: false,
    }
}

/// The call shape of a macro or chained method.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub name: &'static str,
    pub params: &'static [Param],
}

pub const DIMENSION: Signature = Signature {
    name: "Dimension",
    params: &[required("name"), optional("entity_path")],
};

pub const TIME_DIMENSION: Signature = Signature {
    name: "TimeDimension",
    params: &[
        required("time_dimension_name"),
        optional("time_granularity_name"),
        optional("entity_path"),
        optional("descending"),
        optional("date_part_name"),
    ],
};

pub const ENTITY: Signature = Signature {
    name: "Entity",
    params: &[required("entity_name"), optional("entity_path")],
};

pub const GRAIN: Signature = Signature {
    name: "grain",
    params: &[required("time_granularity_name")],
};

pub const DATE_PART: Signature = Signature {
    name: "date_part",
    params: &[required("date_part_name")],
};

/// Arguments matched to the parameters of a signature.
#[derive(Debug)]
pub struct BoundArguments<'e> {
    signature: Signature,
    values: Vec<Option<&'e Spanned<Expr>>>,
}

impl<'e> BoundArguments<'e> {
    /// The argument bound to `param`, if one was given.
    pub fn get(&self, param: &str) -> Option<&'e Spanned<Expr>> {
        self.signature
            .params
            .iter()
            .position(|p| p.name == param)
            .and_then(|index| self.values[index])
    }
}

impl Signature {
    /// Bind call arguments to this signature.
    ///
    /// `offset` shifts argument spans (block relative) into template
    /// positions for error reporting.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for too many positional arguments, a positional
    /// argument after a keyword, an unknown or repeated keyword, or a missing
    /// required argument.
    pub fn bind<'e>(
        &self,
        args: &'e [Spanned<Arg>],
        call_span: &Span,
        offset: usize,
    ) -> Result<BoundArguments<'e>, ParseWhereFilterError> {
        let mut values: Vec<Option<&'e Spanned<Expr>>> = vec![None; self.params.len()];
        let mut seen_keyword = false;
        let mut positional = 0;

        for arg in args {
            let span = shift(&arg.span, offset);
            match &arg.value {
                Arg::Positional(value) => {
                    if seen_keyword {
                        return Err(ParseWhereFilterError::syntax(
                            span,
                            format!("positional argument follows keyword argument in {}()", self.name),
                        ));
                    }
                    if positional >= self.params.len() {
                        return Err(ParseWhereFilterError::syntax(
                            span,
                            format!(
                                "{}() takes at most {} argument(s) but {} were given",
                                self.name,
                                self.params.len(),
                                args.len()
                            ),
                        ));
                    }
                    values[positional] = Some(value);
                    positional += 1;
                }
                Arg::Keyword { name, value } => {
                    seen_keyword = true;
                    let index = self
                        .params
                        .iter()
                        .position(|p| p.name == name.value)
                        .ok_or_else(|| {
                            ParseWhereFilterError::syntax(
                                span.clone(),
                                format!(
                                    "{}() got an unexpected keyword argument '{}'",
                                    self.name, name.value
                                ),
                            )
                        })?;
                    if values[index].is_some() {
                        return Err(ParseWhereFilterError::syntax(
                            span,
                            format!("{}() got multiple values for argument '{}'", self.name, name.value),
                        ));
                    }
                    values[index] = Some(value);
                }
            }
        }

        if let Some(missing) = self
            .params
            .iter()
            .zip(&values)
            .find(|(param, value)| param.required && value.is_none())
        {
            return Err(ParseWhereFilterError::syntax(
                shift(call_span, offset),
                format!("{}() missing required argument '{}'", self.name, missing.0.name),
            ));
        }

        Ok(BoundArguments {
            signature: *self,
            values,
        })
    }
}
