//! Syntax tree of a single `{{ ... }}` block.
//!
//! The tree is deliberately generic (calls, attribute access, literals); the
//! evaluator decides which shapes are meaningful macro calls.

use super::span::Spanned;

/// An expression inside a filter block.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare name, e.g. the callee `Dimension`.
    Ident(String),
    Str(String),
    Number(String),
    Bool(bool),
    None,
    /// `[a, b]`
    List(Vec<Spanned<Expr>>),
    /// `(a, b)`
    Tuple(Vec<Spanned<Expr>>),
    /// `target.name`
    Attr {
        target: Box<Spanned<Expr>>,
        name: Spanned<String>,
    },
    /// `callee(args)`
    Call {
        callee: Box<Spanned<Expr>>,
        args: Vec<Spanned<Arg>>,
    },
}

/// A call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Positional(Spanned<Expr>),
    Keyword {
        name: Spanned<String>,
        value: Spanned<Expr>,
    },
}

impl Arg {
    pub fn value(&self) -> &Spanned<Expr> {
        match self {
            Arg::Positional(value) => value,
            Arg::Keyword { value, .. } => value,
        }
    }
}

impl Expr {
    /// A short description of the expression kind, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "a name",
            Expr::Str(_) => "a string",
            Expr::Number(_) => "a number",
            Expr::Bool(_) => "a boolean",
            Expr::None => "None",
            Expr::List(_) => "a list",
            Expr::Tuple(_) => "a tuple",
            Expr::Attr { .. } => "an attribute",
            Expr::Call { .. } => "a call",
        }
    }
}
