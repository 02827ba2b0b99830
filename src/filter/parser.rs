//! Parser for filter expression blocks using chumsky.
//!
//! Transforms the token stream of one `{{ ... }}` block into a single
//! [`Expr`]. Anything other than exactly one expression is an error.

use chumsky::input::ValueInput;
use chumsky::prelude::*;

use super::ast::{Arg, Expr};
use super::error::ParseWhereFilterError;
use super::lexer::{self, Token};
use super::span::{shift, Spanned};
use super::template::ExpressionBlock;

/// Convert a SimpleSpan to our Span type (Range<usize>)
fn to_span(span: SimpleSpan) -> std::ops::Range<usize> {
    span.start..span.end
}

enum Postfix {
    Attr(Spanned<String>),
    Call(Vec<Spanned<Arg>>),
}

/// Create the parser for one expression block.
pub fn parser<'tokens, 'src: 'tokens, I>(
) -> impl Parser<'tokens, I, Spanned<Expr>, extra::Err<Rich<'tokens, Token<'src>, SimpleSpan>>>
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
{
    let ident = select! {
        Token::Ident(s) => s.to_string(),
    }
    .labelled("identifier");

    let expr = recursive(|expr| {
        let literal = select! {
            Token::Str(s) => Expr::Str(s.to_string()),
            Token::Number(n) => Expr::Number(n.to_string()),
            Token::True => Expr::Bool(true),
            Token::False => Expr::Bool(false),
            Token::None => Expr::None,
        }
        .labelled("literal");

        let items = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>();

        let list = items
            .clone()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Expr::List);

        // `(x)` is just `x`; anything else in parentheses is a tuple
        let parenthesized = items
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(|mut items: Vec<Spanned<Expr>>| {
                if items.len() == 1 {
                    items.remove(0).value
                } else {
                    Expr::Tuple(items)
                }
            });

        let atom = choice((literal, ident.clone().map(Expr::Ident), list, parenthesized))
            .map_with(|e, x| Spanned::new(e, to_span(x.span())));

        // Arguments: `name=value` or `value`
        let keyword_arg = ident
            .clone()
            .map_with(|n, e| Spanned::new(n, to_span(e.span())))
            .then_ignore(just(Token::Eq))
            .then(expr.clone())
            .map(|(name, value)| Arg::Keyword { name, value });
        let positional_arg = expr.clone().map(Arg::Positional);
        let arg = keyword_arg
            .or(positional_arg)
            .map_with(|a, e| Spanned::new(a, to_span(e.span())));

        let call_args = arg
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let postfix = choice((
            just(Token::Dot)
                .ignore_then(ident.clone().map_with(|n, e| Spanned::new(n, to_span(e.span()))))
                .map(Postfix::Attr),
            call_args.map(Postfix::Call),
        ))
        .map_with(|p, e| (p, to_span(e.span())));

        atom.then(postfix.repeated().collect::<Vec<_>>())
            .map(|(atom, postfixes)| {
                postfixes.into_iter().fold(atom, |target, (postfix, span)| {
                    let full = target.span.start..span.end;
                    let value = match postfix {
                        Postfix::Attr(name) => Expr::Attr {
                            target: Box::new(target),
                            name,
                        },
                        Postfix::Call(args) => Expr::Call {
                            callee: Box::new(target),
                            args,
                        },
                    };
                    Spanned::new(value, full)
                })
            })
    });

    expr.then_ignore(end())
}

/// Lex and parse one expression block.
///
/// Spans in the returned tree are relative to the block; errors carry spans
/// relative to the whole template.
///
/// # Errors
///
/// Returns [`ParseWhereFilterError::Syntax`] for the first lexer or parser
/// error in the block.
pub fn parse_block(block: &ExpressionBlock<'_>) -> Result<Spanned<Expr>, ParseWhereFilterError> {
    use chumsky::input::Input;

    let source = block.source;
    let offset = block.offset();

    let tokens = lexer::lex(source).map_err(|errs| {
        let e = &errs[0];
        let span = to_span(*e.span());
        let message = match e.found() {
            Some(c) => format!("unexpected character '{}' in `{}`", c, source.trim()),
            None => format!("unexpected end of `{}`", source.trim()),
        };
        ParseWhereFilterError::syntax(shift(&span, offset), message)
    })?;

    if tokens.is_empty() {
        return Err(ParseWhereFilterError::syntax(
            block.span.clone(),
            "empty expression block, expected a Dimension, TimeDimension, or Entity call",
        ));
    }

    check_nesting(&tokens, offset)?;

    let len = source.len();
    let token_stream = tokens.as_slice().map(
        (len..len).into(),
        |(tok, span): &(Token<'_>, SimpleSpan)| (tok, span),
    );

    // The parser borrows `tokens`; it must be dropped before returning.
    let result = parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| {
            let e = &errs[0];
            let span = to_span(*e.span());
            let message = match e.found() {
                Some(tok) => format!("unexpected `{}` in `{}`", tok, source.trim()),
                None => format!("unexpected end of `{}`", source.trim()),
            };
            ParseWhereFilterError::syntax(shift(&span, offset), message)
        });
    result
}

/// Deepest `(`/`[` nesting accepted in one block.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Reject blocks nested deeper than [`MAX_NESTING_DEPTH`] before the
/// recursive parser sees them.
fn check_nesting(tokens: &[(Token<'_>, SimpleSpan)], offset: usize) -> Result<(), ParseWhereFilterError> {
    let mut depth = 0usize;
    for (tok, span) in tokens {
        match tok {
            Token::LParen | Token::LBracket => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseWhereFilterError::syntax(
                        shift(&to_span(*span), offset),
                        format!("expression is nested more than {} levels deep", MAX_NESTING_DEPTH),
                    ));
                }
            }
            Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
