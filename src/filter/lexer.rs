//! Lexer for the contents of a `{{ ... }}` block.
//!
//! Converts block text into tokens with span information. Spans are relative
//! to the start of the block.

use chumsky::prelude::*;

/// A token inside a filter expression block.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    // ========================================================================
    // Keyword literals
    // ========================================================================
    None,
    True,
    False,

    // ========================================================================
    // Literals
    // ========================================================================
    /// An identifier (macro name, method name, or keyword argument name).
    Ident(&'src str),
    /// A string literal (contents without quotes).
    Str(&'src str),
    /// An integer or decimal number.
    Number(&'src str),

    // ========================================================================
    // Symbols
    // ========================================================================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Eq,
}

impl<'src> std::fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::None => write!(f, "None"),
            Token::True => write!(f, "True"),
            Token::False => write!(f, "False"),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Str(s) => write!(f, "'{}'", s),
            Token::Number(s) => write!(f, "{}", s),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
            Token::Eq => write!(f, "="),
        }
    }
}

/// Map an identifier string to a keyword token or return Ident.
fn keyword_or_ident(s: &str) -> Token<'_> {
    match s {
        "None" | "none" => Token::None,
        "True" | "true" => Token::True,
        "False" | "false" => Token::False,
        _ => Token::Ident(s),
    }
}

/// Create a lexer for filter expression blocks.
pub fn lexer<'src>(
) -> impl Parser<'src, &'src str, Vec<(Token<'src>, SimpleSpan)>, extra::Err<Rich<'src, char>>> {
    let ident = text::ident().map(keyword_or_ident);

    // String literals: '...' or "..."
    let single_quoted = just('\'')
        .ignore_then(none_of('\'').repeated().to_slice())
        .then_ignore(just('\''));
    let double_quoted = just('"')
        .ignore_then(none_of('"').repeated().to_slice())
        .then_ignore(just('"'));
    let string_lit = single_quoted.or(double_quoted).map(Token::Str);

    let number = text::digits(10)
        .then(just('.').then(text::digits(10)).or_not())
        .to_slice()
        .map(Token::Number);

    let symbol = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('[').to(Token::LBracket),
        just(']').to(Token::RBracket),
        just(',').to(Token::Comma),
        just('.').to(Token::Dot),
        just('=').to(Token::Eq),
    ));

    let token = choice((ident, string_lit, number, symbol)).map_with(|tok, e| (tok, e.span()));

    token
        .padded()
        .repeated()
        .collect()
        .padded()
        .then_ignore(end())
}

/// Lex block text into tokens.
///
/// Returns Ok with the token list on success, or Err with the lexer errors.
pub fn lex(source: &str) -> Result<Vec<(Token<'_>, SimpleSpan)>, Vec<Rich<'_, char>>> {
    let (tokens, errs) = lexer().parse(source).into_output_errors();
    if errs.is_empty() {
        Ok(tokens.unwrap_or_default())
    } else {
        Err(errs)
    }
}
