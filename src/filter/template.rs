//! Locates the expression blocks of a where-filter template.
//!
//! Only `{{ ... }}` blocks carry macro calls. Literal SQL around them is
//! never examined, `{# ... #}` comments are skipped, and `{% ... %}`
//! statements are rejected. The whitespace-control forms `{{-` and `-}}`
//! are read as plain delimiters.

use super::error::ParseWhereFilterError;
use super::span::Span;

/// The contents of one `{{ ... }}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBlock<'src> {
    /// Text between the delimiters.
    pub source: &'src str,
    /// Location of `source` in the template.
    pub span: Span,
}

impl ExpressionBlock<'_> {
    pub fn offset(&self) -> usize {
        self.span.start
    }
}

/// Find every expression block in `template`, in order of appearance.
///
/// # Errors
///
/// Returns a syntax error for an unterminated block or comment, or for a
/// statement block.
pub fn expression_blocks(template: &str) -> Result<Vec<ExpressionBlock<'_>>, ParseWhereFilterError> {
    let bytes = template.as_bytes();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(found) = template[pos..].find('{') {
        let open = pos + found;
        match bytes.get(open + 1) {
            Some(b'{') => {
                let mut start = open + 2;
                let close = find_block_end(bytes, start).ok_or_else(|| {
                    ParseWhereFilterError::syntax(
                        open..template.len(),
                        format!(
                            "unterminated expression block, expected '}}}}' after `{}`",
                            template[open..].trim_end()
                        ),
                    )
                })?;
                // `{{-` and `-}}` only control whitespace around the block.
                let mut end = close;
                if bytes.get(start) == Some(&b'-') {
                    start += 1;
                }
                if end > start && bytes[end - 1] == b'-' {
                    end -= 1;
                }
                blocks.push(ExpressionBlock {
                    source: &template[start..end],
                    span: start..end,
                });
                pos = close + 2;
            }
            Some(b'#') => {
                let close = template[open + 2..].find("#}").ok_or_else(|| {
                    ParseWhereFilterError::syntax(open..template.len(), "unterminated comment, expected '#}'")
                })?;
                pos = open + 2 + close + 2;
            }
            Some(b'%') => {
                let end = template[open..]
                    .find("%}")
                    .map_or(template.len(), |close| open + close + 2);
                return Err(ParseWhereFilterError::syntax(
                    open..end,
                    format!(
                        "statement blocks are not supported in filters: `{}`",
                        &template[open..end]
                    ),
                ));
            }
            _ => pos = open + 1,
        }
    }

    Ok(blocks)
}

/// Position of the `}}` closing a block that starts at `start`, skipping
/// over quoted strings.
fn find_block_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'\'' || b == b'"' => quote = Some(b),
            None if b == b'}' && bytes.get(i + 1) == Some(&b'}') => return Some(i),
            None => {}
        }
        i += 1;
    }
    None
}
