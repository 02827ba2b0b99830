//! Source locations for filter expressions.
//!
//! Spans are byte ranges into the full where-filter template, so a syntax
//! error found inside one `{{ ... }}` block can be reported against the text
//! the author actually wrote.

use std::ops::{Deref, Range};

/// A byte range into a filter template.
pub type Span = Range<usize>;

/// A value paired with the span it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Transform the value, keeping the span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }

    pub fn as_ref(&self) -> Spanned<&T> {
        Spanned {
            value: &self.value,
            span: self.span.clone(),
        }
    }

    /// Shift the span right by `offset` bytes.
    pub fn offset(mut self, offset: usize) -> Self {
        self.span = shift(&self.span, offset);
        self
    }
}

impl<T> Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Shift a span right by `offset` bytes.
pub fn shift(span: &Span, offset: usize) -> Span {
    span.start + offset..span.end + offset
}
