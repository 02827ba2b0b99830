//! Human-readable rendering of filter parse errors.
//!
//! Syntax errors carry a span, so they are rendered with ariadne as a
//! source snippet pointing at the offending text. Other errors render as
//! their message.

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};

use super::error::ParseWhereFilterError;

const SOURCE_ID: &str = "filter";

/// Render `error` for the template it was raised from.
///
/// Aggregate errors render each failure against its own expression.
pub fn render(template: &str, error: &ParseWhereFilterError) -> String {
    match error {
        ParseWhereFilterError::Aggregate { failures, .. } => failures
            .iter()
            .map(|failure| render(&failure.expression, &failure.error))
            .collect::<Vec<_>>()
            .join("\n"),
        ParseWhereFilterError::Syntax { message, span } => {
            let span = span.start.min(template.len())..span.end.min(template.len());
            let mut out = Vec::new();
            let written = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
                .with_config(
                    Config::default()
                        .with_color(false)
                        .with_index_type(IndexType::Byte),
                )
                .with_message("invalid filter expression")
                .with_label(Label::new((SOURCE_ID, span)).with_message(message))
                .finish()
                .write((SOURCE_ID, Source::from(template)), &mut out);
            match written {
                Ok(()) => String::from_utf8_lossy(&out).into_owned(),
                Err(_) => error.to_string(),
            }
        }
        other => other.to_string(),
    }
}
