//! Error types and error formatting.
//!
//! Rule compilation fails only for configuration errors (a template that
//! yields no complete window) and operand-resolution errors (a rule naming a
//! component absent from the universe). Neither is ever papered over with an
//! always-true expression; both surface as `CompileError`.
//!
//! Parse failures from the rule-text front-end are rendered into readable
//! reports with ariadne.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::prelude::Simple;
use std::ops::Range;

use crate::lexer::Token;

/// An error raised while compiling or resolving a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileError {
    /// A template rule produced zero complete windows against the design
    /// length: the design is too short, or not a multiple of the template
    /// length. A configuration error; the caller must adjust the design size.
    EmptyTemplate {
        /// The rule's string form.
        rule: String,
        /// The offending design length.
        design_len: usize,
    },
    /// A rule references a component that is not in the universe.
    UnknownComponent { name: String },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::EmptyTemplate { rule, design_len } => write!(
                f,
                "cannot impose {}: a design of length {} leaves no complete window",
                rule, design_len
            ),
            CompileError::UnknownComponent { name } => {
                write!(f, "unknown component: {}", name)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Format lexer errors into a user-friendly string
pub fn format_lexer_errors(source: &str, errors: Vec<Simple<char>>) -> String {
    let mut output = Vec::new();

    for error in errors {
        let span = error.span();
        let report = Report::build(ReportKind::Error, (), span.start)
            .with_message("Lexical error")
            .with_label(
                Label::new(span.clone())
                    .with_message(format_lexer_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single lexer error into a readable message
fn format_lexer_error(error: &Simple<char>) -> String {
    let found = error
        .found()
        .map(|c| format!("'{}'", c))
        .unwrap_or_else(|| "end of input".to_string());
    format!("Unexpected character {}", found)
}

/// Format parser errors into a user-friendly string
pub fn format_parser_errors(source: &str, errors: Vec<Simple<Token>>) -> String {
    let mut output = Vec::new();

    for error in errors {
        // Token streams carry character spans, so the error span is already
        // a character range; clamp it to the source just in case.
        let span = error.span();
        let char_span: Range<usize> = span.start.min(source.len())..span.end.min(source.len());

        let report = Report::build(ReportKind::Error, (), char_span.start)
            .with_message("Parse error")
            .with_label(
                Label::new(char_span.clone())
                    .with_message(format_parser_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single parser error into a readable message
fn format_parser_error(error: &Simple<Token>) -> String {
    use chumsky::error::SimpleReason;

    let found = error
        .found()
        .map(|t| format!("'{}'", t))
        .unwrap_or_else(|| "end of input".to_string());

    if let SimpleReason::Custom(msg) = error.reason() {
        return msg.clone();
    }

    let expected: Vec<String> = error
        .expected()
        .filter_map(|opt| opt.as_ref())
        .map(|t| format!("'{}'", t))
        .collect();

    if !expected.is_empty() {
        format!(
            "Unexpected {}, expected one of: {}",
            found,
            expected.join(", ")
        )
    } else if let Some(label) = error.label() {
        label.to_string()
    } else {
        format!("Unexpected token {}", found)
    }
}
