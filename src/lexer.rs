//! Lexer for rule text.
//!
//! Tokenizes a rule script into a stream for the parser.

use chumsky::prelude::*;
use std::ops::Range;

/// Token types for rule text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Rule operators
    Not,
    Then,
    Drives,
    Template,
    Before,
    SameOrientation,
    Forward,
    Reverse,

    // Component names
    Ident(String),

    // Punctuation
    LBracket, // [
    RBracket, // ]
    Pipe,     // |
    Comma,    // ,
    Dot,      // .
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Not => write!(f, "NOT"),
            Token::Then => write!(f, "THEN"),
            Token::Drives => write!(f, "DRIVES"),
            Token::Template => write!(f, "TEMPLATE"),
            Token::Before => write!(f, "BEFORE"),
            Token::SameOrientation => write!(f, "SAME_ORIENTATION"),
            Token::Forward => write!(f, "FORWARD"),
            Token::Reverse => write!(f, "REVERSE"),
            Token::Ident(s) => write!(f, "{}", s),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Pipe => write!(f, "|"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
        }
    }
}

/// Type alias for spans
pub type Span = Range<usize>;

/// Create a lexer for rule text.
pub fn lexer() -> impl Parser<char, Vec<(Token, Span)>, Error = Simple<char>> {
    let keyword_or_ident = text::ident().map(|s: String| match s.as_str() {
        "NOT" => Token::Not,
        "THEN" => Token::Then,
        "DRIVES" => Token::Drives,
        "TEMPLATE" => Token::Template,
        "BEFORE" => Token::Before,
        "SAME_ORIENTATION" => Token::SameOrientation,
        "FORWARD" => Token::Forward,
        "REVERSE" => Token::Reverse,
        _ => Token::Ident(s),
    });

    let punctuation = choice((
        just('[').to(Token::LBracket),
        just(']').to(Token::RBracket),
        just('|').to(Token::Pipe),
        just(',').to(Token::Comma),
        just('.').to(Token::Dot),
    ));

    // Comments: // to end of line (handles both mid-file and end-of-file)
    let line_comment = just("//")
        .then(none_of('\n').repeated())
        .then(just('\n').or_not())
        .ignored();

    // Token OR comment - comments produce None, tokens produce Some
    let token_or_skip = line_comment
        .to(None)
        .or(keyword_or_ident.or(punctuation).map(Some));

    token_or_skip
        .map_with_span(|opt_tok, span| opt_tok.map(|tok| (tok, span)))
        .padded()
        .repeated()
        .then_ignore(end())
        .map(|items| items.into_iter().flatten().collect())
}

// Unit tests live in tests/unit_parsing.rs
