use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, OPERATOR_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Patterns are anchored and tried in order, the first match wins
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^([0-9]+(\\.[0-9]*)?|\\.[0-9]+)").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\p{Alphabetic}+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[-+*/\\^√]").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    /// Byte offset into `source`
    pos: usize,
    /// Character offset into `source`, used for every reported position
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            column: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.column += self.source[self.pos..end].chars().count() as u32;
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.column)
    }

    fn matched(&self, regex: &Regex) -> &'a str {
        regex.find(self.remainder()).map_or("", |m| m.as_str())
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex).len();
    lexer.advance_n(matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let start = lexer.position();

    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(ErrorImpl::NumberParseError { token: matched.to_string() }, start)
    })?;

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number(value), matched.to_string(), Span { start, end: lexer.position() }));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let start = lexer.position();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Identifier(matched.to_string()), matched.to_string(), Span { start, end: lexer.position() }));
    Ok(())
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let start = lexer.position();

    let operator = matched
        .chars()
        .next()
        .and_then(|symbol| OPERATOR_LOOKUP.get(&symbol).copied())
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::UnrecognisedCharacter { character: lexer.at().unwrap_or_default() },
                start,
            )
        })?;

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Operator(operator), matched.to_string(), Span { start, end: lexer.position() }));
    Ok(())
}

/// Converts a normalized expression into its token sequence.
///
/// Whitespace is skipped. The first character no pattern accepts fails
/// with `UnrecognisedCharacter` at its character position.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character: lex.at().unwrap_or_default() },
                    lex.position(),
                ))
            }
        }
    }

    trace!("tokenized {:?} into {} tokens", source, lex.tokens.len());
    Ok(lex.tokens)
}
