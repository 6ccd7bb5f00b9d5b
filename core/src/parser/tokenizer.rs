//! Tokenizer: raw characters to a flat token sequence.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{is_constant_symbol, is_variable_symbol, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Variable,
    Constant,
}

impl ValueKind {
    fn classify(c: char) -> Option<Self> {
        if is_variable_symbol(c) {
            Some(Self::Variable)
        } else if is_constant_symbol(c) {
            Some(Self::Constant)
        } else {
            None
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Variable => is_variable_symbol(c),
            Self::Constant => is_constant_symbol(c),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Constant => "constant",
        }
    }
}

/// Accumulates the characters of one value token.
struct ValueAccumulator<'a> {
    input: &'a str,
    kind: ValueKind,
    text: String,
    /// Index just past the last accepted character
    end: usize,
}

impl<'a> ValueAccumulator<'a> {
    fn open(input: &'a str, index: usize, c: char) -> Option<Self> {
        let kind = ValueKind::classify(c)?;
        Some(Self {
            input,
            kind,
            text: String::new(),
            end: index,
        })
    }

    fn accept(&mut self, index: usize, c: char) -> Result<(), ParseError> {
        if !self.kind.accepts(c) {
            return Err(ParseError::new(
                self.input,
                ParseErrorKind::MalformedValue,
                format!("invalid {} symbol '{}'", self.kind.name(), c),
            )
            .at(index));
        }
        self.text.push(c);
        self.end = index + 1;
        Ok(())
    }

    fn finish(self) -> Result<Token, ParseError> {
        match self.kind {
            ValueKind::Variable => Ok(Token::Variable(self.text)),
            ValueKind::Constant => self.text.parse::<f64>().map(Token::Constant).map_err(|e| {
                ParseError::new(
                    self.input,
                    ParseErrorKind::MalformedValue,
                    format!("couldn't finish {} token '{}'", self.kind.name(), self.text),
                )
                .at(self.end)
                .caused_by(e)
            }),
        }
    }
}

/// Split `input` into tokens.
///
/// Whitespace is skipped and never closes an open value; only a symbol or the end
/// of input does.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut value: Option<ValueAccumulator> = None;

    for (index, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        if let Some(symbol) = Token::from_symbol(c) {
            if let Some(open) = value.take() {
                tokens.push(open.finish()?);
            }
            tokens.push(symbol);
            continue;
        }

        if value.is_none() {
            let opened = ValueAccumulator::open(input, index, c).ok_or_else(|| {
                ParseError::new(
                    input,
                    ParseErrorKind::UnknownSymbol(c),
                    format!("unknown symbol '{}'", c),
                )
                .at(index)
            })?;
            value = Some(opened);
        }

        if let Some(open) = value.as_mut() {
            open.accept(index, c)?;
        }
    }

    if let Some(open) = value {
        tokens.push(open.finish()?);
    }

    Ok(tokens)
}
