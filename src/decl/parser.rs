//! Recursive descent parser for stepper descriptions.
//!
//! ```text
//! document    := ( "VerticalStepper" "{" declaration* "}" ) | declaration*
//! declaration := IDENT ":" value ";"?
//! value       := NUMBER | DURATION | HEX_COLOR | IDENT
//! ```
//!
//! The trailing `;` may be omitted only on the last declaration of a list.

use std::time::Duration;

use super::tokenizer::{tokenize, Spanned, Token};
use crate::config::StepperConfig;
use crate::render::driver::parse_color;

/// Widget name accepted as the optional block selector.
pub const WIDGET_NAME: &str = "VerticalStepper";

/// Errors from parsing a stepper description.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
    #[error("invalid value `{value}` for `{property}`: {reason}")]
    InvalidValue {
        property: String,
        value: String,
        reason: String,
    },
}

/// Parse a description into a config, starting from [`StepperConfig::default`].
pub fn parse_config(source: &str) -> Result<StepperConfig, ParseError> {
    let tokens = tokenize(source).map_err(|position| ParseError::UnexpectedToken {
        position,
        message: "unrecognised character".to_owned(),
    })?;
    let mut parser = Parser { tokens, pos: 0 };
    let mut config = StepperConfig::default();
    parser.document(&mut config)?;
    Ok(config)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self, offset: usize) -> Option<Token> {
        self.tokens.get(self.pos + offset).map(|s| s.token)
    }

    fn next(&mut self, expected: &str) -> Result<Spanned, ParseError> {
        match self.tokens.get(self.pos) {
            Some(tok) => {
                self.pos += 1;
                Ok(tok.clone())
            }
            None => Err(ParseError::UnexpectedEof(format!("expected {expected}"))),
        }
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<Spanned, ParseError> {
        let tok = self.next(expected)?;
        if tok.token == token {
            Ok(tok)
        } else {
            Err(unexpected(&tok, expected))
        }
    }

    fn document(&mut self, config: &mut StepperConfig) -> Result<(), ParseError> {
        let is_block = self.peek_token(0) == Some(Token::Ident)
            && self.peek_token(1) == Some(Token::BraceOpen);
        if !is_block {
            return self.declarations(config, None);
        }

        let name = self.next("widget name")?;
        if name.text != WIDGET_NAME {
            return Err(unexpected(&name, &format!("`{WIDGET_NAME}`")));
        }
        self.expect(Token::BraceOpen, "`{`")?;
        self.declarations(config, Some(Token::BraceClose))?;
        self.expect(Token::BraceClose, "`}`")?;
        match self.peek() {
            Some(tok) => Err(unexpected(tok, "end of input")),
            None => Ok(()),
        }
    }

    /// Parse declarations until `end` (not consumed) or end of input.
    fn declarations(
        &mut self,
        config: &mut StepperConfig,
        end: Option<Token>,
    ) -> Result<(), ParseError> {
        loop {
            match self.peek_token(0) {
                None => return Ok(()),
                Some(t) if Some(t) == end => return Ok(()),
                Some(_) => {}
            }

            let name = self.expect(Token::Ident, "property name")?;
            self.expect(Token::Colon, "`:`")?;
            let value = self.next("property value")?;
            apply(config, &name.text, &value)?;

            match self.peek_token(0) {
                Some(Token::Semicolon) => self.pos += 1,
                None => return Ok(()),
                Some(t) if Some(t) == end => return Ok(()),
                Some(_) => {
                    let tok = self.tokens[self.pos].clone();
                    return Err(unexpected(&tok, "`;`"));
                }
            }
        }
    }
}

fn unexpected(tok: &Spanned, expected: &str) -> ParseError {
    ParseError::UnexpectedToken {
        position: tok.start,
        message: format!("expected {expected}, found `{}`", tok.text),
    }
}

fn invalid(property: &str, value: &Spanned, reason: &str) -> ParseError {
    ParseError::InvalidValue {
        property: property.to_owned(),
        value: value.text.clone(),
        reason: reason.to_owned(),
    }
}

fn number(property: &str, value: &Spanned) -> Result<f64, ParseError> {
    if value.token != Token::Number {
        return Err(invalid(property, value, "expected a number"));
    }
    value
        .text
        .parse::<f64>()
        .map_err(|e| invalid(property, value, &e.to_string()))
}

fn boolean(property: &str, value: &Spanned) -> Result<bool, ParseError> {
    match (value.token, value.text.as_str()) {
        (Token::Ident, "true") => Ok(true),
        (Token::Ident, "false") => Ok(false),
        _ => Err(invalid(property, value, "expected `true` or `false`")),
    }
}

fn duration(property: &str, value: &Spanned) -> Result<Duration, ParseError> {
    // Rounded to whole nanoseconds so `0.25` and `250ms` agree exactly.
    let nanos = match value.token {
        Token::Number => number(property, value)? * 1e9,
        Token::Duration => {
            let (digits, scale) = match value.text.strip_suffix("ms") {
                Some(ms) => (ms, 1e6),
                None => (value.text.trim_end_matches('s'), 1e9),
            };
            digits
                .parse::<f64>()
                .map_err(|e| invalid(property, value, &e.to_string()))?
                * scale
        }
        _ => return Err(invalid(property, value, "expected a duration")),
    }
    .round();
    if !(nanos.is_finite() && nanos >= 1.0 && nanos <= u64::MAX as f64) {
        return Err(invalid(property, value, "interval must be positive"));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

fn color(property: &str, value: &Spanned) -> Result<String, ParseError> {
    match value.token {
        Token::Ident | Token::HexColor if parse_color(&value.text).is_some() => {
            Ok(value.text.clone())
        }
        _ => Err(invalid(property, value, "expected a color")),
    }
}

fn apply(config: &mut StepperConfig, property: &str, value: &Spanned) -> Result<(), ParseError> {
    match property {
        "value" => config.value = number(property, value)?,
        "minimum-value" => config.minimum_value = number(property, value)?,
        "maximum-value" => config.maximum_value = number(property, value)?,
        "step-value" => config.step_value = number(property, value)?,
        "auto-repeat" => config.auto_repeat = boolean(property, value)?,
        "auto-repeat-interval" => config.auto_repeat_interval = duration(property, value)?,
        "color" => config.color = Some(color(property, value)?),
        other => return Err(ParseError::UnknownProperty(other.to_owned())),
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
