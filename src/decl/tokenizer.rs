//! logos-based tokenizer for stepper descriptions.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (`250ms` is one [`Token::Duration`], not `Number` + `Ident`)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"/\*[^*]*\*+([^*/][^*]*\*+)*/")]
pub enum Token {
    /// Number with a time unit: `250ms`, `0.5s`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(ms|s)")]
    Duration,

    /// Hex color: `#fff`, `#ff00aa`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Widget names, property names, booleans, color names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub text: String,
    pub start: usize,
}

/// Tokenize `input`.
///
/// On a lex error returns `Err(byte_offset)` of the first character that
/// could not be lexed.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, usize> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(Spanned {
                token,
                text: input[span.clone()].to_owned(),
                start: span.start,
            }),
            Err(()) => Err(span.start),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("lexes")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn declaration() {
        assert_eq!(
            tokens("step-value: 2.5;"),
            vec![Token::Ident, Token::Colon, Token::Number, Token::Semicolon]
        );
    }

    #[test]
    fn block() {
        assert_eq!(
            tokens("VerticalStepper { value: -3 }"),
            vec![
                Token::Ident,
                Token::BraceOpen,
                Token::Ident,
                Token::Colon,
                Token::Number,
                Token::BraceClose,
            ]
        );
    }

    #[test]
    fn durations_beat_numbers() {
        assert_eq!(tokens("250ms 0.5s 2"), vec![Token::Duration, Token::Duration, Token::Number]);
    }

    #[test]
    fn hex_color() {
        let spanned = tokenize("color: #00ffcc").unwrap();
        assert_eq!(spanned[2].token, Token::HexColor);
        assert_eq!(spanned[2].text, "#00ffcc");
        assert_eq!(spanned[2].start, 7);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokens("/* bounds */ value /* ** */ : 1"),
            vec![Token::Ident, Token::Colon, Token::Number]
        );
    }

    #[test]
    fn comments_with_stars_and_newlines() {
        assert_eq!(
            tokens("/** a * b **/ value: /*\n * multi\n */ 1 /***/"),
            vec![Token::Ident, Token::Colon, Token::Number]
        );
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        assert_eq!(tokenize("value: 1 /* open"), Err(9));
    }

    #[test]
    fn lex_error_reports_offset() {
        assert_eq!(tokenize("value: 1 @"), Err(9));
    }
}
