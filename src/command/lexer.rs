use crate::error::LexError;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare identifier or keyword, lowercased.
    Word,
    /// Quoted text, case preserved.
    StringLiteral,
    /// Flag beginning with `-`, lowercased.
    Option,
}

/// A lexer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Split a raw input line into typed tokens.
///
/// Occurrences of `'` or `"` open a string literal that runs until the next
/// quote of the same character; everything in between is joined with single
/// spaces, case preserved. Outside quotes the line is split on whitespace;
/// units starting with `-` become options, everything else a word, both
/// lowercased. An unterminated quote is a lexical failure.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    // Pad quotes with spaces so each quote character forms its own unit.
    let mut padded = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        if c == '"' || c == '\'' {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }

    let mut tokens = Vec::new();
    let mut open_quote: Option<char> = None;
    let mut literal: Vec<&str> = Vec::new();

    for unit in padded.split_whitespace() {
        match open_quote {
            Some(quote) => {
                if unit.len() == 1 && unit.starts_with(quote) {
                    tokens.push(Token::new(TokenKind::StringLiteral, literal.join(" ")));
                    literal.clear();
                    open_quote = None;
                } else {
                    literal.push(unit);
                }
            }
            None => {
                if unit == "\"" || unit == "'" {
                    open_quote = unit.chars().next();
                } else if unit.starts_with('-') {
                    tokens.push(Token::new(TokenKind::Option, unit.to_lowercase()));
                } else {
                    tokens.push(Token::new(TokenKind::Word, unit.to_lowercase()));
                }
            }
        }
    }

    match open_quote {
        Some(quote) => Err(LexError::UnterminatedQuote(quote)),
        None => Ok(tokens),
    }
}
