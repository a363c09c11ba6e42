pub mod lexer;
pub mod parser;

pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{Command, CommandKind, DEFAULT_COMMIT_MESSAGE, parse_line};
