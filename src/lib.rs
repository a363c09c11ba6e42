pub mod audit;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use command::{Command, CommandKind, Token, TokenKind, parse_line, tokenize};
pub use error::{AppError, AppResult, LexError, ParseError, SemanticError};
pub use export::GitExportTranslator;
pub use graph::{GraphState, GraphStateMachine};
pub use session::{Session, SessionReply};
