use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors produced by the tokenizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Terminating `{0}` not found.")]
    UnterminatedQuote(char),
}

/// Errors produced by the grammar parser.
///
/// The message strings are part of the observable contract and appear in the
/// console verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Unknown git command '{0}'")]
    UnknownCommand(String),

    #[error("Too many arguments.")]
    TooManyArguments,

    #[error("Invalid number of arguments.")]
    WrongArgumentCount,

    #[error("Expected a branch name.")]
    ExpectedBranchName,

    #[error("Expected branch name or commit message.")]
    ExpectedBranchNameOrMessage,

    #[error("Invalid syntax.")]
    InvalidSyntax,
}

/// Errors detected while executing an accepted command against the graph.
///
/// When one of these is returned the graph, the command history and the redo
/// stack are all untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Branch '{0}' does not exist.")]
    BranchNotFound(String),

    #[error("A branch with the name '{0}' already exists.")]
    BranchAlreadyExists(String),

    #[error("Unknown git command '{0}'")]
    UnknownCommand(String),

    #[error(
        "Cannot draw a commit on branch '{0}' while its parent has no commits. \
         Commit on the parent branch first."
    )]
    RenderingConstraintViolated(String),
}

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for application-level code while
/// preserving the specific error context from each module. All module errors
/// automatically convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Semantic(#[from] SemanticError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
