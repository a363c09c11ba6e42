use crate::command::lexer::{Token, TokenKind, tokenize};
use crate::error::ParseError;

/// Message used when a commit command carries no message of its own.
pub const DEFAULT_COMMIT_MESSAGE: &str = "My Commit.";

/// All command types the grammar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    None,
    Help,
    Clear,
    Undo,
    Redo,
    Destroy,
    Commit,
    MergeToSelf,
    MergeAB,
    CheckoutExisting,
    Status,
    BranchShowCurrent,
    BranchNewAB,
}

/// A parsed command. The optional fields are populated as the command type
/// requires; `source` keeps the raw line for diagnostics and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub source: String,
    pub branch_a: Option<String>,
    pub branch_b: Option<String>,
    pub message: Option<String>,
    /// True when a `BranchNewAB` came from a `checkout -b` form, which also
    /// switches to the new branch. The plain `branch` forms leave the current
    /// branch alone.
    pub checkout: bool,
}

impl Command {
    pub fn new(kind: CommandKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            branch_a: None,
            branch_b: None,
            message: None,
            checkout: false,
        }
    }

    /// Command that has no effect (blank or comment input).
    pub fn noop(source: impl Into<String>) -> Self {
        Self::new(CommandKind::None, source)
    }
}

/// Parse one raw input line into a [`Command`].
///
/// Empty lines and lines starting with `#` short-circuit to a no-op without
/// invoking the lexer. A leading `git` word is discarded. Everything else is
/// validated against the grammar by exact position, type and count.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(Command::noop(line));
    }

    let mut tokens = tokenize(line)?;

    if tokens.first().is_some_and(|t| t.value == "git") {
        tokens.remove(0);
    }

    let Some(first) = tokens.first() else {
        return Ok(Command::noop(line));
    };

    if let Some(kind) = zero_arg_kind(&first.value) {
        if tokens.len() > 1 {
            return Err(ParseError::TooManyArguments);
        }
        return Ok(Command::new(kind, line));
    }

    let keyword = first.value.clone();
    let args = &tokens[1..];

    match keyword.as_str() {
        "co" | "checkout" => parse_checkout(line, args),
        "merge" => parse_merge(line, args),
        "branch" => parse_branch(line, args),
        "commit" => parse_commit(line, args),
        _ => Err(ParseError::UnknownCommand(keyword)),
    }
}

/// Commands that take no arguments at all, keyed by keyword or alias.
fn zero_arg_kind(keyword: &str) -> Option<CommandKind> {
    let kind = match keyword {
        "help" | "h" | "-h" | "--help" => CommandKind::Help,
        "u" | "undo" => CommandKind::Undo,
        "r" | "redo" => CommandKind::Redo,
        "status" => CommandKind::Status,
        "clear" => CommandKind::Clear,
        "destroy" => CommandKind::Destroy,
        _ => return None,
    };
    Some(kind)
}

fn parse_checkout(line: &str, args: &[Token]) -> Result<Command, ParseError> {
    match args {
        // checkout <branch>
        [branch] => {
            if branch.kind != TokenKind::Word {
                return Err(ParseError::ExpectedBranchName);
            }
            let mut cmd = Command::new(CommandKind::CheckoutExisting, line);
            cmd.branch_a = Some(branch.value.clone());
            Ok(cmd)
        }
        // checkout -b <branch>
        [flag, branch] => {
            if flag.value != "-b" {
                return Err(ParseError::InvalidSyntax);
            }
            let mut cmd = Command::new(CommandKind::BranchNewAB, line);
            cmd.branch_b = Some(branch.value.clone());
            cmd.checkout = true;
            Ok(cmd)
        }
        // checkout -b <branch> <start_point>
        [flag, branch, source] => {
            if flag.value != "-b" {
                return Err(ParseError::InvalidSyntax);
            }
            let mut cmd = Command::new(CommandKind::BranchNewAB, line);
            cmd.branch_a = Some(source.value.clone());
            cmd.branch_b = Some(branch.value.clone());
            cmd.checkout = true;
            Ok(cmd)
        }
        _ => Err(ParseError::WrongArgumentCount),
    }
}

fn parse_merge(line: &str, args: &[Token]) -> Result<Command, ParseError> {
    match args {
        // merge <branch>
        [branch] => {
            if branch.kind != TokenKind::Word {
                return Err(ParseError::ExpectedBranchName);
            }
            let mut cmd = Command::new(CommandKind::MergeToSelf, line);
            cmd.branch_a = Some(branch.value.clone());
            Ok(cmd)
        }
        // merge <source> <target>
        [source, target] => {
            if source.kind != TokenKind::Word || target.kind != TokenKind::Word {
                return Err(ParseError::ExpectedBranchName);
            }
            let mut cmd = Command::new(CommandKind::MergeAB, line);
            cmd.branch_a = Some(source.value.clone());
            cmd.branch_b = Some(target.value.clone());
            Ok(cmd)
        }
        _ => Err(ParseError::WrongArgumentCount),
    }
}

fn parse_branch(line: &str, args: &[Token]) -> Result<Command, ParseError> {
    match args {
        // branch
        [] => Ok(Command::new(CommandKind::BranchShowCurrent, line)),
        // branch <newbranch>
        [branch] => {
            if branch.kind != TokenKind::Word {
                return Err(ParseError::ExpectedBranchName);
            }
            let mut cmd = Command::new(CommandKind::BranchNewAB, line);
            cmd.branch_b = Some(branch.value.clone());
            Ok(cmd)
        }
        // branch <startbranch> <newbranch>
        [source, branch] => {
            if source.kind != TokenKind::Word || branch.kind != TokenKind::Word {
                return Err(ParseError::ExpectedBranchName);
            }
            let mut cmd = Command::new(CommandKind::BranchNewAB, line);
            cmd.branch_a = Some(source.value.clone());
            cmd.branch_b = Some(branch.value.clone());
            Ok(cmd)
        }
        _ => Err(ParseError::WrongArgumentCount),
    }
}

fn parse_commit(line: &str, args: &[Token]) -> Result<Command, ParseError> {
    let mut args: Vec<Token> = args.to_vec();

    // If the -m option is passed, whatever comes after is a message no matter
    // how it was lexed. Drop the -m itself.
    if args.first().is_some_and(|t| t.value == "-m") {
        if args.len() >= 2 {
            args[1].kind = TokenKind::StringLiteral;
        }
        args.remove(0);
    }

    let mut cmd = Command::new(CommandKind::Commit, line);
    cmd.message = Some(DEFAULT_COMMIT_MESSAGE.to_string());

    match args.as_slice() {
        // commit
        [] => {}
        [arg] => match arg.kind {
            // commit <branch>
            TokenKind::Word => cmd.branch_a = Some(arg.value.clone()),
            // commit "message"
            TokenKind::StringLiteral => cmd.message = Some(arg.value.clone()),
            TokenKind::Option => return Err(ParseError::ExpectedBranchNameOrMessage),
        },
        // commit <branch> "message"
        [branch, message] => {
            if branch.kind != TokenKind::Word {
                return Err(ParseError::InvalidSyntax);
            }
            cmd.branch_a = Some(branch.value.clone());
            cmd.message = Some(message.value.clone());
        }
        _ => return Err(ParseError::InvalidSyntax),
    }

    Ok(cmd)
}
