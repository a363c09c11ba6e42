use crate::audit::SessionLog;
use crate::command::{CommandKind, parse_line};
use crate::config::Config;
use crate::export::GitExportTranslator;
use crate::graph::GraphStateMachine;

/// What the UI should do with a submitted line. A closed set of actions;
/// nothing here is ever interpreted as code or markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    /// Nothing to report (no-ops, accepted commands with empty messages).
    Silent,
    /// Informational output to print.
    Output(String),
    /// A failure message to print. The session stays usable.
    Error(String),
    /// Empty the console scrollback.
    ClearConsole,
    /// Open the help overlay.
    ShowHelp,
}

/// One interactive session: the state machine, plus the optional on-disk
/// command log. Constructed explicitly and handed to whoever needs it.
pub struct Session {
    machine: GraphStateMachine,
    log: Option<SessionLog>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            machine: GraphStateMachine::new(),
            log: None,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let machine = GraphStateMachine::with_author(config.commit.author.clone());
        let log = if config.behavior.log_commands {
            SessionLog::new().ok()
        } else {
            None
        };
        Self { machine, log }
    }

    pub fn machine(&self) -> &GraphStateMachine {
        &self.machine
    }

    /// Run one input line through the full pipeline: trim, parse, dispatch.
    pub fn submit(&mut self, line: &str) -> SessionReply {
        let line = line.trim();
        if line.is_empty() {
            return SessionReply::Silent;
        }

        let reply = self.dispatch(line);

        if let Some(log) = &self.log {
            let accepted = !matches!(reply, SessionReply::Error(_));
            let _ = log.log_command(line, accepted);
        }

        reply
    }

    fn dispatch(&mut self, line: &str) -> SessionReply {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => return SessionReply::Error(e.to_string()),
        };

        match command.kind {
            CommandKind::None => SessionReply::Silent,
            CommandKind::Help => SessionReply::ShowHelp,
            CommandKind::Clear => SessionReply::ClearConsole,
            CommandKind::Undo => {
                self.machine.undo();
                SessionReply::Silent
            }
            CommandKind::Redo => {
                self.machine.redo();
                SessionReply::Silent
            }
            _ => match self.machine.execute(command) {
                Ok(message) if message.is_empty() => SessionReply::Silent,
                Ok(message) => SessionReply::Output(message),
                Err(e) => SessionReply::Error(e.to_string()),
            },
        }
    }

    /// The accepted history as a literal, runnable git script.
    pub fn export_script(&self) -> String {
        GitExportTranslator::translate(self.machine.history())
    }

    /// Replace the session with the commands of a script, line by line, as
    /// if the user had typed them into a fresh session.
    pub fn load_script(&mut self, contents: &str) -> Vec<SessionReply> {
        self.machine.hard_reset();
        contents.lines().map(|line| self.submit(line)).collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_silent() {
        let mut session = Session::new();
        assert_eq!(session.submit(""), SessionReply::Silent);
        assert_eq!(session.submit("   "), SessionReply::Silent);
        assert_eq!(session.submit("# just a note"), SessionReply::Silent);
        assert!(session.machine().history().is_empty());
    }

    #[test]
    fn test_help_and_clear_are_ui_actions() {
        let mut session = Session::new();
        assert_eq!(session.submit("help"), SessionReply::ShowHelp);
        assert_eq!(session.submit("-h"), SessionReply::ShowHelp);
        assert_eq!(session.submit("clear"), SessionReply::ClearConsole);
        assert!(session.machine().history().is_empty());
    }

    #[test]
    fn test_graph_commands_flow_to_machine() {
        let mut session = Session::new();
        assert_eq!(session.submit("commit 'x'"), SessionReply::Silent);
        assert_eq!(
            session.submit("status"),
            SessionReply::Output("On branch 'master'".into())
        );
        assert_eq!(session.machine().history().len(), 2);
    }

    #[test]
    fn test_parse_errors_become_error_replies() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("git push"),
            SessionReply::Error("Unknown git command 'push'".into())
        );
        assert_eq!(
            session.submit("commit \"oops"),
            SessionReply::Error("Terminating `\"` not found.".into())
        );
        assert!(session.machine().history().is_empty());
    }

    #[test]
    fn test_semantic_errors_become_error_replies() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("checkout ghost"),
            SessionReply::Error("Branch 'ghost' does not exist.".into())
        );
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut session = Session::new();
        session.submit("commit 'x'");
        session.submit("checkout -b dev");

        let before = session.machine().state().clone();
        session.submit("undo");
        session.submit("redo");
        assert_eq!(session.machine().state(), &before);
    }

    #[test]
    fn test_load_script_replaces_session() {
        let mut session = Session::new();
        session.submit("commit 'old'");

        let replies = session.load_script("commit 'a'\nbranch dev\ncheckout dev\n");
        assert!(replies.iter().all(|r| !matches!(r, SessionReply::Error(_))));

        assert_eq!(session.machine().current_branch_name(), "dev");
        // Only the script's commands remain in the history
        assert_eq!(session.machine().history().len(), 3);
    }

    #[test]
    fn test_export_round_trip_reproduces_graph() {
        let mut session = Session::new();
        for line in [
            "commit 'masterhi'",
            "branch meep",
            "checkout meep",
            "commit -m 'meephii'",
            "commit master 'masterhiii'",
            "checkout -b a2",
            "commit -m 'a2hi'",
            "merge master",
        ] {
            assert!(
                !matches!(session.submit(line), SessionReply::Error(_)),
                "'{}' was rejected",
                line
            );
        }

        let script = session.export_script();
        let mut replay = Session::new();
        // Exported messages are shell-quoted with double quotes; the grammar
        // reads those fine.
        for reply in replay.load_script(&script) {
            assert!(!matches!(reply, SessionReply::Error(_)));
        }

        assert_eq!(replay.machine().state(), session.machine().state());
    }
}
