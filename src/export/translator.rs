use crate::command::{Command, CommandKind};
use crate::graph::state::MASTER;

/// Default message used in exported commit lines when the recorded message
/// is empty.
const EXPORT_COMMIT_MESSAGE: &str = "My Commit";

/// Turns the accepted-command history into a literal git script.
///
/// The translator simulates which branch a real git session would be on
/// (`tracked`), independently of the live graph, and only emits `checkout`
/// lines when the simulated branch has to move.
pub struct GitExportTranslator {
    lines: Vec<String>,
    tracked: String,
}

impl GitExportTranslator {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            tracked: MASTER.to_string(),
        }
    }

    /// Translate a whole history in one go.
    pub fn translate(history: &[Command]) -> String {
        let mut translator = Self::new();
        for command in history {
            translator.push(command);
        }
        translator.script()
    }

    /// Feed the next history entry into the script.
    pub fn push(&mut self, command: &Command) {
        match command.kind {
            CommandKind::Destroy => {
                // Everything emitted so far no longer leads to the end state.
                // The tracked branch deliberately survives, as in the
                // original implementation.
                self.lines.clear();
            }
            CommandKind::Commit => {
                let restore = self.tracked.clone();
                if let Some(branch) = command.branch_a.as_deref() {
                    self.checkout(branch);
                }

                let message = match command.message.as_deref() {
                    Some(m) if !m.is_empty() => escape_message(m),
                    _ => EXPORT_COMMIT_MESSAGE.to_string(),
                };
                self.lines.push(format!("git commit -m \"{}\"", message));

                self.checkout(&restore);
            }
            CommandKind::MergeToSelf => {
                let source = command.branch_a.as_deref().unwrap_or_default();
                self.lines.push(format!("git merge {}", source));
            }
            CommandKind::MergeAB => {
                let restore = self.tracked.clone();
                if let Some(target) = command.branch_b.as_deref() {
                    self.checkout(target);
                }
                let source = command.branch_a.as_deref().unwrap_or_default();
                self.lines.push(format!("git merge {}", source));
                self.checkout(&restore);
            }
            CommandKind::CheckoutExisting => {
                if let Some(branch) = command.branch_a.as_deref() {
                    self.checkout(branch);
                }
            }
            CommandKind::BranchNewAB => {
                let target = command.branch_b.as_deref().unwrap_or_default();
                match command.branch_a.as_deref() {
                    Some(source) if source != self.tracked => {
                        self.lines
                            .push(format!("git checkout -b {} {}", target, source));
                    }
                    _ => {
                        self.lines.push(format!("git checkout -b {}", target));
                    }
                }
                self.tracked = target.to_string();
            }
            // Nothing to reproduce for these
            CommandKind::Status
            | CommandKind::BranchShowCurrent
            | CommandKind::None
            | CommandKind::Help
            | CommandKind::Clear
            | CommandKind::Undo
            | CommandKind::Redo => {}
        }
    }

    /// The optimized script: consecutive bare `checkout` lines collapse to
    /// the last one.
    pub fn script(&self) -> String {
        let mut optimized: Vec<&str> = Vec::new();
        let mut previous_was_checkout = false;

        for line in &self.lines {
            if is_bare_checkout(line) {
                if previous_was_checkout {
                    optimized.pop();
                }
                previous_was_checkout = true;
            } else {
                previous_was_checkout = false;
            }
            optimized.push(line);
        }

        optimized.join("\n")
    }

    /// Emit a `checkout` line if the simulated branch has to move.
    fn checkout(&mut self, branch: &str) {
        if !branch.is_empty() && branch != self.tracked {
            self.tracked = branch.to_string();
            self.lines.push(format!("git checkout {}", branch));
        }
    }
}

impl Default for GitExportTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// A plain `git checkout <name>` line, as opposed to `git checkout -b ...`.
fn is_bare_checkout(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    words.len() > 2 && words[1] == "checkout" && words[2] != "-b"
}

fn escape_message(message: &str) -> String {
    message.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_line;
    use crate::graph::GraphStateMachine;

    /// Build a history by running lines through a live machine, so the
    /// translator sees exactly what a session would record.
    fn history_of(lines: &[&str]) -> Vec<Command> {
        let mut machine = GraphStateMachine::new();
        for line in lines {
            machine
                .execute(parse_line(line).unwrap())
                .unwrap_or_else(|e| panic!("'{}' failed: {}", line, e));
        }
        machine.history().to_vec()
    }

    #[test]
    fn test_commit_checkout_commit() {
        let history = history_of(&[
            "commit master 'x'",
            "branch master b1",
            "checkout b1",
            "commit b1 'y'",
        ]);
        let script = GitExportTranslator::translate(&history);
        assert_eq!(
            script,
            "git commit -m \"x\"\ngit checkout -b b1\ngit commit -m \"y\""
        );
    }

    #[test]
    fn test_commit_on_other_branch_switches_and_restores() {
        let history = history_of(&["checkout -b dev", "commit master 'on master'"]);
        let script = GitExportTranslator::translate(&history);
        assert_eq!(
            script,
            "git checkout -b dev\n\
             git checkout master\n\
             git commit -m \"on master\"\n\
             git checkout dev"
        );
    }

    #[test]
    fn test_consecutive_bare_checkouts_collapse() {
        let mut translator = GitExportTranslator::new();
        translator.push(&parse_line("checkout a").unwrap());
        translator.push(&parse_line("checkout b").unwrap());
        translator.push(&parse_line("commit -m 'z'").unwrap());

        assert_eq!(
            translator.script(),
            "git checkout b\ngit commit -m \"z\""
        );
    }

    #[test]
    fn test_collapse_leaves_no_adjacent_bare_checkouts() {
        let history = history_of(&[
            "branch a",
            "branch b",
            "commit a 'seed a'",
            "commit b 'seed b'",
            "checkout a",
            "checkout b",
            "commit 'z'",
        ]);
        let script = GitExportTranslator::translate(&history);
        let lines: Vec<&str> = script.lines().collect();

        for pair in lines.windows(2) {
            assert!(
                !(is_bare_checkout(pair[0]) && is_bare_checkout(pair[1])),
                "adjacent bare checkouts survived: {:?}",
                pair
            );
        }
        assert_eq!(*lines.last().unwrap(), "git commit -m \"z\"");
        assert_eq!(lines[lines.len() - 2], "git checkout b");
    }

    #[test]
    fn test_checkout_to_tracked_branch_is_silent() {
        let history = history_of(&["checkout master", "status", "branch"]);
        assert_eq!(GitExportTranslator::translate(&history), "");
    }

    #[test]
    fn test_merge_to_self_emits_plain_merge() {
        let history = history_of(&["checkout -b dev", "commit 'w'", "merge master"]);
        let script = GitExportTranslator::translate(&history);
        assert!(script.ends_with("git merge master"));
    }

    #[test]
    fn test_merge_ab_switches_and_restores() {
        let history = history_of(&["checkout -b dev", "commit 'w'", "merge dev master"]);
        let script = GitExportTranslator::translate(&history);
        assert_eq!(
            script,
            "git checkout -b dev\n\
             git commit -m \"w\"\n\
             git checkout master\n\
             git merge dev\n\
             git checkout dev"
        );
    }

    #[test]
    fn test_branch_with_remote_start_point() {
        let history = history_of(&["checkout -b dev", "branch master b2"]);
        let script = GitExportTranslator::translate(&history);
        assert!(script.ends_with("git checkout -b b2 master"));
    }

    #[test]
    fn test_destroy_discards_earlier_lines() {
        let history = history_of(&["commit 'x'", "destroy"]);
        // The accepted destroy wiped the earlier entries from history too
        assert_eq!(history.len(), 1);
        assert_eq!(GitExportTranslator::translate(&history), "");
    }

    #[test]
    fn test_destroy_mid_stream_keeps_later_lines() {
        // Feed the translator directly; a live history cannot contain
        // entries before a destroy, but the translator handles it anyway.
        let mut translator = GitExportTranslator::new();
        translator.push(&parse_line("commit 'x'").unwrap());
        translator.push(&parse_line("destroy").unwrap());
        translator.push(&parse_line("commit 'y'").unwrap());
        assert_eq!(translator.script(), "git commit -m \"y\"");
    }

    #[test]
    fn test_empty_message_defaults_in_export() {
        let mut translator = GitExportTranslator::new();
        let mut cmd = parse_line("commit").unwrap();
        cmd.message = Some(String::new());
        translator.push(&cmd);
        assert_eq!(translator.script(), "git commit -m \"My Commit\"");
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let mut translator = GitExportTranslator::new();
        let mut cmd = parse_line("commit").unwrap();
        cmd.message = Some("say \"hi\" now".to_string());
        translator.push(&cmd);
        assert_eq!(
            translator.script(),
            "git commit -m \"say \\\"hi\\\" now\""
        );
    }
}
