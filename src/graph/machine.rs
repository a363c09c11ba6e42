use crate::command::{Command, CommandKind, DEFAULT_COMMIT_MESSAGE};
use crate::error::SemanticError;
use crate::graph::renderer::{NullRenderer, RenderHandle, Renderer};
use crate::graph::state::{DEFAULT_AUTHOR, GraphState, INITIAL_COMMIT_MESSAGE, MASTER};

/// Owns the graph and the accepted-command log, and is the only way to
/// mutate either.
///
/// Undo and redo never walk the graph backwards: they rebuild it from
/// scratch by replaying the remaining history. The graph is therefore always
/// a pure function of the log. Each undo/redo costs O(history length), which
/// is fine at human command rates.
pub struct GraphStateMachine {
    state: GraphState,
    history: Vec<Command>,
    redo_stack: Vec<Command>,
    renderer: Box<dyn Renderer>,
    // Renderer handle per branch, same order as state.branches()
    handles: Vec<RenderHandle>,
    author: String,
}

impl GraphStateMachine {
    pub fn new() -> Self {
        Self::with_author(DEFAULT_AUTHOR)
    }

    pub fn with_author(author: impl Into<String>) -> Self {
        Self::with_renderer(author, Box::new(NullRenderer::default()))
    }

    pub fn with_renderer(author: impl Into<String>, renderer: Box<dyn Renderer>) -> Self {
        let author = author.into();
        let mut machine = Self {
            state: GraphState::new(&author),
            history: Vec::new(),
            redo_stack: Vec::new(),
            renderer,
            handles: Vec::new(),
            author,
        };
        machine.reset_graph();
        machine
    }

    pub fn state(&self) -> &GraphState {
        &self.state
    }

    /// The accepted-command log, oldest first.
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn current_branch_name(&self) -> &str {
        &self.state.current_branch().name
    }

    /// Execute one command. On success it is appended to the history and the
    /// redo stack is cleared; on failure nothing changes and the error is
    /// returned verbatim.
    pub fn execute(&mut self, command: Command) -> Result<String, SemanticError> {
        let message = self.apply(&command)?;

        // An accepted destroy starts the log over; it is recorded itself so
        // that it can be undone.
        if command.kind == CommandKind::Destroy {
            self.history.clear();
        }

        self.history.push(command);
        self.redo_stack.clear();
        Ok(message)
    }

    /// Undo the most recent accepted command by replaying everything before
    /// it. No-op if the history is empty.
    pub fn undo(&mut self) {
        if let Some(command) = self.history.pop() {
            self.redo_stack.push(command);
            self.replay();
        }
    }

    /// Re-apply the most recently undone command. No-op if nothing has been
    /// undone since the last executed command.
    pub fn redo(&mut self) {
        if let Some(command) = self.redo_stack.pop() {
            self.history.push(command);
            self.replay();
        }
    }

    /// Reset everything: graph, history and redo stack. Used when a script
    /// replaces the session wholesale, not by the `destroy` command.
    pub fn hard_reset(&mut self) {
        self.reset_graph();
        self.history.clear();
        self.redo_stack.clear();
    }

    /// Apply a command to the graph without touching history or redo stack.
    fn apply(&mut self, command: &Command) -> Result<String, SemanticError> {
        match command.kind {
            CommandKind::Destroy => {
                self.reset_graph();
                Ok("Graph was destroyed.".to_string())
            }
            CommandKind::Commit => self.apply_commit(command),
            CommandKind::MergeToSelf => {
                let source = command.branch_a.clone().unwrap_or_default();
                let target = self.state.current_branch().name.clone();
                self.merge(&source, &target)?;
                Ok(String::new())
            }
            CommandKind::MergeAB => {
                let source = command.branch_a.clone().unwrap_or_default();
                let target = command.branch_b.clone().unwrap_or_default();
                self.merge(&source, &target)?;
                Ok(String::new())
            }
            CommandKind::CheckoutExisting => {
                let name = command.branch_a.as_deref().unwrap_or_default();
                let id = self.state.require(name)?;
                self.state.set_current(id);
                Ok(format!("On branch '{}'", self.current_branch_name()))
            }
            CommandKind::Status | CommandKind::BranchShowCurrent => {
                Ok(format!("On branch '{}'", self.current_branch_name()))
            }
            CommandKind::BranchNewAB => self.apply_branch_new(command),
            // Help, clear, undo and redo are session-level commands; they
            // never reach the graph.
            CommandKind::None
            | CommandKind::Help
            | CommandKind::Clear
            | CommandKind::Undo
            | CommandKind::Redo => Err(SemanticError::UnknownCommand(command.source.clone())),
        }
    }

    fn apply_commit(&mut self, command: &Command) -> Result<String, SemanticError> {
        let name = match command.branch_a.as_deref() {
            Some(branch) => branch.to_string(),
            None => self.state.current_branch().name.clone(),
        };
        let id = self.state.require(&name)?;

        // The renderer cannot draw a commit whose parent branch is still
        // empty; refuse it and leave the graph alone.
        if let Some(parent) = self.state.branch(id).parent
            && self.state.branch(parent).commits.is_empty()
        {
            return Err(SemanticError::RenderingConstraintViolated(name));
        }

        let message = command
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_COMMIT_MESSAGE)
            .to_string();

        self.renderer
            .commit(self.handles[id.index()], &message, &self.author)
            .map_err(|_| SemanticError::RenderingConstraintViolated(name))?;

        self.state.add_commit(id, &message, &self.author);
        Ok(String::new())
    }

    fn apply_branch_new(&mut self, command: &Command) -> Result<String, SemanticError> {
        let name = command.branch_b.clone().unwrap_or_default();
        if self.state.find(&name).is_some() {
            return Err(SemanticError::BranchAlreadyExists(name));
        }

        let parent_name = match command.branch_a.as_deref() {
            Some(branch) => branch.to_string(),
            None => self.state.current_branch().name.clone(),
        };
        let parent = self.state.require(&parent_name)?;

        let id = self.state.add_branch(&name, parent);
        let handle = self
            .renderer
            .create_branch(Some(self.handles[parent.index()]), &name);
        self.handles.push(handle);

        if command.checkout {
            self.state.set_current(id);
        }
        Ok(format!("On branch '{}'", self.current_branch_name()))
    }

    /// Append a merge commit linking `source` into `target`.
    fn merge(&mut self, source: &str, target: &str) -> Result<(), SemanticError> {
        let source_id = self.state.require(source)?;
        let target_id = self.state.require(target)?;

        let message = format!(
            "Merged branch '{}' into '{}'",
            self.state.branch(source_id).name,
            self.state.branch(target_id).name
        );

        self.renderer
            .merge(
                self.handles[source_id.index()],
                self.handles[target_id.index()],
                &message,
            )
            .map_err(|_| SemanticError::RenderingConstraintViolated(target.to_string()))?;

        self.state.add_commit(target_id, &message, &self.author);
        Ok(())
    }

    /// Rebuild the graph from scratch by re-executing the whole history.
    fn replay(&mut self) {
        self.reset_graph();
        let history = std::mem::take(&mut self.history);
        for command in &history {
            // Every entry was accepted once and replays deterministically.
            let _ = self.apply(command);
        }
        self.history = history;
    }

    fn reset_graph(&mut self) {
        self.state = GraphState::new(&self.author);
        self.renderer.reset();
        self.handles.clear();

        let master = self.renderer.create_branch(None, MASTER);
        self.handles.push(master);
        let _ = self
            .renderer
            .commit(master, INITIAL_COMMIT_MESSAGE, &self.author);
    }
}

impl Default for GraphStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
