use crate::error::SemanticError;

/// Name of the root branch every fresh graph starts with.
pub const MASTER: &str = "master";

/// Message of the commit every fresh graph is seeded with.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit.";

/// Author recorded on commits when no other author is configured.
pub const DEFAULT_AUTHOR: &str = "Chuck Norris <gmail@chucknorris.com>";

/// Index of a branch within a [`GraphState`]. Stable for the lifetime of the
/// state: branches are only ever appended, never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchId(usize);

impl BranchId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable commit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub message: String,
    pub author: String,
}

/// A named, linear, append-only list of commits with at most one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub parent: Option<BranchId>,
    pub commits: Vec<Commit>,
}

/// The branch/commit graph: plain owned data, branches addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphState {
    branches: Vec<Branch>,
    current: BranchId,
}

impl GraphState {
    /// Fresh graph: a single `master` branch holding one seeded commit.
    pub fn new(author: &str) -> Self {
        let master = Branch {
            name: MASTER.to_string(),
            parent: None,
            commits: vec![Commit {
                message: INITIAL_COMMIT_MESSAGE.to_string(),
                author: author.to_string(),
            }],
        };
        Self {
            branches: vec![master],
            current: BranchId(0),
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, id: BranchId) -> &Branch {
        &self.branches[id.0]
    }

    pub fn current(&self) -> BranchId {
        self.current
    }

    pub fn current_branch(&self) -> &Branch {
        self.branch(self.current)
    }

    /// Look up a branch by name.
    pub fn find(&self, name: &str) -> Option<BranchId> {
        self.branches
            .iter()
            .position(|b| b.name == name)
            .map(BranchId)
    }

    /// Look up a branch by name, failing with `BranchNotFound`.
    pub fn require(&self, name: &str) -> Result<BranchId, SemanticError> {
        self.find(name)
            .ok_or_else(|| SemanticError::BranchNotFound(name.to_string()))
    }

    /// Switch the current branch.
    pub fn set_current(&mut self, id: BranchId) {
        self.current = id;
    }

    /// Append a new branch. The caller has already checked name uniqueness.
    pub fn add_branch(&mut self, name: &str, parent: BranchId) -> BranchId {
        self.branches.push(Branch {
            name: name.to_string(),
            parent: Some(parent),
            commits: Vec::new(),
        });
        BranchId(self.branches.len() - 1)
    }

    /// Append a commit to a branch.
    pub fn add_commit(&mut self, id: BranchId, message: &str, author: &str) {
        self.branches[id.0].commits.push(Commit {
            message: message.to_string(),
            author: author.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_seeded_master() {
        let state = GraphState::new(DEFAULT_AUTHOR);
        assert_eq!(state.branches().len(), 1);

        let master = state.current_branch();
        assert_eq!(master.name, MASTER);
        assert_eq!(master.parent, None);
        assert_eq!(master.commits.len(), 1);
        assert_eq!(master.commits[0].message, INITIAL_COMMIT_MESSAGE);
        assert_eq!(master.commits[0].author, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_find_and_require() {
        let state = GraphState::new(DEFAULT_AUTHOR);
        assert!(state.find(MASTER).is_some());
        assert!(state.find("nope").is_none());
        assert_eq!(
            state.require("nope").unwrap_err(),
            SemanticError::BranchNotFound("nope".into())
        );
    }

    #[test]
    fn test_add_branch_and_commit() {
        let mut state = GraphState::new(DEFAULT_AUTHOR);
        let master = state.current();
        let feature = state.add_branch("feature", master);

        assert_eq!(state.branch(feature).name, "feature");
        assert_eq!(state.branch(feature).parent, Some(master));
        assert!(state.branch(feature).commits.is_empty());

        state.add_commit(feature, "work", DEFAULT_AUTHOR);
        assert_eq!(state.branch(feature).commits.len(), 1);

        // Creating a branch does not move the current branch
        assert_eq!(state.current(), master);
        state.set_current(feature);
        assert_eq!(state.current_branch().name, "feature");
    }
}
