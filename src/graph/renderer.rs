use thiserror::Error;

/// Opaque handle to a branch as the renderer knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHandle(pub usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Cannot draw commit on branch '{0}'")]
    CannotDraw(String),
}

/// Capability interface to whatever draws the graph.
///
/// The state machine drives this alongside its own bookkeeping and reflects
/// failures into its result; it makes no assumption about the visual
/// representation behind the handles.
pub trait Renderer {
    /// Drop everything that has been drawn so far.
    fn reset(&mut self);

    /// Record a new branch forked from `parent` (`None` for the root branch)
    /// and return a handle for it.
    fn create_branch(&mut self, parent: Option<RenderHandle>, name: &str) -> RenderHandle;

    /// Record a commit node on a branch. May refuse configurations the
    /// renderer cannot draw.
    fn commit(&mut self, branch: RenderHandle, message: &str, author: &str)
    -> Result<(), RenderError>;

    /// Record a merge of `source` into `target`.
    fn merge(
        &mut self,
        source: RenderHandle,
        target: RenderHandle,
        message: &str,
    ) -> Result<(), RenderError>;
}

/// Renderer that accepts everything and draws nothing. Used when the graph
/// is projected straight from [`GraphState`](crate::graph::GraphState), and
/// in tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next: usize,
}

impl Renderer for NullRenderer {
    fn reset(&mut self) {
        self.next = 0;
    }

    fn create_branch(&mut self, _parent: Option<RenderHandle>, _name: &str) -> RenderHandle {
        let handle = RenderHandle(self.next);
        self.next += 1;
        handle
    }

    fn commit(
        &mut self,
        _branch: RenderHandle,
        _message: &str,
        _author: &str,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn merge(
        &mut self,
        _source: RenderHandle,
        _target: RenderHandle,
        _message: &str,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
