pub mod machine;
pub mod renderer;
pub mod state;

pub use machine::GraphStateMachine;
pub use renderer::{NullRenderer, RenderError, RenderHandle, Renderer};
pub use state::{Branch, BranchId, Commit, GraphState};
