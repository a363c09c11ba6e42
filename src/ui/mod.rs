pub mod app;
pub mod console;
pub mod graph_panel;
pub mod help;
pub mod input;

pub use app::App;
pub use console::{ConsoleEntry, ConsoleWidget, EntryKind};
pub use graph_panel::GraphPanel;
pub use help::HelpScreen;
pub use input::InputWidget;
