use crate::config::{Config, Orientation};
use crate::session::{Session, SessionReply};
use crate::ui::console::ConsoleWidget;
use crate::ui::graph_panel::GraphPanel;
use crate::ui::help::HelpScreen;
use crate::ui::input::InputWidget;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::fs;
use std::io;
use std::time::Duration;

const EXPORT_FILE: &str = "gitsketch-export.sh";

/// Main application state
pub struct App {
    session: Session,
    config: Config,
    should_quit: bool,

    // Widgets
    input: InputWidget,
    console: ConsoleWidget,
    help: HelpScreen,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let console = ConsoleWidget::new(config.ui.max_console_lines);
        let mut help = HelpScreen::new();
        if config.behavior.show_help_on_start {
            help.show();
        }

        Self {
            session,
            config,
            should_quit: false,
            input: InputWidget::new(),
            console,
            help,
        }
    }

    /// Run the application event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll with a 100ms timeout so a resize repaints promptly
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(ratatui::widgets::Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Graph + console
                Constraint::Length(3), // Input
                Constraint::Length(1), // Status
            ])
            .split(frame.area());

        let title = format!(
            "Gitsketch - on branch '{}'",
            self.session.machine().current_branch_name()
        );
        let title_block = Block::default()
            .title(title)
            .title_alignment(ratatui::layout::Alignment::Left)
            .borders(Borders::ALL);
        frame.render_widget(title_block, chunks[0]);

        // Graph and console split per the configured orientation
        let panel_direction = match self.config.ui.orientation {
            Orientation::Vertical => Direction::Vertical,
            Orientation::Horizontal => Direction::Horizontal,
        };
        let panels = Layout::default()
            .direction(panel_direction)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        frame.render_widget(GraphPanel::new(self.session.machine().state()), panels[0]);
        frame.render_widget(&self.console, panels[1]);
        frame.render_widget(&self.input, chunks[2]);

        let status = if self.help.visible {
            "Esc: close help"
        } else {
            "Enter: submit | help: commands | Ctrl+Z/Y: undo/redo | Ctrl+S: export | Ctrl+Q: quit"
        };
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );

        if self.help.visible {
            let area = centered_rect(80, 80, frame.area());
            self.help.render(frame, area);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.help.hide();
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                }
                KeyCode::Char('z') | KeyCode::Char('Z')
                    if key.modifiers.contains(KeyModifiers::SHIFT) =>
                {
                    self.session.submit("redo");
                }
                KeyCode::Char('z') => {
                    self.session.submit("undo");
                }
                KeyCode::Char('y') => {
                    self.session.submit("redo");
                }
                KeyCode::Char('s') => {
                    self.save_export();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_line(),
            KeyCode::PageUp => self.console.scroll_up(),
            KeyCode::PageDown => self.console.scroll_down(),
            _ => {
                self.input.handle_key(key);
            }
        }
    }

    fn submit_line(&mut self) {
        let line = self.input.take_input();
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        // Echo everything except the clear command itself, which would
        // immediately undo the clearing.
        if line != "clear" {
            self.console.echo(&format!("> {}", line));
        }

        match self.session.submit(line) {
            SessionReply::Silent => {}
            SessionReply::Output(text) => self.console.info(&text),
            SessionReply::Error(text) => self.console.error(&text),
            SessionReply::ClearConsole => self.console.clear(),
            SessionReply::ShowHelp => self.help.show(),
        }
    }

    fn save_export(&mut self) {
        let script = self.session.export_script();
        match fs::write(EXPORT_FILE, &script) {
            Ok(()) => self.console.info(&format!("Saved git script to {}", EXPORT_FILE)),
            Err(e) => self.console.error(&format!("Could not save script: {}", e)),
        }
    }

    #[cfg(test)]
    fn session(&self) -> &Session {
        &self.session
    }
}

/// A centered rect taking the given percentages of the outer area.
fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    area: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
