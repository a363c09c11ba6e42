use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text input widget for git-like commands, with recall of previously
/// submitted lines on the up/down arrows.
pub struct InputWidget {
    input: String,
    cursor_position: usize,
    history: Vec<String>,
    history_index: usize,
}

impl InputWidget {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            history: Vec::new(),
            history_index: 0,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }

                self.input.insert(self.cursor_position, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    self.input.remove(self.cursor_position);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input.len() {
                    self.input.remove(self.cursor_position);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.len() {
                    self.cursor_position += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.input.len();
                true
            }
            KeyCode::Up => {
                self.recall_previous();
                true
            }
            KeyCode::Down => {
                self.recall_next();
                true
            }
            _ => false,
        }
    }

    /// Take the current input, record it in the recall history and clear
    /// the widget.
    pub fn take_input(&mut self) -> String {
        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;

        // When resubmitting a recalled line, move it to the end instead of
        // storing a duplicate.
        if self.history_index < self.history.len() {
            self.history.remove(self.history_index);
        }
        if !input.is_empty() {
            self.history.push(input.clone());
        }
        self.history_index = self.history.len();

        input
    }

    /// Get the current input (without clearing)
    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor_position = self.input.len();
    }

    fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history_index = self.history_index.saturating_sub(1);
        self.set_input(self.history[self.history_index].clone());
    }

    fn recall_next(&mut self) {
        if self.history_index >= self.history.len() {
            return;
        }
        self.history_index += 1;
        if self.history_index == self.history.len() {
            self.input.clear();
            self.cursor_position = 0;
        } else {
            self.set_input(self.history[self.history_index].clone());
        }
    }
}

impl Default for InputWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &InputWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let before = &self.input[..self.cursor_position];
        let after = &self.input[self.cursor_position..];
        let display_text = format!("> {}▊{}", before, after);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let paragraph = Paragraph::new(display_text)
            .style(Style::default().fg(Color::Yellow))
            .block(block);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn type_line(widget: &mut InputWidget, text: &str) {
        for c in text.chars() {
            widget.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_input_widget_creation() {
        let widget = InputWidget::new();
        assert_eq!(widget.get_input(), "");
        assert_eq!(widget.cursor_position, 0);
    }

    #[test]
    fn test_input_char_and_backspace() {
        let mut widget = InputWidget::new();
        type_line(&mut widget, "ab");
        assert_eq!(widget.get_input(), "ab");

        widget.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "a");
        assert_eq!(widget.cursor_position, 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut widget = InputWidget::new();
        type_line(&mut widget, "abc");
        assert_eq!(widget.cursor_position, 3);

        widget.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(widget.cursor_position, 2);

        widget.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert_eq!(widget.cursor_position, 0);

        widget.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert_eq!(widget.cursor_position, 3);
    }

    #[test]
    fn test_take_input_records_history() {
        let mut widget = InputWidget::new();
        type_line(&mut widget, "commit");
        assert_eq!(widget.take_input(), "commit");
        assert_eq!(widget.get_input(), "");
        assert_eq!(widget.history, vec!["commit"]);
    }

    #[test]
    fn test_history_recall_up_and_down() {
        let mut widget = InputWidget::new();
        type_line(&mut widget, "commit");
        widget.take_input();
        type_line(&mut widget, "status");
        widget.take_input();

        widget.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "status");
        widget.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "commit");

        widget.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "status");
        widget.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "");
    }

    #[test]
    fn test_resubmitting_recalled_line_moves_it() {
        let mut widget = InputWidget::new();
        for line in ["one", "two", "three"] {
            type_line(&mut widget, line);
            widget.take_input();
        }

        // Recall "two" and resubmit it
        widget.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        widget.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(widget.get_input(), "two");
        assert_eq!(widget.take_input(), "two");

        assert_eq!(widget.history, vec!["one", "three", "two"]);
    }

    #[test]
    fn test_ctrl_chars_are_ignored() {
        let mut widget = InputWidget::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!widget.handle_key(key));
        assert_eq!(widget.get_input(), "");
    }
}
