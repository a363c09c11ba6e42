use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// How a console line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of a submitted command, shown muted.
    Echo,
    /// Informational output.
    Info,
    /// A failure message.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Scrollback of submitted commands and their output.
pub struct ConsoleWidget {
    entries: Vec<ConsoleEntry>,
    /// Lines scrolled up from the bottom; 0 means pinned to the newest line.
    scroll_offset: usize,
    max_lines: usize,
}

impl ConsoleWidget {
    pub fn new(max_lines: usize) -> Self {
        Self {
            entries: Vec::new(),
            scroll_offset: 0,
            max_lines,
        }
    }

    /// Echo a submitted command.
    pub fn echo(&mut self, line: &str) {
        self.push(EntryKind::Echo, line);
    }

    /// Print informational output.
    pub fn info(&mut self, text: &str) {
        self.push(EntryKind::Info, text);
    }

    /// Print a failure message.
    pub fn error(&mut self, text: &str) {
        self.push(EntryKind::Error, &format!("Error: {}", text));
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_offset = 0;
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset < self.entries.len().saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn push(&mut self, kind: EntryKind, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.entries.push(ConsoleEntry {
            kind,
            text: text.to_string(),
        });
        if self.entries.len() > self.max_lines {
            let excess = self.entries.len() - self.max_lines;
            self.entries.drain(..excess);
        }
        // New output snaps the view back to the bottom
        self.scroll_offset = 0;
    }
}

impl Widget for &ConsoleWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Console");

        let visible_height = area.height.saturating_sub(2) as usize;
        let end = self.entries.len().saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(visible_height);

        let lines: Vec<Line> = self.entries[start..end]
            .iter()
            .map(|entry| {
                let style = match entry.kind {
                    EntryKind::Echo => Style::default().fg(Color::DarkGray),
                    EntryKind::Info => Style::default().fg(Color::Cyan),
                    EntryKind::Error => Style::default().fg(Color::Red),
                };
                Line::from(Span::styled(entry.text.clone(), style))
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(block);
        paragraph.render(area, buf);
    }
}
