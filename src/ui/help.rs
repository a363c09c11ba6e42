use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// The command reference overlay, toggled by the `help` command.
pub struct HelpScreen {
    pub visible: bool,
}

const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show this help message."),
    ("clear", "Clears the console output."),
    ("undo | u", "Undoes the last action."),
    ("redo | r", "Replays the last undone action."),
    ("destroy", "Destroys the current graph."),
    ("status | branch", "Show the current branch."),
    (
        "commit [[-m] \"message\"]",
        "Make a commit on the current branch with an optional message.",
    ),
    (
        "commit <branch> [[-m] \"message\"]",
        "Make a commit on the specified branch.",
    ),
    ("(co | checkout) <branch>", "Switch to a particular branch."),
    (
        "(co | checkout) -b <branch> [<start_point>]",
        "Create a new branch and switch to it.",
    ),
    ("branch <branch>", "Create a new branch off the current one."),
    (
        "branch <source> <target>",
        "Create branch <target> starting at <source>.",
    ),
    (
        "merge <branch>",
        "Merge the specified branch into the current branch.",
    ),
    (
        "merge <source> <target>",
        "Merge the source branch into the target branch.",
    ),
];

const SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Submit the typed command"),
    ("Up / Down", "Recall earlier commands"),
    ("Ctrl+Z", "Undo"),
    ("Ctrl+Y / Ctrl+Shift+Z", "Redo"),
    ("Ctrl+S", "Save the graph as a runnable git script"),
    ("PgUp / PgDn", "Scroll the console"),
    ("Esc", "Close this help"),
    ("Ctrl+Q", "Quit"),
];

impl HelpScreen {
    pub fn new() -> Self {
        HelpScreen { visible: false }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Gitsketch Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Type git-like commands to grow the branch graph.",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Commands:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for (syntax, explanation) in COMMANDS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:44}", syntax), Style::default().fg(Color::Cyan)),
                Span::raw(*explanation),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Keyboard:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        for (keys, explanation) in SHORTCUTS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:24}", keys), Style::default().fg(Color::Cyan)),
                Span::raw(*explanation),
            ]));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
