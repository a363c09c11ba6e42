use crate::graph::{Branch, GraphState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// How many commit dots a branch row shows before eliding.
const MAX_DOTS: usize = 30;

/// Read-only projection of the branch/commit graph. Draws straight from
/// [`GraphState`]; it holds no handles into any rendering machinery.
pub struct GraphPanel<'a> {
    state: &'a GraphState,
}

impl<'a> GraphPanel<'a> {
    pub fn new(state: &'a GraphState) -> Self {
        Self { state }
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("On branch '{}'", self.state.current_branch().name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("─".repeat(60)));

        let name_width = self
            .state
            .branches()
            .iter()
            .map(|b| b.name.len())
            .max()
            .unwrap_or(0);

        for (index, branch) in self.state.branches().iter().enumerate() {
            let is_current = index == self.state.current().index();
            let text = branch_row(self.state, branch, is_current, name_width);
            let style = if is_current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines
    }
}

/// One branch as a single text row: marker, name, commit dots, count and the
/// newest commit message.
fn branch_row(state: &GraphState, branch: &Branch, is_current: bool, name_width: usize) -> String {
    let marker = if is_current { "*" } else { " " };

    let count = branch.commits.len();
    let dots = if count > MAX_DOTS {
        format!("…{}", "●".repeat(MAX_DOTS))
    } else {
        "●".repeat(count)
    };

    let commits = match count {
        1 => "1 commit".to_string(),
        n => format!("{} commits", n),
    };

    let origin = match branch.parent {
        Some(parent) => format!("  (from {})", state.branch(parent).name),
        None => String::new(),
    };

    let last = match branch.commits.last() {
        Some(commit) => format!("  \"{}\"", commit.message),
        None => String::new(),
    };

    format!(
        "{} {:name_width$}  {}  {}{}{}",
        marker, branch.name, dots, commits, origin, last
    )
}

impl Widget for GraphPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Graph");

        let paragraph = Paragraph::new(self.build_content()).block(block);
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_line;
    use crate::graph::GraphStateMachine;

    fn machine_with(lines: &[&str]) -> GraphStateMachine {
        let mut machine = GraphStateMachine::new();
        for line in lines {
            machine.execute(parse_line(line).unwrap()).unwrap();
        }
        machine
    }

    #[test]
    fn test_fresh_graph_rows() {
        let machine = machine_with(&[]);
        let master = &machine.state().branches()[0];
        let row = branch_row(machine.state(), master, true, 6);

        assert!(row.starts_with("* master"));
        assert!(row.contains("●"));
        assert!(row.contains("1 commit"));
        assert!(row.contains("\"Initial commit.\""));
    }

    #[test]
    fn test_child_branch_names_its_parent() {
        let machine = machine_with(&["branch dev"]);
        let dev = &machine.state().branches()[1];
        let row = branch_row(machine.state(), dev, false, 6);

        assert!(row.starts_with("  dev"));
        assert!(row.contains("0 commits"));
        assert!(row.contains("(from master)"));
    }

    #[test]
    fn test_current_marker_follows_checkout() {
        let machine = machine_with(&["checkout -b dev", "commit 'w'"]);
        let state = machine.state();

        let rows: Vec<String> = state
            .branches()
            .iter()
            .enumerate()
            .map(|(i, b)| branch_row(state, b, i == state.current().index(), 6))
            .collect();

        assert!(rows[0].starts_with("  master"));
        assert!(rows[1].starts_with("* dev"));
    }

    #[test]
    fn test_long_branches_elide_dots() {
        let mut machine = machine_with(&[]);
        for i in 0..40 {
            machine
                .execute(parse_line(&format!("commit 'c{}'", i)).unwrap())
                .unwrap();
        }
        let master = &machine.state().branches()[0];
        let row = branch_row(machine.state(), master, true, 6);
        assert!(row.contains('…'));
        assert!(row.contains("41 commits"));
    }
}
