use action::Action;
use keymap::{Config, KeyMapConfig};
use palpda::{
    report::format_verdict, validate, PushdownAutomaton, State, TraceCursor, SAMPLE_INPUTS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const BLOCK_PADDING: Padding = Padding::new(1, 1, 0, 0);
const ARROW: &str = " ──▶ ";

pub struct App {
    entry: String,
    machine: Option<PushdownAutomaton>,
    cursor: TraceCursor,
    message: String,
    show_help: bool,
    sample_index: usize,
    pub(crate) keymap: Config<Action>,
}

impl App {
    pub fn new(entry: String) -> Self {
        Self {
            entry,
            machine: None,
            cursor: TraceCursor::default(),
            message: "Enter a string and press Enter to start. F1 for help.".to_string(),
            show_help: false,
            sample_index: 0,
            keymap: Action::keymap_config(),
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let inner_area = f.area().inner(Margin::new(1, 0));

        // Input, Diagram, Middle (Tape + Stack), Status
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input entry
                Constraint::Length(6), // State diagram
                Constraint::Min(0),    // Tape and stack
                Constraint::Length(3), // Status/controls
            ])
            .split(inner_area);

        self.render_entry(f, main_chunks[0]);
        self.render_diagram(f, main_chunks[1]);

        let middle_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Tape
                Constraint::Length(1),
                Constraint::Percentage(35), // Stack
            ])
            .split(main_chunks[2]);

        if self.show_help {
            self.render_help(f, middle_chunks[0]);
        } else {
            self.render_tape(f, middle_chunks[0]);
        }
        self.render_stack(f, middle_chunks[2]);

        self.render_status(f, main_chunks[3]);
    }

    fn render_entry(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Input: ", Style::default().fg(Color::Yellow)),
            Span::raw(self.entry.as_str()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]);

        let paragraph = Paragraph::new(line)
            .block(block("PDA Palindrome Visualizer").title_alignment(Alignment::Center));
        f.render_widget(paragraph, area);
    }

    fn render_diagram(&self, f: &mut Frame, area: Rect) {
        let active = self.cursor.current().map(|c| c.state);

        // Node labels are laid out left to right; keep their centers for loops and edges.
        let mut nodes = Vec::new();
        let mut centers = Vec::new();
        let mut column = 0;
        for (i, state) in State::ALL.iter().enumerate() {
            if i > 0 {
                nodes.push(Span::raw(ARROW));
                column += ARROW.chars().count();
            }

            let label = if state.is_accepting() {
                format!("(( {} ))", state.name())
            } else {
                format!("( {} )", state.name())
            };
            let width = label.chars().count();
            centers.push(column + width / 2);
            column += width;

            let style = if active == Some(*state) {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            nodes.push(Span::styled(label, style));
        }

        let push = centers[0];
        let pop = centers[2];

        let mut loops = vec![' '; column];
        loops[push] = '↻';
        loops[pop] = '↻';

        let mut edge = vec![' '; column];
        edge[push] = '╰';
        edge[pop] = '▲';
        for cell in edge.iter_mut().take(pop).skip(push + 1) {
            *cell = '─';
        }

        let lines = vec![
            Line::from(loops.into_iter().collect::<String>()),
            Line::from(nodes),
            Line::from(edge.into_iter().collect::<String>()),
        ];

        f.render_widget(section("Automaton", lines), area);
    }

    fn render_tape(&self, f: &mut Frame, area: Rect) {
        let Some(machine) = &self.machine else {
            f.render_widget(
                section("Input Tape", vec![Line::from("No input yet.")]),
                area,
            );
            return;
        };

        let position = self.cursor.current().map(|c| c.position);

        let cells: Vec<Span> = machine
            .input()
            .iter()
            .enumerate()
            .map(|(i, &symbol)| {
                if Some(i) == position {
                    Span::styled(
                        format!(" {symbol} "),
                        Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(format!(" {symbol} "), Style::default())
                }
            })
            .collect();

        let mut lines = vec![Line::from(cells), Line::from("")];

        match self.cursor.current() {
            Some(config) => {
                let symbol = machine.input().get(config.position).copied().unwrap_or(' ');
                lines.push(Line::from(Span::styled(
                    format!("Position: {} (symbol: '{}')", config.position, symbol),
                    Style::default().fg(Color::Cyan),
                )));
                lines.push(Line::from(vec![
                    Span::styled("Step: ", Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{}/{}", self.cursor.index() + 1, self.cursor.len())),
                    Span::styled(" | State: ", Style::default().fg(Color::Yellow)),
                    Span::raw(config.state.name()),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                "Rejected: no accepting path to display.",
                Style::default().fg(Color::Red),
            ))),
        }

        let paragraph = section("Input Tape", lines).wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_stack(&self, f: &mut Frame, area: Rect) {
        let stack = self
            .cursor
            .current()
            .map(|c| c.stack.as_slice())
            .unwrap_or_default();

        let lines = if stack.is_empty() {
            vec![Line::from(Span::styled(
                "(empty)",
                Style::default().fg(Color::Gray),
            ))]
        } else {
            // Top of the stack is drawn first.
            stack
                .iter()
                .rev()
                .enumerate()
                .map(|(i, symbol)| {
                    let mut spans = vec![Span::raw(format!("│ {symbol} │"))];
                    if i == 0 {
                        spans.push(Span::styled(" ◀ top", Style::default().fg(Color::Cyan)));
                    }
                    Line::from(spans)
                })
                .chain(std::iter::once(Line::from("└───┘")))
                .collect()
        };

        f.render_widget(section("Stack", lines), area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from("Controls:"),
            Line::from("  Enter - Start (decide the entered string)"),
            Line::from("  ←     - Previous step"),
            Line::from("  →     - Next step"),
            Line::from("  Tab   - Load the next sample word"),
            Line::from("  F1    - Toggle this help"),
            Line::from("  Esc   - End"),
            Line::from(""),
            Line::from("The automaton pushes the first half in q_push, skips the middle"),
            Line::from("symbol of odd-length input in q_skip and matches the second half"),
            Line::from("against the stack in q_pop. Case is ignored; 'ε' marks the end."),
        ];

        f.render_widget(section("Help", help_text), area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let keys = "Enter Start | ← Previous | → Next | Esc End";
        let outer = block("Status");
        let inner = outer.inner(area);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(keys.chars().count() as u16),
            ])
            .split(inner);

        let status = Line::from(Span::raw(self.message.as_str()));
        let hints = Text::from(
            Line::from(Span::styled(keys, Style::default().fg(Color::Yellow))).right_aligned(),
        );

        f.render_widget(outer, area);
        f.render_widget(status, chunks[0]);
        f.render_widget(hints, chunks[1]);
    }

    /// Validates the entry, runs the automaton and shows the first configuration.
    pub fn start(&mut self) {
        let input = match validate(&self.entry) {
            Ok(input) => input.to_string(),
            Err(e) => {
                self.machine = None;
                self.cursor = TraceCursor::default();
                self.message = format!("Error: {}", e);
                return;
            }
        };

        let machine = PushdownAutomaton::new(&input);
        let decision = machine.decide();

        self.message = if decision.trace.is_empty() {
            "Rejected".to_string()
        } else {
            format_verdict(&input, decision.accepted)
        };
        self.cursor = TraceCursor::new(decision.trace);
        self.machine = Some(machine);
    }

    /// Shows the next configuration. Does nothing on the last one, leaving the verdict
    /// in the status line.
    pub fn next_step(&mut self) {
        self.cursor.step_forward();
    }

    /// Shows the previous configuration. Does nothing on the first one.
    pub fn previous_step(&mut self) {
        self.cursor.step_back();
    }

    pub fn next_sample(&mut self) {
        self.entry = SAMPLE_INPUTS[self.sample_index].to_string();
        self.sample_index = (self.sample_index + 1) % SAMPLE_INPUTS.len();
        self.message = format!("Loaded sample '{}'. Press Enter to start.", self.entry);
    }

    pub fn type_char(&mut self, c: char) {
        self.entry.push(c);
    }

    pub fn backspace(&mut self) {
        self.entry.pop();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

fn section<'a>(title: &'a str, content: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(content).block(block(title))
}

fn block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
        .padding(BLOCK_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_accepts_palindrome() {
        let mut app = App::new("abba".to_string());
        app.start();

        assert_eq!(app.message, "Accepted: abba");
        assert_eq!(app.cursor.index(), 0);
        assert_eq!(app.cursor.current().map(|c| c.state), Some(State::Push));
    }

    #[test]
    fn test_start_rejects_non_palindrome() {
        let mut app = App::new("hello".to_string());
        app.start();

        assert_eq!(app.message, "Rejected");
        assert!(app.cursor.is_empty());
        assert!(app.machine.is_some());
    }

    #[test]
    fn test_start_validates_entry() {
        let mut app = App::new(" a ".to_string());
        app.start();

        assert_eq!(app.message, "Error: String must have at least 2 characters.");
        assert!(app.machine.is_none());
    }

    #[test]
    fn test_step_navigation() {
        let mut app = App::new("aba".to_string());
        app.start();

        app.previous_step();
        assert_eq!(app.cursor.index(), 0);
        assert_eq!(app.message, "Accepted: aba");

        for _ in 0..4 {
            app.next_step();
        }
        assert_eq!(app.cursor.current().map(|c| c.state), Some(State::Accept));

        app.next_step();
        assert_eq!(app.cursor.index(), 4);
        assert_eq!(app.message, "Accepted: aba");

        app.previous_step();
        assert_eq!(app.cursor.current().map(|c| c.state), Some(State::Pop));
        assert_eq!(app.message, "Accepted: aba");
    }

    #[test]
    fn test_editing_and_samples() {
        let mut app = App::new(String::new());
        app.type_char('n');
        app.type_char('x');
        app.backspace();
        assert_eq!(app.entry, "n");

        app.next_sample();
        assert_eq!(app.entry, SAMPLE_INPUTS[0]);
        app.next_sample();
        assert_eq!(app.entry, SAMPLE_INPUTS[1]);
    }
}
