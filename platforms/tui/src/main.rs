mod app;

use action::Action;
use app::App;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use palpda::InputLoader;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Read;
use std::{error::Error, io, time::Duration};

/// A step-by-step visualizer for the palindrome pushdown automaton.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  palpda-tui racecar
  echo abba | palpda-tui")]
struct Cli {
    /// String to place in the input entry on startup.
    /// Can also be piped via stdin (first non-comment line).
    input: Option<String>,
}

/// Represents the state of the application loop.
#[derive(PartialEq)]
enum AppState {
    Running,
    ShouldQuit,
}

/// A wrapper around the terminal to ensure it's restored on drop.
struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Tui {
    /// Creates a new TUI.
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Errors are ignored; there is nothing left to do with them during drop.
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Read stdin before the alternate screen is entered so errors still reach stderr.
    let entry = match initial_entry(&cli) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let start = !entry.trim().is_empty();
    let mut app = App::new(entry);
    if start {
        app.start();
    }

    let mut tui = Tui::new()?;
    run_app(&mut tui.terminal, app)?;

    Ok(())
}

/// Picks the startup entry from the argument, then piped stdin, else empty.
fn initial_entry(cli: &Cli) -> Result<String, String> {
    if let Some(input) = &cli.input {
        Ok(input.clone())
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(InputLoader::load_inputs_from_string(&buffer)
            .into_iter()
            .next()
            .unwrap_or_default())
    } else {
        Ok(String::new())
    }
}

/// Runs the main application loop.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key_event(&mut app, key) == AppState::ShouldQuit
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Handles key events and updates the application state.
fn handle_key_event(app: &mut App, key: KeyEvent) -> AppState {
    if let Some(&action) = app.keymap.get(&key) {
        match action {
            Action::End => return AppState::ShouldQuit,
            Action::Start => app.start(),
            Action::Previous => app.previous_step(),
            Action::Next => app.next_step(),
            Action::ToggleHelp => app.toggle_help(),
            Action::NextSample => app.next_sample(),
        }
    } else {
        match key.code {
            KeyCode::Char(c) => app.type_char(c),
            KeyCode::Backspace => app.backspace(),
            _ => {}
        }
    }
    AppState::Running
}
