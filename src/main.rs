use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gitsketch::config::Config;
use gitsketch::session::{Session, SessionReply};
use gitsketch::ui::App;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::panic;

fn main() -> io::Result<()> {
    // Load configuration, falling back to defaults on first run
    let config = Config::load().unwrap_or_else(|_| Config::default_config());

    let mut session = Session::with_config(&config);

    // An optional script file argument seeds the session before the UI opens
    if let Some(path) = std::env::args().nth(1) {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error reading '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        for (number, reply) in session.load_script(&contents).iter().enumerate() {
            if let SessionReply::Error(message) = reply {
                eprintln!("{}:{}: {}", path, number + 1, message);
                std::process::exit(1);
            }
        }
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
