//! JOBWIZ - Job Application Wizard
//!
//! A terminal wizard for assembling a job application dossier end to end:
//! opportunity and application first, then companies, contacts, documents,
//! products, scheduled events, and actions, closed off by a summary. The
//! session is written through to disk on every change, so quitting and
//! relaunching resumes exactly where the user left off.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, Route, WizardNavigator, WizardStore};
use infrastructure::{SessionRepository, DEFAULT_SESSION_FILE};
use presentation::{render_ui, InputHandler};

/// Entry point for the jobwiz terminal wizard.
///
/// Opens (or resumes) the wizard session, sets up the terminal interface,
/// and runs the main event loop until the user quits, cancels, or finishes
/// the dossier.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string());

    let store = WizardStore::open(SessionRepository::new(&session_file));
    let navigator = WizardNavigator::mount(store);
    let mut app = App::new(navigator);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    } else if let Some(Route::Opportunities) = app.navigator.take_route() {
        // The navigate-away destination of the full product; here the
        // success notice doubles as the toast.
        if let Some(message) = app.navigator.status_message() {
            println!("{message}");
        }
        println!("Returning to the opportunities list.");
    } else {
        println!("Wizard session saved to {session_file}; run jobwiz again to resume.");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the wizard and feeds key presses to the input handler until the
/// user quits with the session kept, or the navigator routes away after a
/// finish or a confirmed cancel.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.can_quit() => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }

        if app.should_exit() {
            return Ok(());
        }
    }
}
