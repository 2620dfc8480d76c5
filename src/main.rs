//! CROSSRACK - a two-player word-placement board game for the terminal
//!
//! Place tiles. Make words. Mind the bonus squares.

mod app;
mod game;
mod tui;

use app::App;
use crossterm::event::{self, Event, KeyEventKind};
use game::Dictionary;
use std::io;
use std::time::Duration;
use tui::Tui;

fn main() -> io::Result<()> {
    // An optional wordlist path overrides the bundled vocabulary.
    let dictionary = match std::env::args().nth(1) {
        Some(path) => match Dictionary::load_from_file(&path) {
            Ok(dict) => dict,
            Err(err) => {
                eprintln!("warning: could not load wordlist {}: {}", path, err);
                Dictionary::bundled().clone()
            }
        },
        None => Dictionary::bundled().clone(),
    };

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut app = App::new(dictionary);

    // Main event loop
    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &app))?;

        // Poll for events; the timeout keeps the UI responsive without
        // spinning.
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
