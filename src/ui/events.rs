//! Application events and the input thread.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

/// Which view the router asked to activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenRequest {
    List,
    Add,
    Edit { id: String },
}

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// A viewmodel notified its listeners; redraw on the next turn.
    Redraw,
    /// A route handler fired.
    Activate(ScreenRequest),
    /// The input thread lost the terminal.
    Quit,
}

/// Spawn the blocking input reader. Key releases are filtered out so
/// terminals reporting both kinds don't double-type.
pub fn spawn_input_thread(tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(_) => {
                let _ = tx.send(AppEvent::Quit);
                return;
            }
        };
        let sent = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => tx.send(AppEvent::Key(key)),
            Event::Resize(_, _) => tx.send(AppEvent::Resize),
            _ => Ok(()),
        };
        if sent.is_err() {
            return;
        }
    });
}
