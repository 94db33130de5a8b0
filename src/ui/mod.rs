//! Terminal views.
//!
//! Views render viewmodel snapshots and translate key presses into
//! viewmodel method calls or router navigation. They hold no domain
//! state of their own beyond cursor/selection positions.

pub mod app;
pub mod events;
mod form_view;
mod layout;
mod list_view;
pub mod render;
mod terminal_guard;
mod theme;

pub use terminal_guard::TerminalGuard;
