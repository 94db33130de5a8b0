use ratatui::style::Color;

pub const HEADER_TEXT: Color = Color::Cyan;
pub const GLOBAL_BORDER: Color = Color::DarkGray;
pub const ACTIVE_HIGHLIGHT: Color = Color::Yellow;
pub const STATUS_OK: Color = Color::Green;
pub const STATUS_ERROR: Color = Color::Red;
pub const MUTED_TEXT: Color = Color::Gray;
