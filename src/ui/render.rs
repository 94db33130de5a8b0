//! Top-level frame composition.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::{form_view, list_view};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let path = app.current_path();
    let fragment = format!("#/{}", path.trim_start_matches('/'));
    let title = Line::from(vec![
        Span::styled(
            " Roster ",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(fragment, Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(title).block(bordered()),
        header,
    );

    match app.screen() {
        Screen::Starting => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Starting...",
                    Style::default().fg(MUTED_TEXT),
                )))
                .block(bordered()),
                body,
            );
        }
        Screen::List(screen) => list_view::render(frame, body, screen),
        Screen::Form(screen) => form_view::render(frame, body, screen),
    }

    let hints = match app.screen() {
        Screen::List(_) => {
            " Up/Down: Select │ Enter: Edit │ a: Add │ d: Delete │ r: Reload │ q: Quit"
        }
        Screen::Form(_) => " Tab: Next field │ Space: Toggle active │ Enter: Save │ Esc: Back",
        Screen::Starting => "",
    };
    let hint_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, hint_style))).block(bordered()),
        footer,
    );
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
