//! Employee list screen: rendering and key handling.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::router::Router;
use crate::ui::app::ListScreen;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::vm::ListPhase;

pub fn handle_key(
    screen: &mut ListScreen,
    key: KeyEvent,
    router: &Arc<Router>,
    should_quit: &mut bool,
) {
    let state = screen.vm.snapshot();
    let count = state.employees.len();
    match key.code {
        KeyCode::Char('q') => *should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => {
            screen.selected = screen.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if count > 0 {
                screen.selected = (screen.selected + 1).min(count - 1);
            }
        }
        KeyCode::Char('r') => {
            if state.phase != ListPhase::Loading {
                let vm = Arc::clone(&screen.vm);
                tokio::spawn(async move { vm.load().await });
            }
        }
        KeyCode::Char('a') => {
            router.navigate("/add");
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(employee) = state.employees.get(screen.selected) {
                router.navigate(&format!("/edit/{}", employee.id));
            }
        }
        KeyCode::Char('d') => {
            if let Some(employee) = state.employees.get(screen.selected) {
                // The previous delete still owns the flag; drop the repeat.
                if screen.deleting.swap(true, Ordering::SeqCst) {
                    return;
                }
                let vm = Arc::clone(&screen.vm);
                let id = employee.id.clone();
                let deleting = Arc::clone(&screen.deleting);
                tokio::spawn(async move {
                    vm.delete(&id).await;
                    deleting.store(false, Ordering::SeqCst);
                });
            }
        }
        _ => {}
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, screen: &ListScreen) {
    let state = screen.vm.snapshot();
    let mut lines: Vec<Line> = Vec::new();

    match state.phase {
        ListPhase::Loading => {
            lines.push(Line::from(Span::styled(
                "Loading employees...",
                Style::default().fg(MUTED_TEXT),
            )));
        }
        ListPhase::Error => {
            let message = state
                .error
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string());
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(STATUS_ERROR),
            )));
            lines.push(Line::from(Span::styled(
                "Press r to retry.",
                Style::default().fg(MUTED_TEXT),
            )));
        }
        ListPhase::Loaded => {
            // A failed delete leaves the collection intact but stores an
            // error; show it above the table.
            if let Some(err) = &state.error {
                lines.push(Line::from(Span::styled(
                    err.clone(),
                    Style::default().fg(STATUS_ERROR),
                )));
            }
            if state.employees.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No employees yet. Press a to add one.",
                    Style::default().fg(MUTED_TEXT),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {:<28} {:<13} {:<16} {}",
                        "Name", "SSN", "Employee no.", "Status"
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                let selected = screen.selected.min(state.employees.len() - 1);
                for (index, employee) in state.employees.iter().enumerate() {
                    let marker = if index == selected { "> " } else { "  " };
                    let status = if employee.active { "active" } else { "inactive" };
                    let status_color = if employee.active {
                        STATUS_OK
                    } else {
                        MUTED_TEXT
                    };
                    let row_style = if index == selected {
                        Style::default().fg(ACTIVE_HIGHLIGHT)
                    } else {
                        Style::default()
                    };
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(
                                "{}{:<28} {:<13} {:<16} ",
                                marker,
                                employee.display_name(),
                                employee.ssn,
                                employee.employee_no.as_deref().unwrap_or("-"),
                            ),
                            row_style,
                        ),
                        Span::styled(status, Style::default().fg(status_color)),
                    ]));
                }
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Employees ")
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
