//! Add/edit form screen: rendering and key handling.
//!
//! Typing goes through `update_field` one keystroke at a time; the SSN
//! field is re-formatted on every edit so hyphens appear as the user
//! types.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{EmployeeDraft, Field};
use crate::router::Router;
use crate::ui::app::FormScreen;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::validate::format_ssn;
use crate::vm::{FormMode, FormPhase};

/// Row index of the active checkbox, after the four text fields.
const ACTIVE_ROW: usize = Field::ALL.len();
const ROW_COUNT: usize = ACTIVE_ROW + 1;

pub fn handle_key(screen: &mut FormScreen, key: KeyEvent, router: &Arc<Router>) {
    match key.code {
        KeyCode::Esc => {
            if !router.back() {
                router.navigate("/");
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            screen.focused = (screen.focused + 1) % ROW_COUNT;
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focused = (screen.focused + ROW_COUNT - 1) % ROW_COUNT;
        }
        KeyCode::Enter => {
            // The previous submit still owns the flag; drop the repeat.
            if screen.submitting.swap(true, Ordering::SeqCst) {
                return;
            }
            let vm = Arc::clone(&screen.vm);
            let router = Arc::clone(router);
            let submitting = Arc::clone(&screen.submitting);
            tokio::spawn(async move {
                let saved = vm.submit().await;
                submitting.store(false, Ordering::SeqCst);
                if saved {
                    router.navigate("/");
                }
            });
        }
        KeyCode::Char(' ') if screen.focused == ACTIVE_ROW => {
            let active = screen.vm.snapshot().draft.active;
            screen.vm.set_active(!active);
        }
        KeyCode::Char(c) => {
            if let Some(&field) = Field::ALL.get(screen.focused) {
                let mut value = field_value(&screen.vm.snapshot().draft, field);
                value.push(c);
                if field == Field::Ssn {
                    value = format_ssn(&value);
                }
                screen.vm.update_field(field, value);
            }
        }
        KeyCode::Backspace => {
            if let Some(&field) = Field::ALL.get(screen.focused) {
                let mut value = field_value(&screen.vm.snapshot().draft, field);
                value.pop();
                if field == Field::Ssn {
                    value = format_ssn(&value);
                }
                screen.vm.update_field(field, value);
            }
        }
        _ => {}
    }
}

fn field_value(draft: &EmployeeDraft, field: Field) -> String {
    match field {
        Field::Ssn => draft.ssn.clone(),
        Field::FirstName => draft.first_name.clone(),
        Field::LastName => draft.last_name.clone(),
        Field::EmployeeNo => draft.employee_no.clone(),
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, screen: &FormScreen) {
    let state = screen.vm.snapshot();
    let title = match state.mode {
        FormMode::Add => " Add employee ",
        FormMode::Edit { .. } => " Edit employee ",
    };

    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in Field::ALL.iter().enumerate() {
        let focused = index == screen.focused;
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default()
        };
        let value = field_value(&state.draft, *field);
        lines.push(Line::from(Span::styled(
            format!("{}{:<18} {}", marker, field.label(), value),
            style,
        )));
        if let Some(err) = state.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("    {}", err),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    let focused = screen.focused == ACTIVE_ROW;
    let marker = if focused { "> " } else { "  " };
    let checkbox = if state.draft.active { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(
        format!("{}{} Active", marker, checkbox),
        style,
    )));

    lines.push(Line::from(""));
    match state.phase {
        FormPhase::Loading => lines.push(Line::from(Span::styled(
            "Working...",
            Style::default().fg(MUTED_TEXT),
        ))),
        FormPhase::Success => lines.push(Line::from(Span::styled(
            "Saved.",
            Style::default().fg(STATUS_OK),
        ))),
        FormPhase::Error => {
            let message = state
                .general_error
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string());
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(STATUS_ERROR),
            )));
        }
        FormPhase::Idle => {}
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
