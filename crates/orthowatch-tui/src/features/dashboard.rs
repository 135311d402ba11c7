//! Placeholder dashboard screen.
//!
//! Shows who is signed in and a construction notice; real monitoring
//! widgets land in a later phase.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use orthowatch_core::session::User;

use crate::render_utils::{InputHint, centered_area, render_hints};

/// Outcome of a key press on the dashboard.
#[derive(Debug)]
pub enum DashboardAction {
    None,
    Logout,
    Quit,
}

pub fn handle_key(key: KeyEvent) -> DashboardAction {
    match key.code {
        KeyCode::Char('l') => DashboardAction::Logout,
        KeyCode::Char('q') => DashboardAction::Quit,
        _ => DashboardAction::None,
    }
}

/// Renders the dashboard: a top bar with identity, a welcome card, and the
/// construction notice.
pub fn render(frame: &mut Frame, user: &User, signing_out: bool, area: Rect) {
    let header = Rect::new(area.x, area.y, area.width, 1);
    let body = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );

    render_header(frame, user, header);

    let card = centered_area(body, 64, 11);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );
    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    let display_name = if user.full_name.is_empty() {
        &user.email
    } else {
        &user.full_name
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Welcome, {display_name}"),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        row(0),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            user.role.label(),
            Style::default().fg(Color::DarkGray),
        ))),
        row(1),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::raw(user.role.greeting().to_string()))),
        row(2),
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Dashboard under construction. ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Patient list, risk alerts, and trend",
                Style::default().fg(Color::Yellow),
            ),
        ])),
        row(4),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "charts are coming in Phase 3.",
            Style::default().fg(Color::Yellow),
        ))),
        row(5),
    );

    if signing_out {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Signing out…",
                Style::default().fg(Color::Yellow),
            )))
            .alignment(Alignment::Center),
            row(7),
        );
    } else {
        let hints = [InputHint::new("l", "logout"), InputHint::new("q", "quit")];
        render_hints(frame, row(7), &hints, Color::Cyan);
    }
}

fn render_header(frame: &mut Frame, user: &User, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " OrthoWatch ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::raw(user.email.clone()),
        Span::styled(
            format!("  {}", user.role.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_key_actions() {
        let logout = handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        assert!(matches!(logout, DashboardAction::Logout));

        let quit = handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(matches!(quit, DashboardAction::Quit));

        let other = handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(other, DashboardAction::None));
    }
}
