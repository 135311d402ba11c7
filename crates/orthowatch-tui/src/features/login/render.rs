//! Login screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::state::{LoginField, LoginFormState, LoginPhase};
use crate::render_utils::{InputHint, centered_area, render_hints};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 17;

/// Renders the centered sign-in card.
pub fn render(frame: &mut Frame, form: &LoginFormState, area: Rect) {
    let card = centered_area(area, CARD_WIDTH, CARD_HEIGHT);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" OrthoWatch ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Post-Discharge Monitoring System",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        row(0),
    );

    if let Some(error) = &form.form_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )))
            .alignment(Alignment::Center),
            row(2),
        );
    }

    render_field(
        frame,
        row(4),
        row(5),
        row(6),
        "Email address",
        form.email.text(),
        form.email_error,
        form.focus == LoginField::Email,
    );

    let masked;
    let password_display = if form.show_password {
        form.password.text()
    } else {
        masked = "•".repeat(form.password.text().chars().count());
        &masked
    };
    render_field(
        frame,
        row(7),
        row(8),
        row(9),
        "Password",
        password_display,
        form.password_error,
        form.focus == LoginField::Password,
    );

    render_submit(frame, row(11), form);

    let hints = [
        InputHint::new("tab", "next"),
        InputHint::new("ctrl+r", "show password"),
        InputHint::new("enter", "sign in"),
    ];
    render_hints(frame, row(13), &hints, Color::Cyan);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "OrthoWatch v0.1 · For authorised clinical staff only",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        row(14),
    );

    set_cursor(frame, form, inner);
}

#[allow(clippy::too_many_arguments)]
fn render_field(
    frame: &mut Frame,
    label_row: Rect,
    input_row: Rect,
    error_row: Rect,
    label: &str,
    value: &str,
    error: Option<&'static str>,
    focused: bool,
) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label.to_string(), label_style))),
        label_row,
    );

    let prompt_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("> ", prompt_style),
        Span::raw(value.to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), input_row);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            ))),
            error_row,
        );
    }
}

fn render_submit(frame: &mut Frame, row: Rect, form: &LoginFormState) {
    let (text, style) = if form.phase == LoginPhase::Submitting {
        (
            "Signing in…",
            Style::default().fg(Color::Yellow),
        )
    } else if form.focus == LoginField::Submit {
        (
            "[ Sign In ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Sign In ]", Style::default().fg(Color::Cyan))
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        row,
    );
}

/// Places the terminal cursor inside the focused input while editing.
fn set_cursor(frame: &mut Frame, form: &LoginFormState, inner: Rect) {
    if form.phase != LoginPhase::Editing {
        return;
    }
    let (field, input_y) = match form.focus {
        LoginField::Email => (&form.email, inner.y + 5),
        LoginField::Password => (&form.password, inner.y + 8),
        LoginField::Submit => return,
    };
    // Masked passwords render one cell per character.
    let col_offset = if form.focus == LoginField::Password && !form.show_password {
        u16::try_from(field.cursor()).unwrap_or(u16::MAX)
    } else {
        field.width_before_cursor()
    };
    let x = inner.x.saturating_add(2).saturating_add(col_offset);
    if x < inner.x + inner.width {
        frame.set_cursor_position(Position::new(x, input_y));
    }
}
