//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects. Which screen
//! draws is decided by the route guard, so the view can never show a
//! protected screen to an unauthenticated session.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::router::{self, RouteDecision};
use crate::features::{dashboard, login};
use crate::render_utils::centered_area;
use crate::state::AppState;

/// Spinner frames for the loading screen.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match router::resolve(app.route, &app.session) {
        RouteDecision::Loading => render_loading(app, frame),
        RouteDecision::Login => login::render(frame, &app.login, area),
        RouteDecision::Dashboard => {
            // The guard only resolves Dashboard for authenticated sessions.
            if let Some(user) = app.session.user() {
                dashboard::render(frame, user, app.tasks.logout.is_running(), area);
            }
        }
    }
}

fn render_loading(app: &AppState, frame: &mut Frame) {
    let area = centered_area(frame.area(), 30, 1);
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::styled(" Restoring session…", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
