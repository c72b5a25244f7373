//! Layout components (tabs, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tab order in the header
const TABS: &[(View, &str)] = &[(View::Signup, "F1"), (View::Profile, "F2")];

/// Split the screen into tab header and content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the view tabs
pub fn draw_tabs(frame: &mut Frame, area: Rect, current: View) {
    let mut spans = Vec::new();
    for (view, key) in TABS {
        let style = if *view == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {key} {} ", view.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Get the key hints for the status bar
fn get_view_hints(app: &App) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match app.state.active_form() {
        Some(_) => format!(" Tab: next field | Enter/{submit}: submit | Esc: quit "),
        None => " F1/F2: switch form | Esc: quit ".to_string(),
    }
}

pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Session status
    let profile = &app.state.auth.profile;
    let signed_in = profile.is_loaded && !profile.is_empty;
    let session = if signed_in {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(session);

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if signed_in {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            profile.display_name(),
            Style::default().fg(Color::Blue),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
