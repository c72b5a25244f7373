//! Shared layout of an account form

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::FormController;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw heading, fields, submit button, then the loading and submission
/// error lines pushed down from the store
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormController,
    loading: bool,
    submit_error: Option<&str>,
) {
    let kind = form.kind();
    let field_count = form.fields().len();

    let mut constraints = vec![Constraint::Length(2)]; // Heading
    constraints.extend((0..field_count).map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Loading
    constraints.push(Constraint::Min(1)); // Submission error

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let heading = Paragraph::new(kind.heading()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, chunks[0]);

    for (idx, field) in form.fields().iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            field,
            form.visible_error(field.name),
            form.active_field_index == idx,
        );
    }

    let button_row = chunks[field_count + 1];
    let button_width = (kind.submit_label().chars().count() as u16 + 4).min(button_row.width);
    let button_area = Rect {
        width: button_width,
        ..button_row
    };
    render_button(
        frame,
        button_area,
        kind.submit_label(),
        form.is_buttons_row_active(),
        form.can_submit(),
    );

    if loading {
        let loading_line =
            Paragraph::new(kind.loading_label()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading_line, chunks[field_count + 2]);
    }

    if let Some(message) = submit_error {
        let error = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[field_count + 3]);
    }
}
