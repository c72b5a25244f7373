//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use crate::store::{ProfileProps, SignupProps};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app.state.current_view);

    match app.state.current_view {
        View::Signup => forms::draw_signup(
            frame,
            main_area,
            &app.state.signup_form,
            SignupProps::from_state(&app.state.auth),
        ),
        View::Profile => {
            let props = ProfileProps::from_state(&app.state.auth);
            if props.profile.is_loaded && app.state.profile_form.is_none() {
                draw_signed_out(frame, main_area);
            }
            forms::draw_profile(frame, main_area, app.state.profile_form.as_ref(), props);
        }
    }

    layout::draw_status_bar(frame, app);
}

/// Shown in place of the profile form when nobody is signed in
fn draw_signed_out(frame: &mut Frame, area: Rect) {
    let text = "Not signed in.\n\nPress F1 to create an account.";
    let paragraph = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
