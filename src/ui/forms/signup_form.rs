//! Sign-up form rendering

use super::form_body::draw_form;
use crate::state::FormController;
use crate::store::SignupProps;
use ratatui::{layout::Rect, Frame};

/// Draw the sign-up form. It has no load guard; missing store values render
/// as no loading text and no error line.
pub fn draw_signup(frame: &mut Frame, area: Rect, form: &FormController, props: SignupProps) {
    draw_form(frame, area, form, props.loading, props.auth_error);
}
