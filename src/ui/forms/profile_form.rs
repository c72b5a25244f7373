//! Profile edit form rendering

use super::form_body::draw_form;
use crate::state::FormController;
use crate::store::ProfileProps;
use ratatui::{layout::Rect, Frame};

/// Draw the profile form. Draws nothing until the profile is loaded, so
/// stale or empty values never flash on screen.
pub fn draw_profile(
    frame: &mut Frame,
    area: Rect,
    form: Option<&FormController>,
    props: ProfileProps,
) {
    if !props.profile.is_loaded {
        return;
    }
    let Some(form) = form else {
        return;
    };
    draw_form(frame, area, form, props.loading, props.profile_error);
}
