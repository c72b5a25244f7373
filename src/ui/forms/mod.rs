//! Form rendering module
//!
//! - `field_renderer`: single field with its inline error
//! - `form_body`: heading, fields, submit button, loading and error lines
//! - `signup_form` / `profile_form`: the two account forms

mod field_renderer;
mod form_body;
mod profile_form;
mod signup_form;

pub use profile_form::draw_profile;
pub use signup_form::draw_signup;
