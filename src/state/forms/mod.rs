//! Form domain layer
//!
//! Schema-driven validation and the controller that gates submission.
//! Rendering lives in `ui::forms`; dispatch targets live in `store`.

mod field;
mod form_state;
mod schema;
mod values;

pub use field::FormField;
pub use form_state::{FormController, FormKind, PostSubmit, SubmitOutcome};
pub use values::{
    ProfileValues, SignUpValues, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, PASSWORD_CONFIRMATION,
};
