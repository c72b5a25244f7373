//! Application state module

mod app_state;
mod auth_state;
mod forms;

pub use app_state::*;
pub use auth_state::*;
pub use forms::*;
