//! Client-side state store
//!
//! A single task owns [`AuthState`](crate::state::AuthState), applies
//! [`AuthAction`]s through a pure reducer, runs backend calls for start
//! actions, and publishes every new snapshot on a watch channel.

mod actions;
mod binding;
mod reducer;
mod runtime;

pub use actions::AuthAction;
pub use binding::{submit_form, ProfileProps, SignupProps};
pub use runtime::{Store, StoreHandle};
