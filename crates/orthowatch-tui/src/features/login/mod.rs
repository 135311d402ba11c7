//! Login screen: form state, key handling, rendering.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{LoginField, LoginFormState, LoginPhase};
pub use update::{LoginAction, handle_key, handle_paste};
