//! UI state shared through Dioxus context
//!
//! Each struct holds `Signal`s and is `Copy`, so components and spawned
//! tasks take their own handle. They must be created inside a running
//! Dioxus runtime (see `AppRoot`).

pub mod dialog_state;
pub mod toast_state;
pub mod view_state;

use dioxus::prelude::*;

pub use dialog_state::{DialogState, DialogView};
pub use toast_state::ToastState;
pub use view_state::{ClientSnapshot, PortalSnapshot, ProposalSnapshot, SignedContract, ViewState};

pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

pub fn use_dialog_state() -> DialogState {
    use_context::<DialogState>()
}

pub fn use_view_state() -> ViewState {
    use_context::<ViewState>()
}
