//! Test-only infrastructure fakes.
//!
//! These doubles implement the outbound ports so services and actions can be
//! exercised without a server, a browser or a window. Each one records what
//! it was asked to do and lets tests script what it answers.
//!
//! Available to downstream crates through the `testing` feature.

mod mock_platform;
mod recorders;
mod recording_api;
mod scripted_dialogs;

pub use mock_platform::MockPlatform;
pub use recorders::{RecordingNotifier, RecordingView};
pub use recording_api::{RecordedCall, RecordedMethod, RecordingApi};
pub use scripted_dialogs::ScriptedDialogs;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a double's state, ignoring poisoning from a panicking test
fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
