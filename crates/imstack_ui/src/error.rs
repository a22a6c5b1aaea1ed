use thiserror::Error;

use crate::id::WidgetId;
use crate::state::StateKind;

/// Errors raised while building a frame.
///
/// All of these are programming errors: the frame is abandoned (after the
/// style stacks have been unwound) and the error is handed to the host.
#[derive(Debug, Error)]
pub enum UiError {
    /// Two stateful widgets of different kinds resolved to the same key
    #[error("identity collision on '{key}': stored {found:?} state, widget expects {expected:?}")]
    TypeMismatch {
        key: WidgetId,
        expected: StateKind,
        found: StateKind,
    },

    /// The same stateful widget identity was built twice in one frame
    #[error("duplicate widget identity '{key}' in one frame")]
    DuplicateId { key: WidgetId },

    /// A widget was configured with an empty range
    #[error("invalid range for '{key}': min {min} is greater than max {max}")]
    InvalidRange { key: WidgetId, min: i64, max: i64 },

    /// The backend was asked to pop more style entries than it holds
    #[error("style {stack} stack underflow: popping {requested} with depth {depth}")]
    StyleUnderflow {
        stack: &'static str,
        requested: usize,
        depth: usize,
    },
}

pub type Result<T, E = UiError> = std::result::Result<T, E>;
