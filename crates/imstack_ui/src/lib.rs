//! imstack_ui - declarative widget trees over an immediate-mode backend
//!
//! The application rebuilds a tree of lightweight widget descriptors every
//! frame. Widgets that need to remember something between frames (counters,
//! timers, the status log) keep it in a [`StateStore`] under a key derived
//! from their label, and style overrides are applied as nested scopes that
//! always unwind exactly, around a global [`Theme`].

#[macro_use]
mod macros;

mod application;
mod backend;
mod callback;
mod color;
mod context;
mod element;
mod error;
mod event;
mod id;
mod state;
mod store;
mod style;
mod theme;
mod ui;
mod widget;
mod widgets;

pub mod headless;

pub use application::{init_logging, run_headless, Application, Runtime, Settings, UpdateContext};
pub use backend::{Backend, StyleDepth, Viewport, WindowFlags};
pub use callback::{Callback, Callback0};
pub use color::Color;
pub use context::{col, ButtonBuilder, Context};
pub use element::{Element, Layout};
pub use error::{Result, UiError};
pub use event::{Key, Modifiers, MouseButton};
pub use id::{IdGenerator, Role, WidgetId};
pub use state::{
    CounterState, LogEntry, MessageLogState, StateKind, StateRecord, TimerPhase, TimerState,
    WidgetState, DEFAULT_MAX_MESSAGES, MESSAGE_MAX_AGE,
};
pub use store::StateStore;
pub use style::{StyleColor, StyleLayer, StyleVar};
pub use theme::Theme;
pub use ui::Ui;
pub use widget::Widget;

// Re-export widgets
pub use widgets::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Runtime, Settings, UpdateContext};
    pub use crate::color::Color;
    pub use crate::context::{col, Context};
    pub use crate::element::{Element, Layout};
    pub use crate::error::{Result, UiError};
    pub use crate::event::Key;
    pub use crate::style::{StyleColor, StyleLayer, StyleVar};
    pub use crate::theme::Theme;
    pub use crate::ui::Ui;
    pub use crate::widget::Widget;
    pub use crate::widgets::*;
    pub use crate::elements;
}
