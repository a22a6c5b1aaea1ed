//! Callback abstraction for widget event handlers
//!
//! Widgets store their handlers as `Callback<T, M>`: an optional function
//! from the new value to an application message. Handlers run synchronously
//! during the frame walk; the message they return is queued on the
//! [`Ui`](crate::Ui) and handed to the application after the frame.
//!
//! # Examples
//!
//! ```
//! use imstack_ui::Callback;
//!
//! let on_change: Callback<i64, String> = Callback::new(|v| format!("now {v}"));
//! assert_eq!(on_change.call(3).as_deref(), Some("now 3"));
//! assert!(Callback::<i64, String>::none().call(3).is_none());
//! ```

use std::fmt;

/// An optional `Fn(T) -> M` handler
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// A callback that takes no parameters, e.g. a click handler.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Equivalent to `call(())`.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}

impl<M: Clone + 'static> Callback0<M> {
    /// A handler that always produces a clone of `message`
    pub fn message(message: M) -> Self {
        Self::new(move |()| message.clone())
    }
}
