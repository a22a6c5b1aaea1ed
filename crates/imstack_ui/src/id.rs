//! Widget identity
//!
//! Widget descriptors are rebuilt every frame, so the retained store cannot
//! recognise them by address. Instead each stateful occurrence derives a key
//! from its label and a role suffix: `"Lives##counter"`. The same label and
//! role always produce the same key. Building the same key twice in one frame
//! is rejected by the frame context, and two different roles sharing a key
//! are reported by the store as a collision.

use std::fmt;

/// Separator between the visible label and the hidden identity suffix
const ID_SEPARATOR: &str = "##";

/// The role a widget plays, used as the key suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Counter,
    Timer,
    Input,
    Checkbox,
    Slider,
    Color,
}

impl Role {
    pub fn suffix(self) -> &'static str {
        match self {
            Role::Counter => "counter",
            Role::Timer => "timer",
            Role::Input => "input",
            Role::Checkbox => "checkbox",
            Role::Slider => "slider",
            Role::Color => "color",
        }
    }
}

/// Stable identity of a widget occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(String);

impl WidgetId {
    /// Derive the key for `label` in the given role
    pub fn new(label: &str, role: Role) -> Self {
        Self(format!("{label}{ID_SEPARATOR}{}", role.suffix()))
    }

    /// Use a raw key as-is, for singleton widgets such as the status display
    pub fn fixed(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The visible part of the key (everything before `##`)
    pub fn label(&self) -> &str {
        self.0
            .split_once(ID_SEPARATOR)
            .map_or(self.0.as_str(), |(label, _)| label)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WidgetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generator for anonymous ids.
///
/// The counter only ever grows, so these ids are not stable across frames
/// and must not back stateful widgets.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce `"{prefix}##{n}"` with a fresh `n`
    pub fn next_anonymous(&mut self, prefix: &str) -> WidgetId {
        self.counter += 1;
        WidgetId(format!("{prefix}{ID_SEPARATOR}{}", self.counter))
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.counter
    }
}
