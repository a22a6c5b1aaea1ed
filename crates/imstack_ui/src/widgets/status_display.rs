//! Scrolling status message log

use crate::error::Result;
use crate::id::WidgetId;
use crate::state::{MessageLogState, DEFAULT_MAX_MESSAGES};
use crate::store::StateStore;
use crate::ui::Ui;
use crate::widget::Widget;

/// Store key shared by every status display
pub const STATUS_DISPLAY_KEY: &str = "##status_display";

pub const DEFAULT_STATUS_HEIGHT: f32 = 100.0;

/// Recent status messages, newest first, each prefixed with its age.
///
/// Messages are kept in a bounded log under a fixed key; entries older than
/// [`MESSAGE_MAX_AGE`](crate::MESSAGE_MAX_AGE) stay stored but are not
/// drawn.
#[derive(Debug, Clone)]
pub struct StatusDisplay {
    id: WidgetId,
    height: f32,
    max_entries: usize,
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self {
            id: WidgetId::fixed(STATUS_DISPLAY_KEY),
            height: DEFAULT_STATUS_HEIGHT,
            max_entries: DEFAULT_MAX_MESSAGES,
        }
    }

    builder_field!(height, f32);

    /// Capacity used when the log is first created. An existing log keeps
    /// the capacity it was created with.
    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    fn state<'s>(&self, store: &'s mut StateStore) -> Result<&'s mut MessageLogState> {
        let max_entries = self.max_entries;
        store.get_or_create(&self.id, || MessageLogState::new(max_entries))
    }

    /// Append a message stamped with `now`
    pub fn add_message(
        &self,
        store: &mut StateStore,
        text: impl Into<String>,
        now: f64,
    ) -> Result<()> {
        self.state(store)?.push(text, now);
        Ok(())
    }

    /// Number of messages currently stored, visible or not
    pub fn message_count(&self, store: &mut StateStore) -> Result<usize> {
        Ok(self.state(store)?.len())
    }

    /// Rendered lines as of `now`, newest first
    pub fn lines(&self, store: &mut StateStore, now: f64) -> Result<Vec<String>> {
        Ok(self
            .state(store)?
            .visible(now)
            .map(|(age, entry)| format!("[{age:.1}s] {}", entry.text))
            .collect())
    }
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for StatusDisplay {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let now = ui.time();
        let lines = self.lines(ui.store(), now)?;
        ui.claim(&self.id)?;

        ui.backend().begin_child(self.id.as_str(), self.height);
        for line in &lines {
            ui.backend().text(line);
        }
        ui.backend().end_child();
        Ok(())
    }
}

pub fn status_display() -> StatusDisplay {
    StatusDisplay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawCommand, HeadlessBackend};
    use crate::Runtime;

    #[test]
    fn test_draws_recent_messages_newest_first() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        let display = status_display();
        display.add_message(runtime.store_mut(), "old", 0.0).unwrap();
        display.add_message(runtime.store_mut(), "first", 5.0).unwrap();
        display.add_message(runtime.store_mut(), "second", 6.0).unwrap();
        runtime.backend_mut().set_time(12.0);

        runtime
            .run_frame::<(), _>(|ui| status_display().height(80.0).build(ui))
            .unwrap();
        let backend = runtime.backend();
        assert_eq!(backend.texts(), vec!["[6.0s] second", "[7.0s] first"]);
        assert!(matches!(
            backend.commands().first(),
            Some(DrawCommand::BeginChild { height, .. }) if *height == 80.0
        ));
        assert_eq!(display.message_count(runtime.store_mut()).unwrap(), 3);
    }

    #[test]
    fn test_capacity_is_fixed_at_creation() {
        let mut store = StateStore::new();
        let display = status_display().max_entries(2);
        for (i, text) in ["a", "b", "c"].into_iter().enumerate() {
            display.add_message(&mut store, text, i as f64).unwrap();
        }
        assert_eq!(display.lines(&mut store, 3.0).unwrap(), vec!["[1.0s] c", "[2.0s] b"]);
    }
}
