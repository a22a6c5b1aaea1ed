//! Checkbox widget

use crate::callback::Callback;
use crate::error::Result;
use crate::id::{Role, WidgetId};
use crate::ui::Ui;
use crate::widget::Widget;

/// A boolean toggle.
///
/// The current value is supplied by the application each frame; the new
/// value is reported through `on_change` only when a toggle changed it.
pub struct Checkbox<M> {
    id: WidgetId,
    label: String,
    checked: bool,
    on_change: Callback<bool, M>,
}

impl<M> Checkbox<M> {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        let label = label.into();
        Self {
            id: WidgetId::new(&label, Role::Checkbox),
            label,
            checked,
            on_change: Callback::none(),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    callback_setter!(on_change, bool);
}

impl<M> Widget<M> for Checkbox<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let old = self.checked;
        let mut value = old;
        ui.backend().checkbox(&self.label, &mut value);
        if value != old {
            log::debug!("Checkbox '{}' changed from {} to {}", self.id, old, value);
            ui.emit(self.on_change.call(value));
        }
        Ok(())
    }
}

pub fn checkbox<M>(label: impl Into<String>, checked: bool) -> Checkbox<M> {
    Checkbox::new(label, checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use crate::Runtime;

    #[test]
    fn test_toggle_emits_flipped_value() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().toggle("Show greeting");
        let messages = runtime
            .run_frame(|ui| checkbox("Show greeting", false).on_change(|v| v).build(ui))
            .unwrap();
        assert_eq!(messages, vec![true]);

        runtime.backend_mut().toggle("Show greeting");
        let messages = runtime
            .run_frame(|ui| checkbox("Show greeting", true).on_change(|v| v).build(ui))
            .unwrap();
        assert_eq!(messages, vec![false]);
    }

    #[test]
    fn test_no_message_without_toggle() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        let messages = runtime
            .run_frame(|ui| checkbox("Show greeting", true).on_change(|v| v).build(ui))
            .unwrap();
        assert!(messages.is_empty());
    }
}
