//! Single-line text input widget

use crate::callback::Callback;
use crate::error::Result;
use crate::id::{Role, WidgetId};
use crate::ui::Ui;
use crate::widget::Widget;

/// Editable line of text, identified by `label##input`
pub struct TextInput<M> {
    id: WidgetId,
    text: String,
    width: Option<f32>,
    on_change: Callback<String, M>,
}

impl<M> TextInput<M> {
    pub fn new(label: impl AsRef<str>, text: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(label.as_ref(), Role::Input),
            text: text.into(),
            width: None,
            on_change: Callback::none(),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Fixed item width; ignored unless positive
    pub fn width(mut self, width: f32) -> Self {
        self.width = (width > 0.0).then_some(width);
        self
    }

    callback_setter!(on_change, String);
}

impl<M> Widget<M> for TextInput<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        if let Some(width) = self.width {
            ui.backend().set_next_item_width(width);
        }
        let mut text = self.text.clone();
        if ui.backend().input_text(self.id.as_str(), "", &mut text) && text != self.text {
            ui.emit(self.on_change.call(text));
        }
        Ok(())
    }
}

pub fn text_input<M>(label: impl AsRef<str>, text: impl Into<String>) -> TextInput<M> {
    TextInput::new(label, text)
}
