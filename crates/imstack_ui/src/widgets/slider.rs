//! Float slider widget

use crate::callback::Callback;
use crate::error::Result;
use crate::id::{Role, WidgetId};
use crate::ui::Ui;
use crate::widget::Widget;

/// Display format for slider values
pub const SLIDER_FORMAT: &str = "%.2f";

/// A horizontal slider over `[min, max]`
pub struct Slider<M> {
    id: WidgetId,
    label: String,
    value: f32,
    min: f32,
    max: f32,
    on_change: Callback<f32, M>,
}

impl<M> Slider<M> {
    pub fn new(label: impl Into<String>, value: f32, min: f32, max: f32) -> Self {
        let label = label.into();
        Self {
            id: WidgetId::new(&label, Role::Slider),
            label,
            value,
            min,
            max,
            on_change: Callback::none(),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    callback_setter!(on_change, f32);
}

impl<M> Widget<M> for Slider<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let mut value = self.value;
        let edited = ui
            .backend()
            .slider_float(&self.label, &mut value, self.min, self.max, SLIDER_FORMAT);
        if edited && value != self.value {
            ui.emit(self.on_change.call(value));
        }
        Ok(())
    }
}

pub fn slider<M>(label: impl Into<String>, value: f32, min: f32, max: f32) -> Slider<M> {
    Slider::new(label, value, min, max)
}
