//! RGB color editor widget

use crate::callback::Callback;
use crate::color::Color;
use crate::error::Result;
use crate::id::{Role, WidgetId};
use crate::ui::Ui;
use crate::widget::Widget;

/// Three-channel color editor. Alpha is carried through unchanged.
pub struct ColorEdit<M> {
    id: WidgetId,
    label: String,
    color: Color,
    on_change: Callback<Color, M>,
}

impl<M> ColorEdit<M> {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        let label = label.into();
        Self {
            id: WidgetId::new(&label, Role::Color),
            label,
            color,
            on_change: Callback::none(),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    callback_setter!(on_change, Color);
}

impl<M> Widget<M> for ColorEdit<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let old = self.color.to_rgb_array();
        let mut rgb = old;
        if ui.backend().color_edit3(&self.label, &mut rgb) && rgb != old {
            let mut color = Color::from_rgb_array(rgb);
            color.a = self.color.a;
            ui.emit(self.on_change.call(color));
        }
        Ok(())
    }
}

pub fn color_edit<M>(label: impl Into<String>, color: Color) -> ColorEdit<M> {
    ColorEdit::new(label, color)
}
