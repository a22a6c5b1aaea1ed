//! Tooltip attached to the previous item

use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// Shows `text` while the most recently drawn item is hovered
#[derive(Debug, Clone)]
pub struct Tooltip {
    text: String,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl<M> Widget<M> for Tooltip {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        if ui.backend().is_item_hovered() {
            ui.backend().set_tooltip(&self.text);
        }
        Ok(())
    }
}

pub fn tooltip(text: impl Into<String>) -> Tooltip {
    Tooltip::new(text)
}
