//! Text label widget

use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// A line of static text
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl<M> Widget<M> for Label {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.backend().text(&self.text);
        Ok(())
    }
}

/// Create a label
pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}
