//! Separator and spacing

use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// A horizontal rule
#[derive(Debug, Clone, Copy, Default)]
pub struct Separator;

impl<M> Widget<M> for Separator {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.backend().separator();
        Ok(())
    }
}

/// Vertical breathing room between items
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacing;

impl<M> Widget<M> for Spacing {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.backend().spacing();
        Ok(())
    }
}

pub fn separator() -> Separator {
    Separator
}

pub fn spacing() -> Spacing {
    Spacing
}
