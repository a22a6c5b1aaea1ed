//! Widget trait

use crate::error::Result;
use crate::ui::Ui;

/// A node of the per-frame composition tree.
///
/// Widgets are plain configuration values, rebuilt by the application every
/// frame. `build` issues backend calls for the widget and its children,
/// reads or updates retained state through the store, and queues the
/// messages produced by its callbacks.
pub trait Widget<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()>;
}
