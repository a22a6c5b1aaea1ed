//! Column container widget

use crate::element::Element;
use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// Stacks children vertically in the backend's natural flow
pub struct Column<M> {
    children: Vec<Element<M>>,
}

impl<M> Column<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self { children }
    }

    pub fn push<W: Widget<M> + 'static>(mut self, child: W) -> Self {
        self.children.push(Element::new(child));
        self
    }
}

impl<M> Widget<M> for Column<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.build_all(&self.children)
    }
}

/// Create a column from a list of elements
pub fn column<M>(children: Vec<Element<M>>) -> Column<M> {
    Column::new(children)
}
