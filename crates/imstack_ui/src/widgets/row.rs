//! Row container widget

use crate::element::Element;
use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

const ROW_TABLE_ID: &str = "##row_table";

/// Lays children out side by side in a single-row table, one column each
pub struct Row<M> {
    children: Vec<Element<M>>,
}

impl<M> Row<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self { children }
    }

    pub fn push<W: Widget<M> + 'static>(mut self, child: W) -> Self {
        self.children.push(Element::new(child));
        self
    }
}

impl<M> Widget<M> for Row<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        if self.children.is_empty() {
            return Ok(());
        }

        if !ui.backend().begin_table(ROW_TABLE_ID, self.children.len()) {
            return Ok(());
        }
        ui.backend().table_next_row();

        let mut result = Ok(());
        for child in &self.children {
            ui.backend().table_next_column();
            result = child.build(ui);
            if result.is_err() {
                break;
            }
        }

        ui.backend().end_table();
        result
    }
}

/// Create a row from a list of elements
pub fn row<M>(children: Vec<Element<M>>) -> Row<M> {
    Row::new(children)
}
