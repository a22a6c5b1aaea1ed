//! Full-viewport window

use crate::backend::WindowFlags;
use crate::element::Element;
use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

const SINGLE_WINDOW_NAME: &str = "##SingleWindow";

/// An undecorated window covering the whole main viewport
pub struct SingleWindow<M> {
    children: Vec<Element<M>>,
}

impl<M> SingleWindow<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn layout(mut self, children: Vec<Element<M>>) -> Self {
        self.children = children;
        self
    }
}

impl<M> Default for SingleWindow<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for SingleWindow<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let viewport = ui.backend().viewport();
        ui.backend().set_next_window_rect(viewport.pos, viewport.size);
        ui.backend()
            .begin_window(SINGLE_WINDOW_NAME, WindowFlags::FULLSCREEN);
        let result = ui.build_all(&self.children);
        ui.backend().end_window();
        result
    }
}

pub fn single_window<M>() -> SingleWindow<M> {
    SingleWindow::new()
}
