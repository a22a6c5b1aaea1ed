//! Type-erased widget wrapper

use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// A type-erased widget that can hold any widget type
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
}

impl<M> Element<M> {
    /// Create a new element from a widget
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    /// Build the wrapped widget
    pub fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        self.widget.build(ui)
    }
}

impl<M> Widget<M> for Element<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        self.widget.build(ui)
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}

/// An ordered list of widgets, built one after another
pub struct Layout<M> {
    children: Vec<Element<M>>,
}

impl<M> Layout<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self { children }
    }

    pub fn push<W: Widget<M> + 'static>(&mut self, child: W) {
        self.children.push(Element::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<M> Default for Layout<M> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<M> Widget<M> for Layout<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.build_all(&self.children)
    }
}

impl<M> FromIterator<Element<M>> for Layout<M> {
    fn from_iter<I: IntoIterator<Item = Element<M>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
