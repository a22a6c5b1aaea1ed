//! Local style override node

use crate::color::Color;
use crate::element::Element;
use crate::error::Result;
use crate::style::{StyleColor, StyleLayer, StyleVar};
use crate::ui::Ui;
use crate::widget::Widget;

/// Applies a [`StyleLayer`] to its children only.
///
/// ```ignore
/// style()
///     .color(StyleColor::Button, Color::RED)
///     .var(StyleVar::FrameRounding, 10.0)
///     .to(elements![button("Red")])
/// ```
pub struct Style<M> {
    layer: StyleLayer,
    children: Vec<Element<M>>,
}

impl<M> Style<M> {
    pub fn new() -> Self {
        Self {
            layer: StyleLayer::new(),
            children: Vec::new(),
        }
    }

    /// Start from an existing layer
    pub fn with_layer(layer: StyleLayer) -> Self {
        Self {
            layer,
            children: Vec::new(),
        }
    }

    pub fn color(mut self, slot: StyleColor, color: Color) -> Self {
        self.layer = self.layer.color(slot, color);
        self
    }

    pub fn var(mut self, var: StyleVar, value: f32) -> Self {
        self.layer = self.layer.var(var, value);
        self
    }

    pub fn to(mut self, children: Vec<Element<M>>) -> Self {
        self.children = children;
        self
    }

    pub fn layer(&self) -> &StyleLayer {
        &self.layer
    }
}

impl<M> Default for Style<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for Style<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.with_style(&self.layer, |ui| ui.build_all(&self.children))
    }
}

pub fn style<M>() -> Style<M> {
    Style::new()
}
