//! Builder context for constructing widget trees

use crate::element::{Element, Layout};
use crate::style::StyleLayer;
use crate::widget::Widget;
use crate::widgets::{Button, Column, Row, Style};

/// Context for building widget trees using a closure-based API
///
/// An alternative to nesting `elements![]` lists when a view is easier to
/// write imperatively.
pub struct Context<M> {
    children: Vec<Element<M>>,
}

impl<M: 'static> Context<M> {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a text label
    pub fn label(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(crate::widgets::label(text))
    }

    /// Add a button widget
    pub fn button(&mut self, label: impl Into<String>) -> ButtonBuilder<'_, M> {
        ButtonBuilder {
            ctx: self,
            button: Button::new(label),
        }
    }

    pub fn separator(&mut self) -> &mut Self {
        self.add(crate::widgets::separator())
    }

    pub fn spacing(&mut self) -> &mut Self {
        self.add(crate::widgets::spacing())
    }

    /// Add a row of widgets
    pub fn row(&mut self, builder: impl FnOnce(&mut Context<M>)) -> &mut Self {
        let mut ctx = Context::new();
        builder(&mut ctx);
        self.add(Row::new(ctx.children))
    }

    /// Add a column of widgets
    pub fn col(&mut self, builder: impl FnOnce(&mut Context<M>)) -> &mut Self {
        let mut ctx = Context::new();
        builder(&mut ctx);
        self.add(Column::new(ctx.children))
    }

    /// Add children rendered under a local style override
    pub fn styled(
        &mut self,
        layer: StyleLayer,
        builder: impl FnOnce(&mut Context<M>),
    ) -> &mut Self {
        let mut ctx = Context::new();
        builder(&mut ctx);
        self.add(Style::with_layer(layer).to(ctx.children))
    }

    /// Add any widget directly
    pub fn add<W: Widget<M> + 'static>(&mut self, widget: W) -> &mut Self {
        self.children.push(Element::new(widget));
        self
    }

    /// Take the built children
    pub fn take(self) -> Vec<Element<M>> {
        self.children
    }

    pub fn into_layout(self) -> Layout<M> {
        Layout::new(self.children)
    }
}

impl<M: 'static> Default for Context<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a column with the closure API
pub fn col<M: 'static>(builder: impl FnOnce(&mut Context<M>)) -> Column<M> {
    let mut ctx = Context::new();
    builder(&mut ctx);
    Column::new(ctx.children)
}

/// Builder for button widgets
pub struct ButtonBuilder<'a, M> {
    ctx: &'a mut Context<M>,
    button: Button<M>,
}

impl<'a, M: 'static> ButtonBuilder<'a, M> {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.button = self.button.size(width, height);
        self
    }

    /// Finish without a click handler
    pub fn build(self) -> &'a mut Context<M> {
        self.ctx.children.push(Element::new(self.button));
        self.ctx
    }
}

impl<'a, M: Clone + 'static> ButtonBuilder<'a, M> {
    /// Set the click message and finish
    pub fn on_click(self, message: M) -> &'a mut Context<M> {
        let button = self.button.on_click_message(message);
        self.ctx.children.push(Element::new(button));
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::headless::{DrawCommand, HeadlessBackend};
    use crate::style::StyleColor;
    use crate::Runtime;

    #[test]
    fn test_closure_tree_builds_in_order() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().click("Go");
        let messages = runtime
            .run_frame(|ui| {
                col(|c| {
                    c.label("title");
                    c.row(|r| {
                        r.button("Go").on_click(1);
                        r.button("Stay").build();
                    });
                    c.styled(StyleLayer::new().color(StyleColor::Text, Color::RED), |s| {
                        s.label("warning");
                    });
                })
                .build(ui)
            })
            .unwrap();
        assert_eq!(messages, vec![1]);

        let backend = runtime.backend();
        assert_eq!(backend.texts(), vec!["title", "warning"]);
        assert!(backend.find_button("Stay").is_some());
        assert!(backend.commands().iter().any(|cmd| matches!(
            cmd,
            DrawCommand::Text { text, color: Some(c) } if text == "warning" && *c == Color::RED
        )));
    }
}
