//! Button widget

use crate::callback::Callback0;
use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// A clickable button
pub struct Button<M> {
    label: String,
    size: Option<(f32, f32)>,
    on_click: Callback0<M>,
}

impl<M> Button<M> {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            size: None,
            on_click: Callback0::none(),
        }
    }

    /// Fixed size; zero or negative dimensions fall back to auto sizing
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = (width > 0.0 && height > 0.0).then_some((width, height));
        self
    }

    callback_setter!(on_click);
}

impl<M: Clone + 'static> Button<M> {
    /// Emit `message` when clicked
    pub fn on_click_message(mut self, message: M) -> Self {
        self.on_click = Callback0::message(message);
        self
    }
}

impl<M> Widget<M> for Button<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        if ui.backend().button(&self.label, self.size) {
            log::debug!("Button '{}' clicked", self.label);
            ui.emit(self.on_click.emit());
        }
        Ok(())
    }
}

/// Create a button
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawCommand, HeadlessBackend};
    use crate::Runtime;

    #[test]
    fn test_click_emits_message() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().click("Hello");
        let messages = runtime
            .run_frame(|ui| {
                button("Hello").on_click_message("hi").build(ui)?;
                button("Other").on_click_message("other").build(ui)
            })
            .unwrap();
        assert_eq!(messages, vec!["hi"]);
    }

    #[test]
    fn test_size_requires_both_dimensions() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime
            .run_frame::<(), _>(|ui| {
                button("a").size(100.0, 0.0).build(ui)?;
                button("b").size(100.0, 30.0).build(ui)
            })
            .unwrap();
        let backend = runtime.backend();
        assert!(matches!(backend.find_button("a"), Some(DrawCommand::Button { size: None, .. })));
        assert!(matches!(
            backend.find_button("b"),
            Some(DrawCommand::Button { size: Some((w, h)), .. }) if *w == 100.0 && *h == 30.0
        ));
    }
}
