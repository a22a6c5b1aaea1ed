//! Progress bar widget

use crate::error::Result;
use crate::ui::Ui;
use crate::widget::Widget;

/// Horizontal bar filled to `fraction`
#[derive(Debug, Clone)]
pub struct ProgressBar {
    fraction: f32,
    width: f32,
    height: f32,
    overlay: String,
}

impl ProgressBar {
    /// `fraction` is clamped to `[0, 1]`. The default size stretches across
    /// the available width with the default frame height.
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            width: -1.0,
            height: 0.0,
            overlay: String::new(),
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn overlay(mut self, text: impl Into<String>) -> Self {
        self.overlay = text.into();
        self
    }
}

impl<M> Widget<M> for ProgressBar {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        ui.backend()
            .progress_bar(self.fraction, (self.width, self.height), &self.overlay);
        Ok(())
    }
}

pub fn progress_bar(fraction: f32) -> ProgressBar {
    ProgressBar::new(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawCommand, HeadlessBackend};
    use crate::Runtime;

    fn drawn_fraction(fraction: f32) -> Option<f32> {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime
            .run_frame::<(), _>(|ui| progress_bar(fraction).build(ui))
            .unwrap();
        runtime.backend().commands().iter().find_map(|cmd| match cmd {
            DrawCommand::ProgressBar { fraction, .. } => Some(*fraction),
            _ => None,
        })
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(drawn_fraction(1.5), Some(1.0));
        assert_eq!(drawn_fraction(-0.2), Some(0.0));
        assert_eq!(drawn_fraction(0.4), Some(0.4));
    }

    #[test]
    fn test_default_size_and_overlay() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime
            .run_frame::<(), _>(|ui| progress_bar(0.5).overlay("1 / 2").build(ui))
            .unwrap();
        assert_eq!(
            runtime.backend().commands(),
            &[DrawCommand::ProgressBar {
                fraction: 0.5,
                size: (-1.0, 0.0),
                overlay: "1 / 2".to_string(),
            }]
        );
    }
}
