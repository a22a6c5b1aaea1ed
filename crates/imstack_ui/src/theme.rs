//! Built-in global themes
//!
//! A theme is a named [`StyleLayer`] that the runtime pushes once at the
//! start of every frame and pops at the end, so it acts as the outermost
//! style scope. Local overrides inside the tree shadow it.

use crate::color::Color;
use crate::style::{StyleColor, StyleLayer, StyleVar};

/// A named global style layer
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: &'static str,
    layer: StyleLayer,
}

impl Theme {
    pub fn new(name: &'static str, layer: StyleLayer) -> Self {
        Self { name, layer }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn layer(&self) -> &StyleLayer {
        &self.layer
    }

    /// Near-black background with blue accents
    pub fn dark() -> Self {
        Self::new(
            "Dark",
            StyleLayer::new()
                .color(StyleColor::WindowBg, Color::rgba(0.06, 0.06, 0.06, 1.00))
                .color(StyleColor::Button, Color::rgba(0.20, 0.25, 0.29, 1.00))
                .color(StyleColor::ButtonHovered, Color::rgba(0.26, 0.59, 0.98, 0.40))
                .color(StyleColor::ButtonActive, Color::rgba(0.26, 0.59, 0.98, 0.67))
                .color(StyleColor::Text, Color::rgba(1.00, 1.00, 1.00, 1.00))
                .color(StyleColor::FrameBg, Color::rgba(0.16, 0.29, 0.48, 0.54))
                .color(StyleColor::FrameBgHovered, Color::rgba(0.26, 0.59, 0.98, 0.40))
                .color(StyleColor::FrameBgActive, Color::rgba(0.26, 0.59, 0.98, 0.67))
                .var(StyleVar::WindowRounding, 5.0)
                .var(StyleVar::FrameRounding, 3.0),
        )
    }

    /// Light gray surfaces with black text
    pub fn light() -> Self {
        Self::new(
            "Light",
            StyleLayer::new()
                .color(StyleColor::WindowBg, Color::rgba(0.94, 0.94, 0.94, 1.00))
                .color(StyleColor::Button, Color::rgba(0.74, 0.74, 0.74, 1.00))
                .color(StyleColor::ButtonHovered, Color::rgba(0.86, 0.86, 0.86, 1.00))
                .color(StyleColor::ButtonActive, Color::rgba(0.64, 0.64, 0.64, 1.00))
                .color(StyleColor::Text, Color::rgba(0.00, 0.00, 0.00, 1.00))
                .color(StyleColor::FrameBg, Color::rgba(1.00, 1.00, 1.00, 0.54))
                .color(StyleColor::FrameBgHovered, Color::rgba(0.86, 0.86, 0.86, 0.40))
                .color(StyleColor::FrameBgActive, Color::rgba(0.76, 0.76, 0.76, 0.67))
                .var(StyleVar::WindowRounding, 2.0)
                .var(StyleVar::FrameRounding, 2.0),
        )
    }

    /// Deep blue background with bright blue buttons
    pub fn blue() -> Self {
        Self::new(
            "Blue",
            StyleLayer::new()
                .color(StyleColor::WindowBg, Color::rgba(0.11, 0.15, 0.25, 1.00))
                .color(StyleColor::Button, Color::rgba(0.26, 0.59, 0.98, 0.40))
                .color(StyleColor::ButtonHovered, Color::rgba(0.26, 0.59, 0.98, 1.00))
                .color(StyleColor::ButtonActive, Color::rgba(0.06, 0.53, 0.98, 1.00))
                .color(StyleColor::Text, Color::rgba(1.00, 1.00, 1.00, 1.00))
                .color(StyleColor::FrameBg, Color::rgba(0.16, 0.29, 0.48, 0.54))
                .color(StyleColor::FrameBgHovered, Color::rgba(0.26, 0.59, 0.98, 0.40))
                .color(StyleColor::FrameBgActive, Color::rgba(0.26, 0.59, 0.98, 0.67))
                .var(StyleVar::WindowRounding, 8.0)
                .var(StyleVar::FrameRounding, 4.0),
        )
    }

    /// All built-in themes in display order
    pub fn builtin() -> Vec<Theme> {
        vec![Self::dark(), Self::light(), Self::blue()]
    }

    /// Look up a built-in theme by name, ignoring case
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::builtin()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = Theme::builtin().iter().map(Theme::name).collect();
        assert_eq!(names, ["Dark", "Light", "Blue"]);
    }

    #[test]
    fn test_by_name_ignores_case() {
        assert_eq!(Theme::by_name("light").map(|t| t.name()), Some("Light"));
        assert_eq!(Theme::by_name("BLUE").map(|t| t.name()), Some("Blue"));
        assert!(Theme::by_name("Solarized").is_none());
    }

    #[test]
    fn test_dark_theme_contrast() {
        let theme = Theme::dark();
        let text = theme.layer().get_color(StyleColor::Text).unwrap();
        let bg = theme.layer().get_color(StyleColor::WindowBg).unwrap();
        assert!(text.r > bg.r && text.g > bg.g && text.b > bg.b);
    }

    #[test]
    fn test_light_theme_contrast() {
        let theme = Theme::light();
        let text = theme.layer().get_color(StyleColor::Text).unwrap();
        let bg = theme.layer().get_color(StyleColor::WindowBg).unwrap();
        assert!(text.r < bg.r && text.g < bg.g && text.b < bg.b);
    }

    #[test]
    fn test_every_theme_has_same_slots() {
        for theme in Theme::builtin() {
            assert_eq!(theme.layer().color_count(), 8, "{}", theme.name());
            assert_eq!(theme.layer().var_count(), 2, "{}", theme.name());
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
