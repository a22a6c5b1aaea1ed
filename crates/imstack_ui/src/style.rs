//! Style properties and override layers
//!
//! A [`StyleLayer`] is a set of overrides applied to a subtree. The engine
//! that pushes and unwinds layers lives in [`Ui::with_style`]; the
//! composition node for a local override is the [`Style`] widget.
//!
//! [`Ui::with_style`]: crate::Ui::with_style
//! [`Style`]: crate::Style

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Color slots a layer can override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleColor {
    Text,
    WindowBg,
    Button,
    ButtonHovered,
    ButtonActive,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    SliderGrab,
    SliderGrabActive,
    CheckMark,
    PlotHistogram,
}

/// Numeric style variables a layer can override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleVar {
    Alpha,
    WindowRounding,
    WindowBorderSize,
    FrameRounding,
    FrameBorderSize,
    GrabRounding,
    GrabMinSize,
    IndentSpacing,
    ScrollbarSize,
}

/// A mapping of style overrides.
///
/// Each property appears at most once per layer; iteration order is the
/// enum order, so pushes are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    colors: BTreeMap<StyleColor, Color>,
    vars: BTreeMap<StyleVar, f32>,
}

impl StyleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a color slot (replaces an earlier value for the same slot)
    pub fn color(mut self, slot: StyleColor, color: Color) -> Self {
        self.colors.insert(slot, color);
        self
    }

    /// Override a style variable (replaces an earlier value for the same var)
    pub fn var(mut self, var: StyleVar, value: f32) -> Self {
        self.vars.insert(var, value);
        self
    }

    pub fn colors(&self) -> impl Iterator<Item = (StyleColor, Color)> + '_ {
        self.colors.iter().map(|(slot, color)| (*slot, *color))
    }

    pub fn vars(&self) -> impl Iterator<Item = (StyleVar, f32)> + '_ {
        self.vars.iter().map(|(var, value)| (*var, *value))
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.vars.is_empty()
    }

    pub fn get_color(&self, slot: StyleColor) -> Option<Color> {
        self.colors.get(&slot).copied()
    }

    pub fn get_var(&self, var: StyleVar) -> Option<f32> {
        self.vars.get(&var).copied()
    }
}
