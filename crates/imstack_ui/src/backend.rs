//! Boundary with the immediate-mode rendering backend
//!
//! Widgets never draw pixels themselves. They issue these calls during the
//! frame walk, and item queries (`is_item_*`) always refer to the most
//! recently issued item.

use crate::color::Color;
use crate::error::Result;
use crate::event::{Key, MouseButton};
use crate::style::{StyleColor, StyleVar};

/// Window decoration flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFlags {
    pub no_title_bar: bool,
    pub no_resize: bool,
    pub no_move: bool,
    pub no_collapse: bool,
    pub no_scrollbar: bool,
}

impl WindowFlags {
    /// Undecorated, immovable window covering the viewport
    pub const FULLSCREEN: WindowFlags = WindowFlags {
        no_title_bar: true,
        no_resize: true,
        no_move: true,
        no_collapse: true,
        no_scrollbar: true,
    };
}

/// Position and size of the main viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

/// Depth of the two style stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDepth {
    pub colors: usize,
    pub vars: usize,
}

/// Drawing, interaction and style primitives of an immediate-mode renderer.
pub trait Backend {
    fn begin_frame(&mut self);
    fn end_frame(&mut self);

    /// Seconds since the backend started
    fn time(&self) -> f64;

    fn viewport(&self) -> Viewport;

    // Containers

    fn set_next_window_rect(&mut self, pos: (f32, f32), size: (f32, f32));
    fn begin_window(&mut self, name: &str, flags: WindowFlags);
    fn end_window(&mut self);
    fn begin_child(&mut self, id: &str, height: f32);
    fn end_child(&mut self);
    fn begin_table(&mut self, id: &str, columns: usize) -> bool;
    fn table_next_row(&mut self);
    fn table_next_column(&mut self);
    fn end_table(&mut self);

    /// Scope item identities so repeated labels in different widgets stay distinct
    fn push_id(&mut self, id: &str);
    fn pop_id(&mut self);

    // Items

    fn text(&mut self, text: &str);
    /// Returns true when clicked this frame
    fn button(&mut self, label: &str, size: Option<(f32, f32)>) -> bool;
    /// Returns true when toggled this frame
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    /// Returns true when the value was edited this frame
    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &str)
        -> bool;
    /// Returns true when the color was edited this frame
    fn color_edit3(&mut self, label: &str, color: &mut [f32; 3]) -> bool;
    /// Returns true when the text was edited this frame
    fn input_text(&mut self, id: &str, hint: &str, text: &mut String) -> bool;
    fn set_next_item_width(&mut self, width: f32);
    fn progress_bar(&mut self, fraction: f32, size: (f32, f32), overlay: &str);
    fn separator(&mut self);
    fn spacing(&mut self);
    fn set_tooltip(&mut self, text: &str);

    // Queries

    fn is_item_hovered(&self) -> bool;
    fn is_item_clicked(&self, button: MouseButton) -> bool;
    fn is_item_focused(&self) -> bool;
    fn is_mouse_double_clicked(&self, button: MouseButton) -> bool;
    fn is_mouse_down(&self, button: MouseButton) -> bool;
    fn is_key_pressed(&self, key: Key) -> bool;
    fn is_key_down(&self, key: Key) -> bool;

    // Style stacks

    fn push_style_color(&mut self, slot: StyleColor, color: Color);
    /// Pop `count` colors; fails with `StyleUnderflow` if fewer are pushed
    fn pop_style_color(&mut self, count: usize) -> Result<()>;
    fn push_style_var(&mut self, var: StyleVar, value: f32);
    /// Pop `count` variables; fails with `StyleUnderflow` if fewer are pushed
    fn pop_style_var(&mut self, count: usize) -> Result<()>;
    fn style_depth(&self) -> StyleDepth;
}
