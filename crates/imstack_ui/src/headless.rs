//! A backend that records draw commands instead of rendering them.
//!
//! Used by tests and by the headless demo runner. Interactions are scripted
//! ahead of a frame (`click`, `set_slider`, ...) and consumed by the next
//! `begin_frame`. Every recorded item carries the effective style at the
//! time it was issued, so style scoping can be observed directly.

use std::collections::{HashMap, HashSet};

use web_time::Instant;

use crate::backend::{Backend, StyleDepth, Viewport, WindowFlags};
use crate::color::Color;
use crate::error::{Result, UiError};
use crate::event::{Key, MouseButton};
use crate::style::{StyleColor, StyleVar};

/// A draw command recorded during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginWindow {
        name: String,
        flags: WindowFlags,
        rect: Option<((f32, f32), (f32, f32))>,
        background: Option<Color>,
    },
    EndWindow,
    BeginChild {
        id: String,
        height: f32,
    },
    EndChild,
    BeginTable {
        id: String,
        columns: usize,
    },
    TableNextRow,
    TableNextColumn,
    EndTable,
    Text {
        text: String,
        color: Option<Color>,
    },
    Button {
        path: String,
        label: String,
        size: Option<(f32, f32)>,
        color: Option<Color>,
        text_color: Option<Color>,
        rounding: Option<f32>,
    },
    Checkbox {
        label: String,
        value: bool,
    },
    Slider {
        label: String,
        value: f32,
        min: f32,
        max: f32,
        display: String,
        grab: Option<Color>,
    },
    ColorEdit {
        label: String,
        color: [f32; 3],
    },
    InputText {
        id: String,
        text: String,
        width: Option<f32>,
    },
    ProgressBar {
        fraction: f32,
        size: (f32, f32),
        overlay: String,
    },
    Separator,
    Spacing,
    Tooltip {
        text: String,
    },
}

#[derive(Debug)]
enum Clock {
    Manual(f64),
    Stepped { now: f64, step: f64 },
    Realtime(Instant),
}

/// Interactions applied to one frame
#[derive(Debug, Default, Clone)]
struct Script {
    clicks: HashSet<String>,
    right_clicks: HashSet<String>,
    double_clicks: HashSet<String>,
    hovered: HashSet<String>,
    focused: HashSet<String>,
    toggles: HashSet<String>,
    sliders: HashMap<String, f32>,
    colors: HashMap<String, [f32; 3]>,
    texts: HashMap<String, String>,
    keys_pressed: HashSet<Key>,
}

impl Script {
    fn matches(set: &HashSet<String>, path: &str, label: &str) -> bool {
        set.contains(path) || set.contains(label)
    }

    fn lookup<'a, T>(map: &'a HashMap<String, T>, path: &str, label: &str) -> Option<&'a T> {
        map.get(path).or_else(|| map.get(label))
    }
}

#[derive(Debug, Default, Clone)]
struct LastItem {
    path: String,
    label: String,
}

/// Recording backend with scripted input
#[derive(Debug)]
pub struct HeadlessBackend {
    clock: Clock,
    viewport: Viewport,
    pending: Script,
    current: Script,
    keys_down: HashSet<Key>,
    mouse_down: HashSet<MouseButton>,
    color_stack: Vec<(StyleColor, Color)>,
    var_stack: Vec<(StyleVar, f32)>,
    id_stack: Vec<String>,
    next_window_rect: Option<((f32, f32), (f32, f32))>,
    next_item_width: Option<f32>,
    last_item: Option<LastItem>,
    commands: Vec<DrawCommand>,
    frame_count: u64,
    unbalanced_frames: u64,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    /// A backend whose clock only moves when told to
    pub fn new() -> Self {
        Self::with_clock(Clock::Manual(0.0))
    }

    /// A backend whose clock advances by `step` at the start of each frame
    pub fn stepped(step: f64) -> Self {
        Self::with_clock(Clock::Stepped { now: 0.0, step })
    }

    /// A backend that reads the wall clock
    pub fn realtime() -> Self {
        Self::with_clock(Clock::Realtime(Instant::now()))
    }

    fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            viewport: Viewport {
                pos: (0.0, 0.0),
                size: (800.0, 600.0),
            },
            pending: Script::default(),
            current: Script::default(),
            keys_down: HashSet::new(),
            mouse_down: HashSet::new(),
            color_stack: Vec::new(),
            var_stack: Vec::new(),
            id_stack: Vec::new(),
            next_window_rect: None,
            next_item_width: None,
            last_item: None,
            commands: Vec::new(),
            frame_count: 0,
            unbalanced_frames: 0,
        }
    }

    pub fn with_viewport_size(mut self, width: f32, height: f32) -> Self {
        self.viewport.size = (width, height);
        self
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Jump the manual clock to `time`
    pub fn set_time(&mut self, time: f64) {
        match &mut self.clock {
            Clock::Manual(now) | Clock::Stepped { now, .. } => *now = time,
            Clock::Realtime(_) => log::warn!("HeadlessBackend: set_time ignored on realtime clock"),
        }
    }

    /// Move the manual clock forward by `dt`
    pub fn advance(&mut self, dt: f64) {
        let now = self.time();
        self.set_time(now + dt);
    }

    // =========================================================================
    // Scripted input for the next frame
    // =========================================================================

    /// Click an item by label or by scoped path (`"Lives##counter/+"`)
    pub fn click(&mut self, target: impl Into<String>) {
        self.pending.clicks.insert(target.into());
    }

    pub fn right_click(&mut self, target: impl Into<String>) {
        self.pending.right_clicks.insert(target.into());
    }

    pub fn double_click(&mut self, target: impl Into<String>) {
        self.pending.double_clicks.insert(target.into());
    }

    pub fn hover(&mut self, target: impl Into<String>) {
        self.pending.hovered.insert(target.into());
    }

    pub fn focus(&mut self, target: impl Into<String>) {
        self.pending.focused.insert(target.into());
    }

    pub fn toggle(&mut self, target: impl Into<String>) {
        self.pending.toggles.insert(target.into());
    }

    pub fn set_slider(&mut self, target: impl Into<String>, value: f32) {
        self.pending.sliders.insert(target.into(), value);
    }

    pub fn set_color(&mut self, target: impl Into<String>, color: [f32; 3]) {
        self.pending.colors.insert(target.into(), color);
    }

    pub fn set_text(&mut self, target: impl Into<String>, text: impl Into<String>) {
        self.pending.texts.insert(target.into(), text.into());
    }

    pub fn press_key(&mut self, key: Key) {
        self.pending.keys_pressed.insert(key);
    }

    /// Keep a key held until [`release_key`](Self::release_key)
    pub fn hold_key(&mut self, key: Key) {
        self.keys_down.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn hold_mouse(&mut self, button: MouseButton) {
        self.mouse_down.insert(button);
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_down.remove(&button);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Commands recorded in the current (or most recent) frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Texts drawn in the most recent frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The recorded command for the first button with this label or path
    pub fn find_button(&self, target: &str) -> Option<&DrawCommand> {
        self.commands.iter().find(|cmd| {
            matches!(cmd, DrawCommand::Button { path, label, .. } if path == target || label == target)
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames that ended with style entries still pushed
    pub fn unbalanced_frames(&self) -> u64 {
        self.unbalanced_frames
    }

    /// Top-most pushed value for a color slot
    pub fn effective_color(&self, slot: StyleColor) -> Option<Color> {
        self.color_stack
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, color)| *color)
    }

    /// Top-most pushed value for a style variable
    pub fn effective_var(&self, var: StyleVar) -> Option<f32> {
        self.var_stack
            .iter()
            .rev()
            .find(|(v, _)| *v == var)
            .map(|(_, value)| *value)
    }

    fn item_path(&self, label: &str) -> String {
        if self.id_stack.is_empty() {
            label.to_string()
        } else {
            format!("{}/{}", self.id_stack.join("/"), label)
        }
    }

    /// Register an item as the target of subsequent queries; returns its path
    fn register_item(&mut self, label: &str) -> String {
        let path = self.item_path(label);
        self.last_item = Some(LastItem {
            path: path.clone(),
            label: label.to_string(),
        });
        path
    }

    fn last_item_in(&self, set: &HashSet<String>) -> bool {
        self.last_item
            .as_ref()
            .is_some_and(|item| Script::matches(set, &item.path, &item.label))
    }

    fn pop_stack<T>(stack: &mut Vec<T>, name: &'static str, count: usize) -> Result<()> {
        if count > stack.len() {
            return Err(UiError::StyleUnderflow {
                stack: name,
                requested: count,
                depth: stack.len(),
            });
        }
        stack.truncate(stack.len() - count);
        Ok(())
    }
}

/// `%.2f`-style formats are the only ones the widgets use
fn format_value(format: &str, value: f32) -> String {
    let precision = format
        .strip_prefix("%.")
        .and_then(|rest| rest.strip_suffix('f'))
        .and_then(|digits| digits.parse::<usize>().ok());
    match precision {
        Some(precision) => format!("{value:.precision$}"),
        None => value.to_string(),
    }
}

impl Backend for HeadlessBackend {
    fn begin_frame(&mut self) {
        if let Clock::Stepped { now, step } = &mut self.clock {
            if self.frame_count > 0 {
                *now += *step;
            }
        }
        self.current = std::mem::take(&mut self.pending);
        self.commands.clear();
        self.last_item = None;
        self.next_item_width = None;
        self.next_window_rect = None;
    }

    fn end_frame(&mut self) {
        let depth = self.style_depth();
        if depth != StyleDepth::default() || !self.id_stack.is_empty() {
            log::error!(
                "HeadlessBackend: frame {} ended unbalanced: {:?}, {} ids",
                self.frame_count,
                depth,
                self.id_stack.len()
            );
            self.unbalanced_frames += 1;
        }
        self.frame_count += 1;
    }

    fn time(&self) -> f64 {
        match &self.clock {
            Clock::Manual(now) | Clock::Stepped { now, .. } => *now,
            Clock::Realtime(start) => start.elapsed().as_secs_f64(),
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_next_window_rect(&mut self, pos: (f32, f32), size: (f32, f32)) {
        self.next_window_rect = Some((pos, size));
    }

    fn begin_window(&mut self, name: &str, flags: WindowFlags) {
        let background = self.effective_color(StyleColor::WindowBg);
        self.commands.push(DrawCommand::BeginWindow {
            name: name.to_string(),
            flags,
            rect: self.next_window_rect.take(),
            background,
        });
    }

    fn end_window(&mut self) {
        self.commands.push(DrawCommand::EndWindow);
    }

    fn begin_child(&mut self, id: &str, height: f32) {
        self.commands.push(DrawCommand::BeginChild {
            id: id.to_string(),
            height,
        });
    }

    fn end_child(&mut self) {
        self.commands.push(DrawCommand::EndChild);
    }

    fn begin_table(&mut self, id: &str, columns: usize) -> bool {
        self.commands.push(DrawCommand::BeginTable {
            id: id.to_string(),
            columns,
        });
        true
    }

    fn table_next_row(&mut self) {
        self.commands.push(DrawCommand::TableNextRow);
    }

    fn table_next_column(&mut self) {
        self.commands.push(DrawCommand::TableNextColumn);
    }

    fn end_table(&mut self) {
        self.commands.push(DrawCommand::EndTable);
    }

    fn push_id(&mut self, id: &str) {
        self.id_stack.push(id.to_string());
    }

    fn pop_id(&mut self) {
        if self.id_stack.pop().is_none() {
            log::error!("HeadlessBackend: pop_id with empty id stack");
        }
    }

    fn text(&mut self, text: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color: self.effective_color(StyleColor::Text),
        });
    }

    fn button(&mut self, label: &str, size: Option<(f32, f32)>) -> bool {
        let path = self.register_item(label);
        let clicked = Script::matches(&self.current.clicks, &path, label);
        self.commands.push(DrawCommand::Button {
            path,
            label: label.to_string(),
            size,
            color: self.effective_color(StyleColor::Button),
            text_color: self.effective_color(StyleColor::Text),
            rounding: self.effective_var(StyleVar::FrameRounding),
        });
        clicked
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let path = self.register_item(label);
        let toggled = Script::matches(&self.current.toggles, &path, label);
        if toggled {
            *value = !*value;
        }
        self.commands.push(DrawCommand::Checkbox {
            label: label.to_string(),
            value: *value,
        });
        toggled
    }

    fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        format: &str,
    ) -> bool {
        let path = self.register_item(label);
        let edited = Script::lookup(&self.current.sliders, &path, label).copied();
        if let Some(new_value) = edited {
            *value = new_value.clamp(min, max);
        }
        self.commands.push(DrawCommand::Slider {
            label: label.to_string(),
            value: *value,
            min,
            max,
            display: format_value(format, *value),
            grab: self.effective_color(StyleColor::SliderGrab),
        });
        edited.is_some()
    }

    fn color_edit3(&mut self, label: &str, color: &mut [f32; 3]) -> bool {
        let path = self.register_item(label);
        let edited = Script::lookup(&self.current.colors, &path, label).copied();
        if let Some(new_color) = edited {
            *color = new_color;
        }
        self.commands.push(DrawCommand::ColorEdit {
            label: label.to_string(),
            color: *color,
        });
        edited.is_some()
    }

    fn input_text(&mut self, id: &str, _hint: &str, text: &mut String) -> bool {
        let path = self.register_item(id);
        let edited = Script::lookup(&self.current.texts, &path, id).cloned();
        if let Some(new_text) = &edited {
            text.clone_from(new_text);
        }
        self.commands.push(DrawCommand::InputText {
            id: id.to_string(),
            text: text.clone(),
            width: self.next_item_width.take(),
        });
        edited.is_some()
    }

    fn set_next_item_width(&mut self, width: f32) {
        self.next_item_width = Some(width);
    }

    fn progress_bar(&mut self, fraction: f32, size: (f32, f32), overlay: &str) {
        self.commands.push(DrawCommand::ProgressBar {
            fraction,
            size,
            overlay: overlay.to_string(),
        });
    }

    fn separator(&mut self) {
        self.commands.push(DrawCommand::Separator);
    }

    fn spacing(&mut self) {
        self.commands.push(DrawCommand::Spacing);
    }

    fn set_tooltip(&mut self, text: &str) {
        self.commands.push(DrawCommand::Tooltip {
            text: text.to_string(),
        });
    }

    fn is_item_hovered(&self) -> bool {
        self.last_item_in(&self.current.hovered)
    }

    fn is_item_clicked(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.last_item_in(&self.current.clicks),
            MouseButton::Right => self.last_item_in(&self.current.right_clicks),
            MouseButton::Middle => false,
        }
    }

    fn is_item_focused(&self) -> bool {
        self.last_item_in(&self.current.focused)
    }

    fn is_mouse_double_clicked(&self, button: MouseButton) -> bool {
        button == MouseButton::Left && self.last_item_in(&self.current.double_clicks)
    }

    fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_down.contains(&button)
            || (button == MouseButton::Right && self.last_item_in(&self.current.right_clicks))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.current.keys_pressed.contains(&key)
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key) || self.current.keys_pressed.contains(&key)
    }

    fn push_style_color(&mut self, slot: StyleColor, color: Color) {
        self.color_stack.push((slot, color));
    }

    fn pop_style_color(&mut self, count: usize) -> Result<()> {
        Self::pop_stack(&mut self.color_stack, "color", count)
    }

    fn push_style_var(&mut self, var: StyleVar, value: f32) {
        self.var_stack.push((var, value));
    }

    fn pop_style_var(&mut self, count: usize) -> Result<()> {
        Self::pop_stack(&mut self.var_stack, "var", count)
    }

    fn style_depth(&self) -> StyleDepth {
        StyleDepth {
            colors: self.color_stack.len(),
            vars: self.var_stack.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_click_applies_to_next_frame_only() {
        let mut backend = HeadlessBackend::new();
        backend.click("Go");

        backend.begin_frame();
        assert!(backend.button("Go", None));
        backend.end_frame();

        backend.begin_frame();
        assert!(!backend.button("Go", None));
        backend.end_frame();
    }

    #[test]
    fn test_click_by_scoped_path() {
        let mut backend = HeadlessBackend::new();
        backend.click("a/+");
        backend.begin_frame();
        backend.push_id("a");
        assert!(backend.button("+", None));
        backend.pop_id();
        backend.push_id("b");
        assert!(!backend.button("+", None));
        backend.pop_id();
        backend.end_frame();
        assert_eq!(backend.unbalanced_frames(), 0);
    }

    #[test]
    fn test_pop_underflow_is_error() {
        let mut backend = HeadlessBackend::new();
        backend.push_style_color(StyleColor::Button, Color::RED);
        assert!(matches!(
            backend.pop_style_color(2),
            Err(UiError::StyleUnderflow {
                requested: 2,
                depth: 1,
                ..
            })
        ));
        assert!(backend.pop_style_color(1).is_ok());
    }

    #[test]
    fn test_effective_color_is_innermost() {
        let mut backend = HeadlessBackend::new();
        backend.push_style_color(StyleColor::Button, Color::BLUE);
        backend.push_style_color(StyleColor::Text, Color::WHITE);
        backend.push_style_color(StyleColor::Button, Color::RED);
        assert_eq!(backend.effective_color(StyleColor::Button), Some(Color::RED));
        backend.pop_style_color(1).unwrap();
        assert_eq!(backend.effective_color(StyleColor::Button), Some(Color::BLUE));
        assert_eq!(backend.effective_color(StyleColor::FrameBg), None);
    }

    #[test]
    fn test_unbalanced_frame_is_counted() {
        let mut backend = HeadlessBackend::new();
        backend.begin_frame();
        backend.push_style_var(StyleVar::Alpha, 0.5);
        backend.end_frame();
        assert_eq!(backend.unbalanced_frames(), 1);
    }

    #[test]
    fn test_stepped_clock() {
        let mut backend = HeadlessBackend::stepped(0.5);
        backend.begin_frame();
        assert_eq!(backend.time(), 0.0);
        backend.end_frame();
        backend.begin_frame();
        assert_eq!(backend.time(), 0.5);
        backend.end_frame();
    }

    #[test]
    fn test_slider_value_is_clamped() {
        let mut backend = HeadlessBackend::new();
        backend.set_slider("Value", 250.0);
        backend.begin_frame();
        let mut value = 50.0;
        assert!(backend.slider_float("Value", &mut value, 0.0, 100.0, "%.2f"));
        assert_eq!(value, 100.0);
        assert!(matches!(
            backend.commands().last(),
            Some(DrawCommand::Slider { display, .. }) if display == "100.00"
        ));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value("%.1f", 2.345), "2.3");
        assert_eq!(format_value("%.2f", 1.0), "1.00");
        assert_eq!(format_value("plain", 1.5), "1.5");
    }
}
