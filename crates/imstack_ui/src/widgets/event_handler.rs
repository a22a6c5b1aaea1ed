//! Interaction hooks for the previous item

use crate::callback::{Callback, Callback0};
use crate::error::Result;
use crate::event::{Key, MouseButton};
use crate::ui::Ui;
use crate::widget::Widget;

/// Keys reported to `on_key_press` while the item is focused
pub const WATCHED_KEYS: [Key; 3] = [Key::Enter, Key::Escape, Key::Space];

/// Reports hover, clicks and key presses on the most recently drawn item.
///
/// Place it directly after the widget it observes.
pub struct EventHandler<M> {
    on_hover: Callback0<M>,
    on_click: Callback0<M>,
    on_double_click: Callback0<M>,
    on_right_click: Callback0<M>,
    on_key_press: Callback<Key, M>,
}

impl<M> EventHandler<M> {
    pub fn new() -> Self {
        Self {
            on_hover: Callback::none(),
            on_click: Callback::none(),
            on_double_click: Callback::none(),
            on_right_click: Callback::none(),
            on_key_press: Callback::none(),
        }
    }

    callback_setter!(on_hover);
    callback_setter!(on_click);
    callback_setter!(on_double_click);
    callback_setter!(on_right_click);
    callback_setter!(on_key_press, Key);
}

impl<M> Default for EventHandler<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for EventHandler<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let backend = ui.backend();
        let hovered = backend.is_item_hovered();
        let clicked = backend.is_item_clicked(MouseButton::Left);
        let double_clicked = hovered && backend.is_mouse_double_clicked(MouseButton::Left);
        let right_clicked = hovered && backend.is_mouse_down(MouseButton::Right);
        let pressed: Vec<Key> = if backend.is_item_focused() {
            WATCHED_KEYS
                .into_iter()
                .filter(|key| backend.is_key_pressed(*key))
                .collect()
        } else {
            Vec::new()
        };

        if hovered {
            ui.emit(self.on_hover.emit());
        }
        if clicked {
            ui.emit(self.on_click.emit());
        }
        if double_clicked {
            ui.emit(self.on_double_click.emit());
        }
        if right_clicked {
            ui.emit(self.on_right_click.emit());
        }
        for key in pressed {
            ui.emit(self.on_key_press.call(key));
        }
        Ok(())
    }
}

pub fn event_handler<M>() -> EventHandler<M> {
    EventHandler::new()
}
