//! Global keyboard shortcut

use crate::callback::{Callback, Callback0};
use crate::error::Result;
use crate::event::{Key, Modifiers};
use crate::ui::Ui;
use crate::widget::Widget;

/// Fires `on_press` every frame `key` is held with exactly the configured
/// modifiers. Extra modifiers suppress it, so `Ctrl+S` does not trigger a
/// plain `S` binding.
pub struct Hotkey<M> {
    key: Key,
    modifiers: Modifiers,
    on_press: Callback0<M>,
}

impl<M> Hotkey<M> {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            on_press: Callback::none(),
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    callback_setter!(on_press);
}

fn held_modifiers<M>(ui: &mut Ui<'_, M>) -> Modifiers {
    let backend = ui.backend();
    Modifiers {
        ctrl: backend.is_key_down(Key::LeftCtrl) || backend.is_key_down(Key::RightCtrl),
        shift: backend.is_key_down(Key::LeftShift) || backend.is_key_down(Key::RightShift),
        alt: backend.is_key_down(Key::LeftAlt) || backend.is_key_down(Key::RightAlt),
    }
}

impl<M> Widget<M> for Hotkey<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        if !ui.backend().is_key_down(self.key) {
            return Ok(());
        }
        if held_modifiers(ui) == self.modifiers {
            log::debug!("Hotkey {:?} {:?} triggered", self.modifiers, self.key);
            ui.emit(self.on_press.emit());
        }
        Ok(())
    }
}

pub fn hotkey<M>(key: Key) -> Hotkey<M> {
    Hotkey::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use crate::Runtime;

    fn save() -> Hotkey<&'static str> {
        hotkey(Key::Char('s')).ctrl().on_press(|| "save")
    }

    #[test]
    fn test_requires_exact_modifiers() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().hold_key(Key::Char('s'));
        assert!(runtime.run_frame(|ui| save().build(ui)).unwrap().is_empty());

        runtime.backend_mut().hold_key(Key::LeftCtrl);
        assert_eq!(runtime.run_frame(|ui| save().build(ui)).unwrap(), vec!["save"]);

        runtime.backend_mut().hold_key(Key::RightShift);
        assert!(runtime.run_frame(|ui| save().build(ui)).unwrap().is_empty());
    }

    #[test]
    fn test_plain_key_ignores_ctrl_chord() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().hold_key(Key::Char('s'));
        runtime.backend_mut().hold_key(Key::RightCtrl);
        let plain = || hotkey(Key::Char('s')).on_press(|| "plain");
        assert!(runtime.run_frame(|ui| plain().build(ui)).unwrap().is_empty());
    }
}
