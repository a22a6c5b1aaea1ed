//! Per-frame build context
//!
//! A [`Ui`] is created by the runtime for exactly one frame. It bundles the
//! backend, the retained store and the message queue that widget callbacks
//! feed, and it owns the style scoping engine.

use std::collections::HashSet;

use crate::backend::Backend;
use crate::element::Element;
use crate::error::{Result, UiError};
use crate::id::{IdGenerator, WidgetId};
use crate::store::StateStore;
use crate::style::StyleLayer;

/// Context handed to every widget's `build`
pub struct Ui<'a, M> {
    backend: &'a mut dyn Backend,
    store: &'a mut StateStore,
    ids: &'a mut IdGenerator,
    messages: Vec<M>,
    claimed: HashSet<WidgetId>,
    now: f64,
}

impl<'a, M> Ui<'a, M> {
    pub fn new(
        backend: &'a mut dyn Backend,
        store: &'a mut StateStore,
        ids: &'a mut IdGenerator,
    ) -> Self {
        let now = backend.time();
        Self {
            backend,
            store,
            ids,
            messages: Vec::new(),
            claimed: HashSet::new(),
            now,
        }
    }

    pub fn backend(&mut self) -> &mut dyn Backend {
        &mut *self.backend
    }

    pub fn store(&mut self) -> &mut StateStore {
        self.store
    }

    /// Backend time sampled when the frame started
    pub fn time(&self) -> f64 {
        self.now
    }

    /// Queue a message produced by a widget callback
    pub fn emit(&mut self, message: Option<M>) {
        if let Some(message) = message {
            self.messages.push(message);
        }
    }

    /// Messages queued so far this frame, in walk order
    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    /// Mark a stateful widget identity as built this frame.
    ///
    /// Two logical widgets sharing a key would silently share state, so a
    /// second claim within the same frame is an error.
    pub fn claim(&mut self, key: &WidgetId) -> Result<()> {
        if !self.claimed.insert(key.clone()) {
            return Err(UiError::DuplicateId { key: key.clone() });
        }
        Ok(())
    }

    /// A fresh id that is not stable across frames
    pub fn next_anonymous(&mut self, prefix: &str) -> WidgetId {
        self.ids.next_anonymous(prefix)
    }

    /// Build children in order
    pub fn build_all(&mut self, children: &[Element<M>]) -> Result<()> {
        for child in children {
            child.build(self)?;
        }
        Ok(())
    }

    /// Apply `layer` around `body` and unwind it afterwards.
    ///
    /// Colors are pushed before variables and popped after them. The number of
    /// entries popped from each stack is the number this call pushed, and the
    /// pops happen even when `body` fails, so the stacks leave this call at
    /// the depth they entered it.
    pub fn with_style<F>(&mut self, layer: &StyleLayer, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut colors = 0;
        for (slot, color) in layer.colors() {
            self.backend.push_style_color(slot, color);
            colors += 1;
        }

        let mut vars = 0;
        for (var, value) in layer.vars() {
            self.backend.push_style_var(var, value);
            vars += 1;
        }

        log::trace!("with_style: pushed {colors} colors, {vars} vars");
        let result = body(self);

        let vars_popped = if vars > 0 {
            self.backend.pop_style_var(vars)
        } else {
            Ok(())
        };
        let colors_popped = if colors > 0 {
            self.backend.pop_style_color(colors)
        } else {
            Ok(())
        };

        result.and(vars_popped).and(colors_popped)
    }

    /// Scope item identities under `id` while building `body`
    pub fn with_id<F, T>(&mut self, id: &str, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.backend.push_id(id);
        let result = body(self);
        self.backend.pop_id();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StyleDepth;
    use crate::color::Color;
    use crate::error::UiError;
    use crate::headless::HeadlessBackend;
    use crate::style::{StyleColor, StyleVar};

    fn with_ui<R>(backend: &mut HeadlessBackend, f: impl FnOnce(&mut Ui<'_, ()>) -> R) -> R {
        let mut store = StateStore::new();
        let mut ids = IdGenerator::new();
        let mut ui = Ui::new(backend, &mut store, &mut ids);
        f(&mut ui)
    }

    #[test]
    fn test_nested_scopes_balance() {
        let mut backend = HeadlessBackend::new();
        with_ui(&mut backend, |ui| {
            let red = StyleLayer::new().color(StyleColor::Button, Color::RED);
            let empty = StyleLayer::new();
            let var = StyleLayer::new().var(StyleVar::FrameRounding, 5.0);
            ui.with_style(&red, |ui| {
                ui.with_style(&empty, |ui| ui.with_style(&var, |_| Ok(())))
            })
            .unwrap();
        });
        assert_eq!(backend.style_depth(), StyleDepth::default());
    }

    #[test]
    fn test_depth_inside_scope() {
        let mut backend = HeadlessBackend::new();
        let layer = StyleLayer::new()
            .color(StyleColor::Button, Color::RED)
            .color(StyleColor::Text, Color::WHITE)
            .var(StyleVar::FrameRounding, 10.0);
        with_ui(&mut backend, |ui| {
            ui.with_style(&layer, |ui| {
                assert_eq!(
                    ui.backend().style_depth(),
                    StyleDepth { colors: 2, vars: 1 }
                );
                Ok(())
            })
            .unwrap();
        });
        assert_eq!(backend.style_depth(), StyleDepth::default());
    }

    #[test]
    fn test_unwinds_when_body_fails() {
        let mut backend = HeadlessBackend::new();
        let layer = StyleLayer::new()
            .color(StyleColor::Button, Color::RED)
            .var(StyleVar::Alpha, 0.5);
        let result = with_ui(&mut backend, |ui| {
            ui.with_style(&layer, |_| {
                Err(UiError::InvalidRange {
                    key: WidgetId::fixed("x"),
                    min: 1,
                    max: 0,
                })
            })
        });
        assert!(matches!(result, Err(UiError::InvalidRange { .. })));
        assert_eq!(backend.style_depth(), StyleDepth::default());
    }

    #[test]
    fn test_second_claim_in_frame_fails() {
        let mut backend = HeadlessBackend::new();
        let key = WidgetId::new("Score", crate::id::Role::Counter);
        with_ui(&mut backend, |ui| {
            assert!(ui.claim(&key).is_ok());
            assert!(matches!(ui.claim(&key), Err(UiError::DuplicateId { .. })));
        });
    }

    #[test]
    fn test_emit_skips_none() {
        let mut backend = HeadlessBackend::new();
        let mut store = StateStore::new();
        let mut ids = IdGenerator::new();
        let mut ui: Ui<'_, u32> = Ui::new(&mut backend, &mut store, &mut ids);
        ui.emit(Some(1));
        ui.emit(None);
        ui.emit(Some(2));
        assert_eq!(ui.into_messages(), vec![1, 2]);
    }
}
