//! Counter widget with retained value

use crate::callback::Callback;
use crate::error::{Result, UiError};
use crate::id::{Role, WidgetId};
use crate::state::CounterState;
use crate::store::StateStore;
use crate::ui::Ui;
use crate::widget::Widget;

const COUNTER_TABLE_ID: &str = "##counter_table";

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;
pub const DEFAULT_STEP: i64 = 1;

/// An integer with "-" and "+" buttons, kept in the store under
/// `label##counter`.
///
/// The value starts at `min`. Steps past either bound are ignored and do not
/// fire `on_change`. The step is captured when the record is first created.
/// If the bounds change between frames, the stored value is pulled back
/// into the new range without firing `on_change`.
pub struct Counter<M> {
    id: WidgetId,
    label: String,
    min: i64,
    max: i64,
    step: i64,
    on_change: Callback<i64, M>,
}

impl<M> Counter<M> {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: WidgetId::new(&label, Role::Counter),
            label,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            on_change: Callback::none(),
        }
    }

    builder_field!(min, i64);
    builder_field!(max, i64);
    builder_field!(step, i64);
    callback_setter!(on_change, i64);

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    fn state<'s>(&self, store: &'s mut StateStore) -> Result<&'s mut CounterState> {
        if self.min > self.max {
            return Err(UiError::InvalidRange {
                key: self.id.clone(),
                min: self.min,
                max: self.max,
            });
        }
        let state = store.get_or_create(&self.id, || {
            CounterState::new(self.min, self.step.max(1))
        })?;
        // Bounds may have moved since the record was created
        let clamped = state.value.clamp(self.min, self.max);
        if clamped != state.value {
            log::debug!("{}: {} clamped to {}", self.label, state.value, clamped);
            state.value = clamped;
        }
        Ok(state)
    }

    /// Current value, creating the record if this counter was never built
    pub fn get_value(&self, store: &mut StateStore) -> Result<i64> {
        Ok(self.state(store)?.value)
    }

    /// Overwrite the value. Values outside `[min, max]` are ignored.
    pub fn set_value(&self, store: &mut StateStore, value: i64) -> Result<()> {
        let (min, max) = (self.min, self.max);
        let state = self.state(store)?;
        if (min..=max).contains(&value) {
            state.value = value;
        }
        Ok(())
    }

    fn report(&self, ui: &mut Ui<'_, M>, old: i64, new: Option<i64>) {
        if let Some(new) = new {
            log::debug!("{}: {} -> {}", self.label, old, new);
            ui.emit(self.on_change.call(new));
        }
    }
}

impl<M> Widget<M> for Counter<M> {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        self.state(ui.store())?;
        ui.claim(&self.id)?;

        ui.with_id(self.id.as_str(), |ui| {
            if !ui.backend().begin_table(COUNTER_TABLE_ID, 4) {
                return Ok(());
            }
            ui.backend().table_next_row();

            ui.backend().table_next_column();
            ui.backend().text(&self.label);

            ui.backend().table_next_column();
            if ui.backend().button("-", None) {
                let state = self.state(ui.store())?;
                let old = state.value;
                let new = state.decrement(self.min);
                self.report(ui, old, new);
            }

            ui.backend().table_next_column();
            let value = self.state(ui.store())?.value;
            ui.backend().text(&format!(" {value} "));

            ui.backend().table_next_column();
            if ui.backend().button("+", None) {
                let state = self.state(ui.store())?;
                let old = state.value;
                let new = state.increment(self.max);
                self.report(ui, old, new);
            }

            ui.backend().end_table();
            Ok(())
        })
    }
}

pub fn counter<M>(label: impl Into<String>) -> Counter<M> {
    Counter::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use crate::Runtime;

    #[test]
    fn test_value_text_and_default() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime
            .run_frame::<(), _>(|ui| counter("Lives").min(3).max(9).build(ui))
            .unwrap();
        assert_eq!(runtime.backend().texts(), vec!["Lives", " 3 "]);
    }

    #[test]
    fn test_buttons_are_scoped_per_counter() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().click("B##counter/+");
        let messages = runtime
            .run_frame(|ui| {
                counter("A").on_change(|v| ("A", v)).build(ui)?;
                counter("B").on_change(|v| ("B", v)).build(ui)
            })
            .unwrap();
        assert_eq!(messages, vec![("B", 1)]);
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let mut store = StateStore::new();
        let c: Counter<()> = counter("bad").min(5).max(1);
        assert!(matches!(
            c.get_value(&mut store),
            Err(UiError::InvalidRange { min: 5, max: 1, .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_value_ignores_out_of_range() {
        let mut store = StateStore::new();
        let c: Counter<()> = counter("x").min(0).max(5);
        c.set_value(&mut store, 4).unwrap();
        assert_eq!(c.get_value(&mut store).unwrap(), 4);
        c.set_value(&mut store, 6).unwrap();
        c.set_value(&mut store, -1).unwrap();
        assert_eq!(c.get_value(&mut store).unwrap(), 4);
    }

    #[test]
    fn test_value_follows_shrinking_bounds() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        for _ in 0..5 {
            runtime.backend_mut().click("x##counter/+");
            runtime
                .run_frame::<(), _>(|ui| counter("x").min(0).max(5).build(ui))
                .unwrap();
        }
        let wide: Counter<()> = counter("x").min(0).max(5);
        assert_eq!(wide.get_value(runtime.store_mut()).unwrap(), 5);

        runtime
            .run_frame::<(), _>(|ui| counter("x").min(0).max(3).build(ui))
            .unwrap();
        assert_eq!(runtime.backend().texts(), vec!["x", " 3 "]);

        runtime.backend_mut().click("x##counter/-");
        let messages = runtime
            .run_frame(|ui| counter("x").min(0).max(3).on_change(|v| v).build(ui))
            .unwrap();
        assert_eq!(messages, vec![2]);

        let raised: Counter<()> = counter("x").min(4).max(8);
        assert_eq!(raised.get_value(runtime.store_mut()).unwrap(), 4);
    }

    #[test]
    fn test_step_applies_to_clicks() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().click("Score##counter/+");
        let messages = runtime
            .run_frame(|ui| counter("Score").step(10).max(25).on_change(|v| v).build(ui))
            .unwrap();
        assert_eq!(messages, vec![10]);
    }

    #[test]
    fn test_duplicate_counter_in_frame_fails() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        let result = runtime.run_frame::<(), _>(|ui| {
            counter("Score").build(ui)?;
            counter("Score").build(ui)
        });
        assert!(matches!(result, Err(UiError::DuplicateId { .. })));
    }
}
