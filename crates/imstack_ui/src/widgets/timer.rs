//! Stopwatch widget with retained state

use crate::error::Result;
use crate::id::{Role, WidgetId};
use crate::state::{TimerPhase, TimerState};
use crate::store::StateStore;
use crate::ui::Ui;
use crate::widget::Widget;

const TIMER_TABLE_ID: &str = "##timer_controls";

/// Elapsed-time display with Start/Pause/Resume, Stop and Reset controls.
///
/// State lives under `label##timer`. Time is the backend clock sampled at
/// the start of the frame, so every timer in a frame sees the same `now`.
#[derive(Debug, Clone)]
pub struct Timer {
    id: WidgetId,
    label: String,
}

impl Timer {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: WidgetId::new(&label, Role::Timer),
            label,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    fn state<'s>(&self, store: &'s mut StateStore, now: f64) -> Result<&'s mut TimerState> {
        store.get_or_create(&self.id, || TimerState::new(now))
    }

    /// Elapsed seconds as of `now`
    pub fn elapsed(&self, store: &mut StateStore, now: f64) -> Result<f64> {
        let state = self.state(store, now)?;
        state.tick(now);
        Ok(state.elapsed_time)
    }

    pub fn phase(&self, store: &mut StateStore, now: f64) -> Result<TimerPhase> {
        Ok(self.state(store, now)?.phase())
    }

    pub fn start(&self, store: &mut StateStore, now: f64) -> Result<()> {
        self.state(store, now)?.start(now);
        Ok(())
    }

    pub fn pause(&self, store: &mut StateStore, now: f64) -> Result<()> {
        self.state(store, now)?.pause(now);
        Ok(())
    }

    pub fn resume(&self, store: &mut StateStore, now: f64) -> Result<()> {
        self.state(store, now)?.resume(now);
        Ok(())
    }

    pub fn stop(&self, store: &mut StateStore, now: f64) -> Result<()> {
        self.state(store, now)?.stop();
        Ok(())
    }

    pub fn reset(&self, store: &mut StateStore, now: f64) -> Result<()> {
        self.state(store, now)?.reset(now);
        Ok(())
    }
}

impl<M> Widget<M> for Timer {
    fn build(&self, ui: &mut Ui<'_, M>) -> Result<()> {
        let now = ui.time();
        let elapsed = self.elapsed(ui.store(), now)?;
        ui.claim(&self.id)?;

        ui.backend()
            .text(&format!("{}: {:.1}s", self.label, elapsed));

        ui.with_id(self.id.as_str(), |ui| {
            if !ui.backend().begin_table(TIMER_TABLE_ID, 3) {
                return Ok(());
            }
            ui.backend().table_next_row();

            ui.backend().table_next_column();
            match self.phase(ui.store(), now)? {
                TimerPhase::Stopped => {
                    if ui.backend().button("Start", None) {
                        self.start(ui.store(), now)?;
                        log::debug!("Timer '{}' started at {:.1}s", self.label, elapsed);
                    }
                }
                TimerPhase::Running => {
                    if ui.backend().button("Pause", None) {
                        self.pause(ui.store(), now)?;
                        log::debug!("Timer '{}' paused", self.label);
                    }
                }
                TimerPhase::Paused => {
                    if ui.backend().button("Resume", None) {
                        self.resume(ui.store(), now)?;
                        log::debug!("Timer '{}' resumed", self.label);
                    }
                }
            }

            ui.backend().table_next_column();
            if ui.backend().button("Stop", None) {
                self.stop(ui.store(), now)?;
                log::debug!("Timer '{}' stopped", self.label);
            }

            ui.backend().table_next_column();
            if ui.backend().button("Reset", None) {
                self.reset(ui.store(), now)?;
                log::debug!("Timer '{}' reset", self.label);
            }

            ui.backend().end_table();
            Ok(())
        })
    }
}

pub fn timer(label: impl Into<String>) -> Timer {
    Timer::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use crate::Runtime;

    fn frame(runtime: &mut Runtime<HeadlessBackend>) -> Vec<String> {
        runtime
            .run_frame::<(), _>(|ui| timer("Lap").build(ui))
            .unwrap();
        runtime
            .backend()
            .texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_buttons_follow_phase() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        frame(&mut runtime);
        assert!(runtime.backend().find_button("Start").is_some());

        runtime.backend_mut().click("Lap##timer/Start");
        frame(&mut runtime);
        frame(&mut runtime);
        assert!(runtime.backend().find_button("Pause").is_some());

        runtime.backend_mut().click("Pause");
        frame(&mut runtime);
        frame(&mut runtime);
        assert!(runtime.backend().find_button("Resume").is_some());
    }

    #[test]
    fn test_elapsed_text() {
        let mut runtime = Runtime::new(HeadlessBackend::new());
        runtime.backend_mut().click("Start");
        frame(&mut runtime);
        runtime.backend_mut().advance(2.5);
        assert_eq!(frame(&mut runtime), vec!["Lap: 2.5s"]);
    }

    #[test]
    fn test_reset_keeps_running() {
        let mut store = StateStore::new();
        let t = timer("t");
        t.start(&mut store, 0.0).unwrap();
        t.reset(&mut store, 4.0).unwrap();
        assert_eq!(t.phase(&mut store, 4.0).unwrap(), TimerPhase::Running);
        assert_eq!(t.elapsed(&mut store, 6.0).unwrap(), 2.0);
    }
}
