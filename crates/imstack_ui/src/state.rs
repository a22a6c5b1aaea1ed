//! State records for stateful widgets
//!
//! The widget descriptors are rebuilt every frame; whatever must survive
//! between frames lives in one of these records, owned by the
//! [`StateStore`](crate::StateStore).

use std::collections::VecDeque;

/// Messages older than this (in backend time units) are kept but not drawn
pub const MESSAGE_MAX_AGE: f64 = 10.0;

/// Default bound on retained status messages
pub const DEFAULT_MAX_MESSAGES: usize = 100;

/// Tag identifying which kind of record is stored under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Counter,
    Timer,
    MessageLog,
}

/// Tagged union of every record the store can hold
#[derive(Debug, Clone, PartialEq)]
pub enum StateRecord {
    Counter(CounterState),
    Timer(TimerState),
    MessageLog(MessageLogState),
}

impl StateRecord {
    pub fn kind(&self) -> StateKind {
        match self {
            StateRecord::Counter(_) => StateKind::Counter,
            StateRecord::Timer(_) => StateKind::Timer,
            StateRecord::MessageLog(_) => StateKind::MessageLog,
        }
    }
}

/// A record type that can be stored in and retrieved from a [`StateRecord`]
pub trait WidgetState: Sized {
    const KIND: StateKind;

    fn into_record(self) -> StateRecord;

    fn from_record(record: &StateRecord) -> Option<&Self>;

    fn from_record_mut(record: &mut StateRecord) -> Option<&mut Self>;
}

macro_rules! widget_state {
    ($ty:ty, $variant:ident) => {
        impl WidgetState for $ty {
            const KIND: StateKind = StateKind::$variant;

            fn into_record(self) -> StateRecord {
                StateRecord::$variant(self)
            }

            fn from_record(record: &StateRecord) -> Option<&Self> {
                match record {
                    StateRecord::$variant(state) => Some(state),
                    _ => None,
                }
            }

            fn from_record_mut(record: &mut StateRecord) -> Option<&mut Self> {
                match record {
                    StateRecord::$variant(state) => Some(state),
                    _ => None,
                }
            }
        }
    };
}

widget_state!(CounterState, Counter);
widget_state!(TimerState, Timer);
widget_state!(MessageLogState, MessageLog);

// =============================================================================
// Counter
// =============================================================================

/// Persisted value of a counter widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
    pub step: i64,
}

impl CounterState {
    pub fn new(value: i64, step: i64) -> Self {
        Self { value, step }
    }

    /// Step down unless already at `min`. Returns the new value if it changed.
    pub fn decrement(&mut self, min: i64) -> Option<i64> {
        if self.value <= min {
            return None;
        }
        self.value = self.value.saturating_sub(self.step).max(min);
        Some(self.value)
    }

    /// Step up unless already at `max`. Returns the new value if it changed.
    pub fn increment(&mut self, max: i64) -> Option<i64> {
        if self.value >= max {
            return None;
        }
        self.value = self.value.saturating_add(self.step).min(max);
        Some(self.value)
    }
}

// =============================================================================
// Timer
// =============================================================================

/// Observable phase of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Stopped,
    Running,
    Paused,
}

/// Persisted timer state.
///
/// While running, `elapsed_time` is derived from `start_time`; it is only
/// refreshed by [`tick`](Self::tick), which the widget calls once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerState {
    pub start_time: f64,
    pub elapsed_time: f64,
    pub is_running: bool,
    pub is_paused: bool,
}

impl TimerState {
    /// A stopped timer anchored at `now`
    pub fn new(now: f64) -> Self {
        Self {
            start_time: now,
            elapsed_time: 0.0,
            is_running: false,
            is_paused: false,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        match (self.is_running, self.is_paused) {
            (false, _) => TimerPhase::Stopped,
            (true, false) => TimerPhase::Running,
            (true, true) => TimerPhase::Paused,
        }
    }

    /// Advance `elapsed_time` if running and not paused
    pub fn tick(&mut self, now: f64) {
        if self.phase() == TimerPhase::Running {
            self.elapsed_time = now - self.start_time;
        }
    }

    /// Stopped -> Running, keeping whatever has accumulated
    pub fn start(&mut self, now: f64) {
        if self.is_running {
            return;
        }
        self.start_time = now - self.elapsed_time;
        self.is_running = true;
        self.is_paused = false;
    }

    /// Running -> Paused; elapsed time freezes at its current value
    pub fn pause(&mut self, now: f64) {
        if self.phase() != TimerPhase::Running {
            return;
        }
        self.tick(now);
        self.is_paused = true;
    }

    /// Paused -> Running
    pub fn resume(&mut self, now: f64) {
        if self.phase() != TimerPhase::Paused {
            return;
        }
        self.start_time = now - self.elapsed_time;
        self.is_paused = false;
    }

    /// Any phase -> Stopped with zero elapsed time
    pub fn stop(&mut self) {
        self.is_running = false;
        self.is_paused = false;
        self.elapsed_time = 0.0;
    }

    /// Zero the elapsed time without changing phase
    pub fn reset(&mut self, now: f64) {
        self.start_time = now;
        self.elapsed_time = 0.0;
    }
}

// =============================================================================
// Message log
// =============================================================================

/// A single timestamped status message
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub text: String,
    pub timestamp: f64,
}

/// Bounded FIFO of status messages
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLogState {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl Default for MessageLogState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

impl MessageLogState {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Append a message, evicting the oldest entries past `max_entries`
    pub fn push(&mut self, text: impl Into<String>, now: f64) {
        self.entries.push_back(LogEntry {
            text: text.into(),
            timestamp: now,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Entries young enough to display, newest first, paired with their age
    pub fn visible(&self, now: f64) -> impl Iterator<Item = (f64, &LogEntry)> + '_ {
        self.entries
            .iter()
            .rev()
            .map(move |entry| (now - entry.timestamp, entry))
            .filter(|(age, _)| *age < MESSAGE_MAX_AGE)
    }
}
