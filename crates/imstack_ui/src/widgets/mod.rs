// Widget implementations

mod button;
mod checkbox;
mod color_edit;
mod column;
mod counter;
mod event_handler;
mod hotkey;
mod progress_bar;
mod row;
mod separator;
mod single_window;
mod slider;
mod status_display;
mod style_scope;
mod text;
mod text_input;
mod timer;
mod tooltip;

pub use button::{button, Button};
pub use checkbox::{checkbox, Checkbox};
pub use color_edit::{color_edit, ColorEdit};
pub use column::{column, Column};
pub use counter::{counter, Counter, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP};
pub use event_handler::{event_handler, EventHandler, WATCHED_KEYS};
pub use hotkey::{hotkey, Hotkey};
pub use progress_bar::{progress_bar, ProgressBar};
pub use row::{row, Row};
pub use separator::{separator, spacing, Separator, Spacing};
pub use single_window::{single_window, SingleWindow};
pub use slider::{slider, Slider, SLIDER_FORMAT};
pub use status_display::{status_display, StatusDisplay, DEFAULT_STATUS_HEIGHT, STATUS_DISPLAY_KEY};
pub use style_scope::{style, Style};
pub use text::{label, Label};
pub use text_input::{text_input, TextInput};
pub use timer::{timer, Timer};
pub use tooltip::{tooltip, Tooltip};
