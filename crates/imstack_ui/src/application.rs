//! Frame runtime and application lifecycle

use log::LevelFilter;

use crate::backend::Backend;
use crate::element::Element;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::store::StateStore;
use crate::theme::Theme;
use crate::ui::Ui;

/// Core application trait that defines the lifecycle of an imstack_ui
/// application.
///
/// Inspired by the Elm Architecture: the view is rebuilt from application
/// state every frame, and widget callbacks produce messages that are fed to
/// `update` once the frame has been built.
pub trait Application {
    /// The message type produced by this application's widgets
    type Message: 'static;

    /// Window title for the application
    fn title(&self) -> String {
        String::from("imstack")
    }

    /// Produce the widget tree for the current application state
    fn view(&self) -> Element<Self::Message>;

    /// Update the application state in response to a message
    fn update(&mut self, message: Self::Message, ctx: &mut UpdateContext<'_>);
}

/// Runtime services available while handling a message
pub struct UpdateContext<'a> {
    store: &'a mut StateStore,
    theme: &'a mut Option<Theme>,
    now: f64,
}

impl UpdateContext<'_> {
    pub fn store(&mut self) -> &mut StateStore {
        self.store
    }

    /// Backend time of the frame that produced the message
    pub fn time(&self) -> f64 {
        self.now
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Switch the global theme from the next frame on
    pub fn set_theme(&mut self, theme: Theme) {
        log::info!("Theme set to: {}", theme.name());
        *self.theme = Some(theme);
    }
}

/// Settings for running an application.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Window title (overrides Application::title)
    pub window_title: Option<String>,

    /// Initial window size
    pub window_size: (u32, u32),

    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (900, 700),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

/// Install the platform logger at `level`.
///
/// On native targets `RUST_LOG` still overrides the level. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp_millis()
            .try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(level.to_level().unwrap_or(log::Level::Error));
    }
}

/// Owns everything that outlives a single frame: the backend, the retained
/// state store, the anonymous id counter and the global theme.
pub struct Runtime<B: Backend> {
    backend: B,
    store: StateStore,
    ids: IdGenerator,
    theme: Option<Theme>,
}

impl<B: Backend> Runtime<B> {
    /// A runtime with an empty store and no global theme
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            store: StateStore::new(),
            ids: IdGenerator::new(),
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.set_theme(theme);
        self
    }

    pub fn set_theme(&mut self, theme: Theme) {
        log::info!("Theme set to: {}", theme.name());
        self.theme = Some(theme);
    }

    pub fn clear_theme(&mut self) {
        self.theme = None;
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Current backend time
    pub fn time(&self) -> f64 {
        self.backend.time()
    }

    /// Build one frame.
    ///
    /// The global theme is pushed before `build` runs and popped after it,
    /// whether or not `build` succeeded. Messages emitted by widget callbacks
    /// are returned in the order the widgets were visited.
    pub fn run_frame<M, F>(&mut self, build: F) -> Result<Vec<M>>
    where
        F: FnOnce(&mut Ui<'_, M>) -> Result<()>,
    {
        self.backend.begin_frame();

        let mut ui = Ui::new(&mut self.backend, &mut self.store, &mut self.ids);
        let result = match &self.theme {
            Some(theme) => ui.with_style(theme.layer(), build),
            None => build(&mut ui),
        };
        let messages = ui.into_messages();

        self.backend.end_frame();

        match result {
            Ok(()) => Ok(messages),
            Err(err) => {
                log::error!("Frame aborted: {err}");
                Err(err)
            }
        }
    }

    /// Build one frame of `app` and dispatch the messages it produced
    pub fn run_app<A: Application>(&mut self, app: &mut A) -> Result<usize> {
        let view = app.view();
        let messages = self.run_frame(|ui| view.build(ui))?;
        let count = messages.len();

        let now = self.backend.time();
        let mut ctx = UpdateContext {
            store: &mut self.store,
            theme: &mut self.theme,
            now,
        };
        for message in messages {
            app.update(message, &mut ctx);
        }
        Ok(count)
    }
}

/// Drive `app` for `frames` frames against `backend`.
///
/// Stands in for a windowed event loop: the settings are logged, the backend
/// decides how time advances, and the first frame error stops the run.
pub fn run_headless<A, B>(
    app: &mut A,
    backend: B,
    settings: &Settings,
    frames: u64,
) -> Result<Runtime<B>>
where
    A: Application,
    B: Backend,
{
    let title = settings
        .window_title
        .clone()
        .unwrap_or_else(|| app.title());
    log::info!(
        "Running '{}' headless at {}x{} for {} frames",
        title,
        settings.window_size.0,
        settings.window_size.1,
        frames
    );

    let mut runtime = Runtime::new(backend);
    for _ in 0..frames {
        runtime.run_app(app)?;
    }
    Ok(runtime)
}
