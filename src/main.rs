//! Headless runner for the styling demo.
//!
//! Loads the configuration, drives the demo for the configured number of
//! frames with a scripted tour of interactions, and logs the final frame.

use std::process::ExitCode;

use imstack::{scripted_input, AppConfig, StylingDemo};
use imstack_ui::headless::HeadlessBackend;
use imstack_ui::{init_logging, Runtime};

const FRAME_STEP: f64 = 1.0 / 60.0;

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config.settings();
    let theme = config.theme()?;
    let (width, height) = settings.window_size;

    let backend =
        HeadlessBackend::stepped(FRAME_STEP).with_viewport_size(width as f32, height as f32);
    let mut runtime = Runtime::new(backend).with_theme(theme);
    let mut app = StylingDemo::new(config);
    log::info!(
        "Running '{}' for {} frames",
        settings.window_title.as_deref().unwrap_or_default(),
        config.frames
    );

    for frame in 0..config.frames {
        scripted_input(frame, runtime.backend_mut());
        let handled = runtime.run_app(&mut app)?;
        log::debug!("Frame {frame}: {handled} messages");
    }

    for text in runtime.backend().texts() {
        log::info!("  {text}");
    }
    Ok(())
}

fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        AppConfig::load_from_default_path().unwrap_or_default()
    }

    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
}

fn main() -> ExitCode {
    let config = load_config();
    init_logging(config.log_level.to_level_filter());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
