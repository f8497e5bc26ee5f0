mod action;
mod config;
mod dispatch;
mod panes;
mod state;
mod ui;

use std::time::Duration;

use log::info;
use simplelog::WriteLogger;

use config::Config;
use panes::{AddPane, EditorPane};
use state::EditorState;
use ui::{Frame, PaneManager, RatatuiBackend};

fn main() -> std::io::Result<()> {
    let config = Config::load();
    init_logging(&config);

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = run(&mut backend);

    backend.stop()?;
    info!("shutting down");
    result
}

fn init_logging(config: &Config) {
    let Some(path) = Config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = WriteLogger::init(config.level_filter(), simplelog::Config::default(), file);
    }
    info!("paramdeck starting, log level {}", config.log_level);
}

fn run(backend: &mut RatatuiBackend) -> std::io::Result<()> {
    let mut state = EditorState::new();
    let mut panes = PaneManager::new(Box::new(EditorPane::new()));
    panes.add_pane(Box::new(AddPane::new()));
    let mut app_frame = Frame::new();

    loop {
        if let Some(event) = backend.poll_event(Duration::from_millis(50))? {
            let action = panes.active_mut().handle_input(&event, &state);

            // Pane-requested navigation (open/close the add dialog)
            panes.process_nav(&action, &state);

            let result = dispatch::dispatch_action(&action, &mut state);
            if result.quit {
                break;
            }
            panes.process_nav_intents(&result.nav, &state);
            for message in result.status {
                app_frame.set_status(message);
            }
        }

        backend.draw(|area, buf| {
            app_frame.render_buf(area, buf, &state, panes.active().keymap());
            panes.render(app_frame.content_area(area), buf, &state);
        })?;
    }

    Ok(())
}
