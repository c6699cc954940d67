mod app;
mod config;
mod event;
mod library;
mod logging;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info, warn};

use app::handler;
use app::{App, AppAction};
use config::Config;
use event::input;
use event::Event;
use library::loader;

fn main() -> Result<()> {
    let config = Config::load()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match logging::init(&config.log_dir, &config.log_filter) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    info!(source = %config.source, "starting medialib");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("exiting on error: {e:#}");
        eprintln!("Error: {:#}", e);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: Config) -> Result<()> {
    let (event_tx, event_rx) = crossbeam_channel::unbounded();

    let _input_handle = input::spawn_input_thread(event_tx.clone());
    let _tick_handle = input::spawn_tick_thread(event_tx.clone(), Duration::from_millis(100));

    let mut app = App::new(config.source);
    let mut ui = ui::Ui::new();

    // Initial load runs in the background; the UI shows a spinner meanwhile
    loader::spawn_loader(app.source.clone(), event_tx.clone());

    terminal.draw(|frame| {
        ui.render(frame, &app);
    })?;

    loop {
        match event_rx.recv_timeout(Duration::from_millis(250)) {
            Ok(event) => {
                let actions = match event {
                    Event::Key(key) => handler::handle_key_event(key, &app, &mut ui),
                    Event::Mouse(mouse) => {
                        let size = terminal.size()?;
                        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                        handler::handle_mouse_event(mouse, &app, &mut ui, area)
                    }
                    Event::Resize => {
                        vec![] // Will re-render on next loop
                    }
                    Event::Tick => {
                        ui.tick = ui.tick.wrapping_add(1);
                        vec![]
                    }
                    Event::LibraryLoaded(Ok(tracks)) => vec![AppAction::LibraryLoaded(tracks)],
                    Event::LibraryLoaded(Err(e)) => vec![AppAction::LibraryFailed(e.to_string())],
                };

                for action in actions {
                    app.handle_action(action);
                }

                if app.library_just_loaded {
                    app.library_just_loaded = false;
                    ui.reset_panes();
                }
                ui.clamp_selections(&app);

                // App sets reload_requested; the loader thread is owned here
                if app.reload_requested {
                    app.reload_requested = false;
                    info!(source = %app.source, "reloading library");
                    loader::spawn_loader(app.source.clone(), event_tx.clone());
                }

                if app.should_quit {
                    break;
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                // Just re-render
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                warn!("event channel closed");
                break;
            }
        }

        terminal.draw(|frame| {
            ui.render(frame, &app);
        })?;
    }

    info!("shutting down");
    Ok(())
}
