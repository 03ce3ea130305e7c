use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::{App, Page},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    widgets::render_app,
};

pub async fn run(config: Arc<AppConfig>, portfolio: Arc<Portfolio>, start_on_story: bool) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("{} | folio", portfolio.profile.name);
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), portfolio, theme);
    let size = terminal.size()?;
    let now = Instant::now();
    app.resize(size.width, size.height, now);
    app.mount_page(if start_on_story { Page::Story } else { Page::Home }, now);
    info!(width = size.width, height = size.height, "tui started");

    let event_handler = EventHandler::new(config.ui.tick_rate_ms)
        .with_animation_tick(config.ui.scroll.animation_tick_duration());

    let result = event_loop(&mut terminal, &mut app, &keymap, &event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(reveals = app.reveals_completed, "tui stopped");
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| render_app(frame, app, now))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action, now).await;
                }
                AppEvent::Resize(width, height) => app.resize(width, height, now),
                AppEvent::Scroll(delta) => app.scroll_lines(delta),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            return Ok(());
        }
    }
}

async fn handle_action(app: &mut App, action: Action, now: Instant) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if !matches!(action, Action::None | Action::PendingG) {
        app.clear_status();
    }

    let url = match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::MoveDown => {
            app.move_down();
            None
        }
        Action::MoveUp => {
            app.move_up();
            None
        }
        Action::ScrollHalfPageDown => {
            app.scroll_half_page_down();
            None
        }
        Action::ScrollHalfPageUp => {
            app.scroll_half_page_up();
            None
        }
        Action::ScrollPageDown => {
            app.scroll_page_down();
            None
        }
        Action::ScrollPageUp => {
            app.scroll_page_up();
            None
        }
        Action::JumpToTop => {
            app.jump_to_top(now);
            None
        }
        Action::JumpToBottom => {
            app.jump_to_bottom(now);
            None
        }
        Action::PendingG => {
            app.pending_key = Some('g');
            None
        }
        Action::Select => {
            if app.menu_open {
                app.menu_select(now)
            } else {
                app.open_focused()
            }
        }
        Action::NextLink => {
            app.next_link(now);
            None
        }
        Action::PrevLink => {
            app.prev_link(now);
            None
        }
        Action::OpenLink => app.open_focused(),
        Action::ToggleMenu => {
            app.toggle_menu();
            None
        }
        Action::CloseMenu => {
            app.close_menu();
            None
        }
        Action::MenuDown => {
            app.menu_down();
            None
        }
        Action::MenuUp => {
            app.menu_up();
            None
        }
        Action::Replay => {
            app.replay(now);
            None
        }
        Action::OpenResume => app.resume_url(),
        Action::OpenContact => app.contact_url(),
        Action::Navigate(index) => {
            app.navigate(index, now);
            None
        }
        Action::ExitMode => {
            app.focused_link = None;
            None
        }
        Action::None => None,
    };

    if let Some(url) = url {
        open_url(app, url).await;
    }
}

/// Hand a URL to the system opener without blocking the frame
async fn open_url(app: &mut App, url: String) {
    info!(url = %url, "opening link");
    let target = url.clone();
    match tokio::task::spawn_blocking(move || open::that(target)).await {
        Ok(Ok(())) => app.set_status(format!("Opened {}", url)),
        Ok(Err(e)) => {
            warn!(url = %url, error = %e, "failed to open link");
            app.set_status(format!("Failed to open link: {}", e));
        }
        Err(e) => {
            warn!(error = %e, "opener task failed");
            app.set_status("Failed to open link");
        }
    }
}
