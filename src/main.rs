use shopdeck::app::{App, AppMessage, Focus};
use shopdeck::controller::{SortField, SortOrder};
use shopdeck::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the log file. Logging is off without it,
/// since writing to stderr would corrupt the TUI.
const LOG_PATH_ENV: &str = "SHOPDECK_LOG";

fn init_tracing() {
    let Ok(path) = std::env::var(LOG_PATH_ENV) else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: could not open log file {}", path);
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shopdeck=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("shopdeck {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_tracing();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();

    let result = runtime.block_on(async {
        // Auto load the catalog on startup
        app.fetch_all();
        run_app(&mut terminal, &mut app).await
    });

    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Global keybinds (always active)
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                                return Ok(());
                            }

                            match app.focus {
                                Focus::Search => handle_search_key(app, key.code, key.modifiers),
                                Focus::Table => handle_table_key(app, key.code),
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Handle async messages from the fetch task
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Key handling while the search box has focus.
fn handle_search_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = Focus::Table;
            app.mark_dirty();
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_clear();
        }
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.search_push(c);
        }
        _ => {}
    }
}

/// Key handling while the table has focus.
fn handle_table_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            app.mark_dirty();
        }
        KeyCode::Char('r') => app.fetch_all(),
        KeyCode::Char('t') => app.sort_by(SortField::Title, SortOrder::Asc),
        KeyCode::Char('T') => app.sort_by(SortField::Title, SortOrder::Desc),
        KeyCode::Char('p') => app.sort_by(SortField::Price, SortOrder::Asc),
        KeyCode::Char('P') => app.sort_by(SortField::Price, SortOrder::Desc),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.grow_page_size(),
        KeyCode::Char('-') => app.shrink_page_size(),
        _ => {}
    }
}
