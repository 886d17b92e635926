use std::sync::mpsc;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anno_client::{AnnotationClient, RestClient};
use anno_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod views;

use actions::{Action, GlobalAction, TaskAction};
use background::SharedState;
use middleware::{
    keyboard::KeyboardMiddleware, logging::LoggingMiddleware, server::ServerMiddleware, Middleware,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    // .env may carry ANNO_TOKEN during development
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting anno-task-tui (log: {})", log_file.display());

    let config = AppConfig::load();
    let token = std::env::var("ANNO_TOKEN").ok();
    if token.is_none() {
        log::warn!("ANNO_TOKEN not set; the server may reject operations");
    }

    let client: Arc<dyn AnnotationClient> = Arc::new(RestClient::new(
        &config.server_url,
        token,
        Duration::from_secs(config.request_timeout_secs),
        config.page_size,
    )?);

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();
    let shared: SharedState = Arc::new(RwLock::new(AppState::default()));

    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(ServerMiddleware::new(client, &config)?),
    ];

    let worker = background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    // Load the task list right away
    action_tx.send(Action::Task(TaskAction::Refresh)).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &shared, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    // Stop the worker even when run_app exited on an error path
    action_tx.send(Action::Global(GlobalAction::Quit)).ok();
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting anno-task-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedState,
    action_tx: &mpsc::Sender<Action>,
    result_rx: &mpsc::Receiver<Action>,
) -> anyhow::Result<()> {
    let mut app_state = AppState::default();

    loop {
        // Reduce everything the background worker forwarded
        while let Ok(action) = result_rx.try_recv() {
            app_state = reducers::app_reducer::reduce(app_state, &action);
        }

        // Publish the snapshot middleware reads
        if let Ok(mut guard) = shared.write() {
            *guard = app_state.clone();
        }

        terminal.draw(|frame| views::render(&app_state, frame))?;

        if !app_state.running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .ok();
                }
            }
        }
    }

    Ok(())
}
