//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain (API calls, bulk runs)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the
//! middleware chain, so spawned async work can trigger further handlers.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state snapshot middleware can read (main thread writes after reducing)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from the main thread and from Dispatcher re-entry
/// - `action_tx`: used to create the Dispatcher handed to middleware
/// - `result_tx`: forwards unconsumed actions to the main thread for reducing
/// - `state`: shared state snapshot for middleware reads
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        // Forward the shutdown signal and stop processing
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let mut should_forward = true;
        for mw in &mut middleware {
            if !mw.handle(&action, &current_state, &dispatcher) {
                should_forward = false;
                break;
            }
        }

        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}
