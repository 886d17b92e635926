//! Server Middleware
//!
//! Central middleware for all annotation server interactions:
//! - task loading (fetch_tasks)
//! - bulk delete / bulk export over the selected tasks
//! - cancellation and retry of bulk runs
//!
//! Owns the tokio runtime; every API call runs as a spawned task so the
//! middleware chain never blocks on the network. Results come back as
//! dispatched actions.

use std::sync::Arc;

use anno_bulk::{BulkFailure, BulkObserver, BulkRequest, BulkTransition, CancelFlag};
use anno_client::{AnnoTask, AnnotationClient, ExportFormat};
use anno_config::AppConfig;
use tokio::runtime::Runtime;

use crate::actions::{Action, BulkAction, StatusBarAction, TaskAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Forwards runner output into the action channel
struct DispatcherObserver {
    dispatcher: Dispatcher,
    source: &'static str,
}

impl BulkObserver<AnnoTask> for DispatcherObserver {
    fn transition(&self, transition: BulkTransition) {
        self.dispatcher
            .dispatch(Action::Bulk(BulkAction::Transition(transition)));
    }

    fn failed(&self, failure: BulkFailure<AnnoTask>) {
        self.dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(format!(
            "{} failed: {} ({} task(s) not processed)",
            self.source, failure.error, failure.remaining
        ))));
        self.dispatcher.dispatch(Action::Bulk(BulkAction::Failed {
            source: self.source.to_string(),
            error: failure.error.to_string(),
            remaining: failure.remaining,
            retry: failure.retry,
        }));
    }
}

/// Which bulk operation to build from the current selection
#[derive(Clone, Copy)]
enum BulkKind {
    Delete,
    Export(ExportFormat),
}

impl BulkKind {
    /// Short name for status messages and the retry popup
    fn source(&self) -> &'static str {
        match self {
            BulkKind::Delete => "Delete",
            BulkKind::Export(_) => "Export",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            BulkKind::Delete => "Deleting",
            BulkKind::Export(_) => "Exporting",
        }
    }

    /// Deletes change the task list, so the list is reloaded afterwards
    fn refresh_after(&self) -> bool {
        matches!(self, BulkKind::Delete)
    }
}

/// Middleware for all annotation server operations
pub struct ServerMiddleware {
    runtime: Runtime,
    client: Arc<dyn AnnotationClient>,
    export_format: ExportFormat,
    cancel: CancelFlag,
}

impl ServerMiddleware {
    /// Create the middleware with its own runtime
    pub fn new(client: Arc<dyn AnnotationClient>, config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        let export_format =
            ExportFormat::from_name(&config.export_format).unwrap_or_else(|| {
                log::warn!(
                    "unknown export format {:?}, falling back to {}",
                    config.export_format,
                    ExportFormat::default()
                );
                ExportFormat::default()
            });
        Ok(Self {
            runtime,
            client,
            export_format,
            cancel: CancelFlag::new(),
        })
    }

    /// Reload the task list in the background
    fn load_tasks(&self, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        dispatcher.dispatch(Action::Task(TaskAction::LoadStart));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running("Loading tasks...")));

        self.runtime.spawn(async move {
            match client.fetch_tasks().await {
                Ok(tasks) => {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(format!(
                        "{} tasks loaded",
                        tasks.len()
                    ))));
                    dispatcher.dispatch(Action::Task(TaskAction::Loaded(tasks)));
                }
                Err(e) => {
                    log::error!("failed to load tasks: {e}");
                    dispatcher.dispatch(Action::Task(TaskAction::LoadError(e.to_string())));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(format!(
                        "Load failed: {e}"
                    ))));
                }
            }
        });
    }

    /// Build and start a bulk run over the selected tasks
    fn start_bulk(
        &self,
        kind: BulkKind,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        if state.bulk.fetching {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "A bulk operation is already running",
            )));
            return;
        }

        let targets = state.task_view.selected_or_cursor();
        if targets.is_empty() {
            log::warn!("{}: no tasks selected", kind.source());
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "No tasks selected",
            )));
            return;
        }

        let client = Arc::clone(&self.client);
        let request = match kind {
            BulkKind::Delete => BulkRequest::new(
                targets,
                move |task: AnnoTask, _index, _total| {
                    let client = Arc::clone(&client);
                    async move {
                        client.delete_task(task.id).await?;
                        Ok(())
                    }
                },
                status_message(kind.verb()),
            ),
            BulkKind::Export(format) => BulkRequest::new(
                targets,
                move |task: AnnoTask, _index, _total| {
                    let client = Arc::clone(&client);
                    async move {
                        client.export_annotations(task.id, format).await?;
                        Ok(())
                    }
                },
                status_message(kind.verb()),
            ),
        };

        self.run_request(request, kind.source(), kind.refresh_after(), dispatcher);
    }

    /// Spawn a bulk run; transitions and failures come back as actions
    fn run_request(
        &self,
        request: BulkRequest<AnnoTask>,
        source: &'static str,
        refresh_after: bool,
        dispatcher: &Dispatcher,
    ) {
        let total = request.items.len();
        let cancel = self.cancel.clone();
        let observer = DispatcherObserver {
            dispatcher: dispatcher.clone(),
            source,
        };

        let success_dispatcher = dispatcher.clone();
        let on_success: Box<dyn FnOnce() + Send> = Box::new(move || {
            success_dispatcher.dispatch(Action::Task(TaskAction::DeselectAll));
            success_dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(format!(
                "{source} finished for {total} task(s)"
            ))));
            if refresh_after {
                success_dispatcher.dispatch(Action::Task(TaskAction::Refresh));
            }
        });

        let error_dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match anno_bulk::run(request, &cancel, &observer, Some(on_success)).await {
                Ok(processed) => {
                    log::info!("{source}: {processed} of {total} task(s) processed");
                }
                Err(e) => {
                    // Single-target fast path: the error surfaces here
                    // instead of through a failure report.
                    log::error!("{source} failed: {e:#}");
                    error_dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("{source} failed: {e}"),
                    )));
                }
            }
        });
    }

    /// Re-run the unprocessed tail held by the retry popup
    fn retry(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(popup) = &state.retry_popup else {
            log::warn!("retry requested without a retry payload");
            return;
        };

        let source: &'static str = match popup.source.as_str() {
            "Delete" => "Delete",
            "Export" => "Export",
            _ => "Bulk operation",
        };
        let refresh_after = source == "Delete";

        dispatcher.dispatch(Action::Bulk(BulkAction::DiscardRetry));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(format!(
            "Retrying {} task(s)...",
            popup.remaining
        ))));
        self.run_request(
            popup.payload.clone().into_request(),
            source,
            refresh_after,
            dispatcher,
        );
    }
}

/// Progress message closure shared by every bulk kind
fn status_message(verb: &'static str) -> impl Fn(&AnnoTask, usize, usize) -> String + Send + Sync {
    move |task, index, total| format!("{verb} task \"{}\" ({} of {})", task.name, index + 1, total)
}

impl Middleware for ServerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Task(TaskAction::Refresh) => {
                self.load_tasks(dispatcher);
                false
            }

            Action::Task(TaskAction::DeleteRequest) => {
                self.start_bulk(BulkKind::Delete, state, dispatcher);
                false
            }

            Action::Task(TaskAction::ExportRequest) => {
                self.start_bulk(BulkKind::Export(self.export_format), state, dispatcher);
                false
            }

            Action::Bulk(BulkAction::CancelRequest) => {
                if state.bulk.fetching {
                    log::info!("cancellation requested");
                    self.cancel.cancel();
                    dispatcher.dispatch(Action::Bulk(BulkAction::Transition(
                        BulkTransition::Cancel,
                    )));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        "Cancelling after the current task...",
                    )));
                }
                false
            }

            Action::Bulk(BulkAction::Retry) => {
                self.retry(state, dispatcher);
                false
            }

            _ => true,
        }
    }
}
