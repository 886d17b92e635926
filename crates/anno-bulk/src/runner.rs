//! Sequential bulk-operation runner
//!
//! Iterates a list of items, invoking a caller-supplied async operation
//! for each one in order, with exactly one operation in flight at a time.
//! Emits [`BulkTransition`]s for a progress UI, honors a cooperative
//! [`CancelFlag`] at item boundaries, and on failure hands the
//! unprocessed tail back as a [`RetryPayload`].
//!
//! Cancellation is advisory: it never interrupts the operation currently
//! in flight, it only prevents the next item from starting. There is no
//! timeout either, so a hung operation hangs the whole run.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;

use crate::transition::{BulkStatus, BulkTransition};

/// Per-item async operation: `(item, index, total)`
///
/// Resolves on success, errors on failure. Side effects (API calls, file
/// I/O) are entirely the caller's business.
pub type BulkOperation<T> =
    Arc<dyn Fn(T, usize, usize) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Display message for an item: `(item, index, total)`. Pure and synchronous.
pub type StatusMessageFn<T> = Arc<dyn Fn(&T, usize, usize) -> String + Send + Sync>;

/// A bulk run request: the items plus the two caller contracts
#[derive(Clone)]
pub struct BulkRequest<T> {
    pub items: Vec<T>,
    pub operation: BulkOperation<T>,
    pub status_message: StatusMessageFn<T>,
}

impl<T> BulkRequest<T> {
    /// Build a request from plain closures
    pub fn new<Op, Fut, Msg>(items: Vec<T>, operation: Op, status_message: Msg) -> Self
    where
        Op: Fn(T, usize, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
        Msg: Fn(&T, usize, usize) -> String + Send + Sync + 'static,
    {
        Self {
            items,
            operation: Arc::new(move |item, index, total| {
                let fut: BoxFuture<'static, Result<()>> = Box::pin(operation(item, index, total));
                fut
            }),
            status_message: Arc::new(status_message),
        }
    }
}

impl<T> fmt::Debug for BulkRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkRequest")
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

/// The unprocessed tail of a failed run plus the original closures
///
/// Constructed exactly once, at the moment a run fails. The UI holds it
/// until the user retries or discards; retrying resumes from the item
/// that failed, items already processed are not run again.
#[derive(Clone)]
pub struct RetryPayload<T> {
    pub items: Vec<T>,
    pub operation: BulkOperation<T>,
    pub status_message: StatusMessageFn<T>,
}

impl<T> RetryPayload<T> {
    /// Number of items waiting to be retried
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Turn the payload back into a runnable request
    pub fn into_request(self) -> BulkRequest<T> {
        BulkRequest {
            items: self.items,
            operation: self.operation,
            status_message: self.status_message,
        }
    }
}

impl<T> fmt::Debug for RetryPayload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPayload")
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

/// Failure report for a multi-item run
pub struct BulkFailure<T> {
    /// The error the failing operation returned
    pub error: anyhow::Error,
    /// How many items never completed, the failing one included
    pub remaining: usize,
    /// The tail of the list, ready to be re-run
    pub retry: RetryPayload<T>,
}

impl<T> fmt::Debug for BulkFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkFailure")
            .field("error", &self.error)
            .field("remaining", &self.remaining)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Cooperative cancellation flag
///
/// Cloned into whatever wants to request cancellation; the runner reads
/// it before starting each item and resets it when a new run begins.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the current run
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear the flag; a new run starts unset
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Observer seam between the runner and its presentation layer
///
/// Transitions drive the progress state; `failed` delivers the one error
/// kind a run distinguishes, together with the retry payload. Both are
/// fire-and-forget from the runner's point of view.
pub trait BulkObserver<T>: Send + Sync {
    fn transition(&self, transition: BulkTransition);
    fn failed(&self, failure: BulkFailure<T>);
}

fn percent(index: usize, total: usize) -> u8 {
    (((index + 1) as f64 / total as f64) * 100.0).round() as u8
}

/// Run a bulk operation to completion, cancellation or first failure
///
/// Returns the number of items whose operation completed without error.
///
/// - A single-item request takes a fast path: the operation runs, then
///   `on_success`, and no transition is ever emitted. An error on this
///   path propagates straight to the caller instead of producing a
///   failure report.
/// - Multi-item requests emit `Start`, then one `Progress` per item
///   processed (percent computed from the 1-based index, so the first
///   item already shows a non-zero percent), and always emit `Finish` on
///   the way out.
/// - The cancel flag is read before each item; a set flag ends the run
///   early with whatever partial progress was made, which is not an
///   error.
/// - The first operation error stops the run. Items from the failing one
///   onward are packaged into the failure report; items already
///   processed stand.
/// - `on_success` runs only when the full list was consumed without the
///   cancel flag set, or on the fast path. Never on cancellation, never
///   on failure.
pub async fn run<T>(
    request: BulkRequest<T>,
    cancel: &CancelFlag,
    observer: &dyn BulkObserver<T>,
    on_success: Option<Box<dyn FnOnce() + Send>>,
) -> Result<usize>
where
    T: Clone + Send + Sync,
{
    let BulkRequest {
        items,
        operation,
        status_message,
    } = request;
    let total = items.len();

    if total == 1 {
        // Fast path: trivial actions should not flash the progress UI.
        if let Some(item) = items.into_iter().next() {
            operation(item, 0, 1).await?;
        }
        if let Some(done) = on_success {
            done();
        }
        return Ok(1);
    }

    cancel.reset();
    observer.transition(BulkTransition::Start);

    let mut processed = 0;
    for (index, item) in items.iter().enumerate() {
        if cancel.is_cancelled() {
            log::info!("bulk run cancelled after {processed} of {total} items");
            break;
        }

        if let Err(error) = operation(item.clone(), index, total).await {
            log::warn!("bulk run failed at item {} of {total}: {error:#}", index + 1);
            let retry = RetryPayload {
                items: items[index..].to_vec(),
                operation: Arc::clone(&operation),
                status_message: Arc::clone(&status_message),
            };
            observer.failed(BulkFailure {
                error,
                remaining: total - index,
                retry,
            });
            observer.transition(BulkTransition::Finish);
            return Ok(processed);
        }

        processed += 1;
        observer.transition(BulkTransition::Progress(BulkStatus {
            message: status_message(item, index, total),
            percent: percent(index, total),
        }));
    }

    if !cancel.is_cancelled() {
        if let Some(done) = on_success {
            done();
        }
    }
    observer.transition(BulkTransition::Finish);
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    /// Records every transition and failure report a run emits
    #[derive(Default)]
    struct Recorder {
        transitions: Mutex<Vec<BulkTransition>>,
        failures: Mutex<Vec<BulkFailure<&'static str>>>,
    }

    impl Recorder {
        fn transitions(&self) -> Vec<BulkTransition> {
            self.transitions.lock().unwrap().clone()
        }

        fn percents(&self) -> Vec<u8> {
            self.transitions()
                .iter()
                .filter_map(|t| match t {
                    BulkTransition::Progress(status) => Some(status.percent),
                    _ => None,
                })
                .collect()
        }

        fn take_failure(&self) -> Option<BulkFailure<&'static str>> {
            self.failures.lock().unwrap().pop()
        }

        fn failure_count(&self) -> usize {
            self.failures.lock().unwrap().len()
        }
    }

    impl BulkObserver<&'static str> for Recorder {
        fn transition(&self, transition: BulkTransition) {
            self.transitions.lock().unwrap().push(transition);
        }

        fn failed(&self, failure: BulkFailure<&'static str>) {
            self.failures.lock().unwrap().push(failure);
        }
    }

    fn counting_request(
        items: Vec<&'static str>,
        calls: Arc<AtomicUsize>,
        fail_on: Option<&'static str>,
    ) -> BulkRequest<&'static str> {
        BulkRequest::new(
            items,
            move |item: &'static str, _index, _total| {
                let calls = Arc::clone(&calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if Some(item) == fail_on {
                        anyhow::bail!("operation failed for {item}");
                    }
                    Ok(())
                }
            },
            |item: &&'static str, index, total| format!("processing {item} ({} of {total})", index + 1),
        )
    }

    fn success_tracker() -> (Arc<AtomicBool>, Box<dyn FnOnce() + Send>) {
        let flag = Arc::new(AtomicBool::new(false));
        let cloned = Arc::clone(&flag);
        (flag, Box::new(move || cloned.store(true, Ordering::SeqCst)))
    }

    #[tokio::test]
    async fn test_single_item_skips_the_progress_protocol() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        let count = run(
            counting_request(vec!["only"], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            Some(on_success),
        )
        .await
        .unwrap();

        assert_eq!(count, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(succeeded.load(Ordering::SeqCst));
        assert!(recorder.transitions().is_empty());
        assert_eq!(recorder.failure_count(), 0);
    }

    #[tokio::test]
    async fn test_single_item_failure_propagates_to_the_caller() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        let result = run(
            counting_request(vec!["only"], Arc::clone(&calls), Some("only")),
            &CancelFlag::new(),
            &recorder,
            Some(on_success),
        )
        .await;

        assert!(result.is_err());
        assert!(!succeeded.load(Ordering::SeqCst));
        assert!(recorder.transitions().is_empty());
        assert_eq!(recorder.failure_count(), 0);
    }

    #[tokio::test]
    async fn test_full_run_emits_one_progress_per_item() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        let count = run(
            counting_request(vec!["a", "b", "c", "d"], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            Some(on_success),
        )
        .await
        .unwrap();

        assert_eq!(count, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert!(succeeded.load(Ordering::SeqCst));

        let transitions = recorder.transitions();
        assert_eq!(transitions.first(), Some(&BulkTransition::Start));
        assert_eq!(transitions.last(), Some(&BulkTransition::Finish));
        assert_eq!(recorder.percents(), vec![25, 50, 75, 100]);

        let messages: Vec<String> = transitions
            .iter()
            .filter_map(|t| match t {
                BulkTransition::Progress(status) => Some(status.message.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(messages[0], "processing a (1 of 4)");
        assert_eq!(messages[3], "processing d (4 of 4)");
    }

    #[tokio::test]
    async fn test_percents_round_from_the_one_based_index() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));

        run(
            counting_request(vec!["a", "b", "c"], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            None,
        )
        .await
        .unwrap();

        assert_eq!(recorder.percents(), vec![33, 67, 100]);
    }

    #[tokio::test]
    async fn test_cancellation_stops_at_the_next_item_boundary() {
        let recorder = Recorder::default();
        let cancel = CancelFlag::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        // The second item requests cancellation mid-operation; the run
        // must still finish that item and only then stop.
        let cancel_from_op = cancel.clone();
        let op_calls = Arc::clone(&calls);
        let request = BulkRequest::new(
            vec!["a", "b", "c", "d"],
            move |item: &'static str, _index, _total| {
                let cancel = cancel_from_op.clone();
                let calls = Arc::clone(&op_calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if item == "b" {
                        cancel.cancel();
                    }
                    Ok(())
                }
            },
            |item: &&'static str, _index, _total| format!("processing {item}"),
        );

        let count = run(request, &cancel, &recorder, Some(on_success))
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!succeeded.load(Ordering::SeqCst));
        assert_eq!(recorder.failure_count(), 0);
        assert_eq!(recorder.transitions().last(), Some(&BulkTransition::Finish));
    }

    #[tokio::test]
    async fn test_failure_packages_the_unprocessed_tail() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        let count = run(
            counting_request(
                vec!["a", "b", "c", "d", "e"],
                Arc::clone(&calls),
                Some("c"),
            ),
            &CancelFlag::new(),
            &recorder,
            Some(on_success),
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        assert!(!succeeded.load(Ordering::SeqCst));

        let failure = recorder.take_failure().unwrap();
        assert_eq!(failure.remaining, 3);
        assert_eq!(failure.retry.items, vec!["c", "d", "e"]);
        assert!(failure.error.to_string().contains("failed for c"));

        // Progress was reported for the two items that made it.
        assert_eq!(recorder.percents(), vec![20, 40]);
        assert_eq!(recorder.transitions().last(), Some(&BulkTransition::Finish));
    }

    #[tokio::test]
    async fn test_three_items_failing_on_the_last() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let count = run(
            counting_request(vec!["a", "b", "c"], Arc::clone(&calls), Some("c")),
            &CancelFlag::new(),
            &recorder,
            None,
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(recorder.percents(), vec![33, 67]);

        let failure = recorder.take_failure().unwrap();
        assert_eq!(failure.remaining, 1);
        assert_eq!(failure.retry.items, vec!["c"]);

        let final_state = recorder
            .transitions()
            .iter()
            .fold(crate::BulkState::default(), |state, t| {
                crate::reduce(state, t)
            });
        assert_eq!(final_state, crate::BulkState::default());
    }

    #[tokio::test]
    async fn test_retrying_the_payload_resumes_from_the_failure() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));

        run(
            counting_request(vec!["a", "b", "c", "d"], Arc::clone(&calls), Some("b")),
            &CancelFlag::new(),
            &recorder,
            None,
        )
        .await
        .unwrap();

        let failure = recorder.take_failure().unwrap();
        assert_eq!(failure.retry.len(), 3);

        // The closures survive inside the payload; only the tail re-runs.
        let ran: Vec<&'static str> = failure.retry.items.clone();
        assert_eq!(ran, vec!["b", "c", "d"]);
        let retried = failure.retry.into_request();
        assert_eq!(retried.items.len(), 3);
    }

    #[tokio::test]
    async fn test_sequential_runs_are_independent() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = run(
            counting_request(vec!["a", "b"], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            None,
        )
        .await
        .unwrap();
        let second = run(
            counting_request(vec!["x", "y", "z"], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            None,
        )
        .await
        .unwrap();

        assert_eq!((first, second), (2, 3));

        let transitions = recorder.transitions();
        let starts = transitions
            .iter()
            .filter(|t| matches!(t, BulkTransition::Start))
            .count();
        let finishes = transitions
            .iter()
            .filter(|t| matches!(t, BulkTransition::Finish))
            .count();
        assert_eq!((starts, finishes), (2, 2));
        assert_eq!(recorder.percents(), vec![50, 100, 33, 67, 100]);

        let final_state = transitions
            .iter()
            .fold(crate::BulkState::default(), |state, t| {
                crate::reduce(state, t)
            });
        assert_eq!(final_state, crate::BulkState::default());
    }

    #[tokio::test]
    async fn test_empty_list_is_a_trivially_complete_run() {
        let recorder = Recorder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let (succeeded, on_success) = success_tracker();

        let count = run(
            counting_request(vec![], Arc::clone(&calls), None),
            &CancelFlag::new(),
            &recorder,
            Some(on_success),
        )
        .await
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(succeeded.load(Ordering::SeqCst));
        assert_eq!(
            recorder.transitions(),
            vec![BulkTransition::Start, BulkTransition::Finish]
        );
    }

    #[test]
    fn test_cancel_flag_round_trip() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());
        flag.cancel();
        assert!(flag.is_cancelled());
        let clone = flag.clone();
        assert!(clone.is_cancelled());
        flag.reset();
        assert!(!clone.is_cancelled());
    }
}
