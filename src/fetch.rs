//! Background fetch of the term list and the review session lifecycle
//!
//! The query runs on its own thread. Its outcome travels back over a
//! channel and is only applied on the thread that owns the controller, and
//! only while the session's lifetime token is still live.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::contract::{ContentUri, TermsContract};
use crate::provider::{self, QueryArgs, TermsProvider};
use crate::review::{CardView, ReviewController, ReviewLabels};
use crate::terms::TermCursor;

type FetchOutcome = provider::Result<Option<TermCursor>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The query has not finished yet
    Pending,
    /// Results (possibly none) were handed to the controller
    Delivered,
    /// The query failed; the controller was put in the empty state
    Failed,
    /// The owner went away; nothing was touched
    Cancelled,
}

/// A single terms query running off the UI thread
pub struct WordFetchTask {
    token: CancellationToken,
    receiver: Receiver<FetchOutcome>,
    worker: JoinHandle<()>,
}

impl WordFetchTask {
    pub fn spawn(provider: Arc<dyn TermsProvider>, uri: ContentUri, token: CancellationToken) -> Self {
        let (sender, receiver) = mpsc::channel();
        let worker_token = token.clone();

        let worker = std::thread::spawn(move || {
            if worker_token.is_cancelled() {
                log::debug!("Term fetch cancelled before it started");
                return;
            }

            let outcome = provider.query(&uri, &QueryArgs::default());

            if worker_token.is_cancelled() {
                log::debug!("Term fetch finished after its owner was torn down");
                return;
            }

            // The receiver is gone if the task was dropped; the cursor is
            // closed when `outcome` drops.
            let _ = sender.send(outcome);
        });

        Self {
            token,
            receiver,
            worker,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the worker thread has exited, whether or not it sent an outcome
    pub fn is_worker_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Deliver the outcome to `controller` if it is ready. Never blocks.
    pub fn try_complete<V: CardView>(&self, controller: &mut ReviewController<V>) -> FetchStatus {
        if self.token.is_cancelled() || controller.is_disposed() {
            return FetchStatus::Cancelled;
        }

        match self.receiver.try_recv() {
            Ok(outcome) => Self::deliver(outcome, controller),
            Err(TryRecvError::Empty) => FetchStatus::Pending,
            Err(TryRecvError::Disconnected) => Self::worker_lost(controller),
        }
    }

    /// Like `try_complete`, but waits up to `timeout` for the outcome
    pub fn wait_complete<V: CardView>(
        &self,
        controller: &mut ReviewController<V>,
        timeout: Duration,
    ) -> FetchStatus {
        if self.token.is_cancelled() || controller.is_disposed() {
            return FetchStatus::Cancelled;
        }

        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => {
                // The owner may have been torn down from another thread while we waited
                if self.token.is_cancelled() {
                    return FetchStatus::Cancelled;
                }
                Self::deliver(outcome, controller)
            }
            Err(RecvTimeoutError::Timeout) => FetchStatus::Pending,
            Err(RecvTimeoutError::Disconnected) => Self::worker_lost(controller),
        }
    }

    fn deliver<V: CardView>(outcome: FetchOutcome, controller: &mut ReviewController<V>) -> FetchStatus {
        match outcome {
            Ok(results) => {
                controller.load(results);
                FetchStatus::Delivered
            }
            Err(e) => {
                log::error!("Failed to fetch terms: {}", e);
                controller.load(None);
                FetchStatus::Failed
            }
        }
    }

    fn worker_lost<V: CardView>(controller: &mut ReviewController<V>) -> FetchStatus {
        log::error!("Term fetch thread exited without a result");
        controller.load(None);
        FetchStatus::Failed
    }
}

/// Owns a review controller for its whole lifetime: starts the fetch,
/// applies its outcome and tears everything down.
pub struct ReviewSession<V: CardView> {
    controller: ReviewController<V>,
    lifetime: CancellationToken,
    fetch: Option<WordFetchTask>,
}

impl<V: CardView> ReviewSession<V> {
    /// Create the controller and start fetching all terms
    pub fn start(
        provider: Arc<dyn TermsProvider>,
        contract: TermsContract,
        labels: ReviewLabels,
        view: V,
    ) -> Self {
        let lifetime = CancellationToken::new();
        let uri = contract.content_uri();
        log::info!("Fetching terms from {}", uri);

        let fetch = WordFetchTask::spawn(provider, uri, lifetime.child_token());
        let controller = ReviewController::new(view, contract, labels);

        Self {
            controller,
            lifetime,
            fetch: Some(fetch),
        }
    }

    pub fn controller(&self) -> &ReviewController<V> {
        &self.controller
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Apply the fetch outcome if it arrived. Returns `None` when no fetch
    /// is outstanding.
    pub fn pump(&mut self) -> Option<FetchStatus> {
        let status = self.fetch.as_ref()?.try_complete(&mut self.controller);
        if status != FetchStatus::Pending {
            self.fetch = None;
        }
        Some(status)
    }

    /// Block up to `timeout` for the fetch outcome
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchStatus> {
        let status = self.fetch.as_ref()?.wait_complete(&mut self.controller, timeout);
        if status != FetchStatus::Pending {
            self.fetch = None;
        }
        Some(status)
    }

    pub fn click(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.controller.on_button_click();
    }

    /// Cancel any pending fetch and dispose of the controller. Idempotent.
    pub fn teardown(&mut self) {
        if self.lifetime.is_cancelled() {
            return;
        }
        self.lifetime.cancel();
        self.fetch = None;
        self.controller.dispose();
        log::info!("Review session torn down");
    }
}

impl<V: CardView> Drop for ReviewSession<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Instant;

    use crate::provider::{MemoryTermsProvider, ProviderError};
    use crate::review::{CardFace, DisplayMode};
    use crate::terms::Term;

    const WAIT: Duration = Duration::from_secs(5);

    fn memory_provider(terms: Vec<Term>) -> Arc<dyn TermsProvider> {
        Arc::new(MemoryTermsProvider::new(TermsContract::default(), terms))
    }

    /// Blocks every query until the test opens the gate
    struct GatedProvider {
        inner: MemoryTermsProvider,
        gate: Mutex<Receiver<()>>,
        entered: Arc<AtomicBool>,
        finished: Arc<AtomicBool>,
    }

    impl TermsProvider for GatedProvider {
        fn query(&self, uri: &ContentUri, args: &QueryArgs) -> provider::Result<Option<TermCursor>> {
            self.entered.store(true, Ordering::SeqCst);
            let _ = self.gate.lock().unwrap().recv();
            let result = self.inner.query(uri, args);
            self.finished.store(true, Ordering::SeqCst);
            result
        }
    }

    struct Gate {
        open: mpsc::Sender<()>,
        entered: Arc<AtomicBool>,
        finished: Arc<AtomicBool>,
    }

    impl Gate {
        fn query_entered(&self) -> bool {
            self.entered.load(Ordering::SeqCst)
        }

        fn query_finished(&self) -> bool {
            self.finished.load(Ordering::SeqCst)
        }
    }

    fn gated() -> (Arc<dyn TermsProvider>, Gate) {
        let (open, gate) = mpsc::channel();
        let entered = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));
        let provider = GatedProvider {
            inner: MemoryTermsProvider::new(
                TermsContract::default(),
                vec![Term::new(1, "cat", "a feline")],
            ),
            gate: Mutex::new(gate),
            entered: Arc::clone(&entered),
            finished: Arc::clone(&finished),
        };
        (
            Arc::new(provider),
            Gate {
                open,
                entered,
                finished,
            },
        )
    }

    struct FailingProvider;

    impl TermsProvider for FailingProvider {
        fn query(&self, uri: &ContentUri, _args: &QueryArgs) -> provider::Result<Option<TermCursor>> {
            Err(ProviderError::UnknownUri(uri.to_string()))
        }
    }

    /// Poll `cond` until it holds or `WAIT` elapses
    fn wait_until(cond: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + WAIT;
        while !cond() {
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        true
    }

    fn controller() -> ReviewController<CardFace> {
        ReviewController::new(
            CardFace::default(),
            TermsContract::default(),
            ReviewLabels::default(),
        )
    }

    #[test]
    fn test_session_loads_first_word() {
        let mut session = ReviewSession::start(
            memory_provider(vec![Term::new(1, "cat", "a feline"), Term::new(2, "dog", "a canine")]),
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );

        assert_eq!(session.wait(WAIT), Some(FetchStatus::Delivered));
        assert!(!session.is_fetching());
        assert_eq!(session.pump(), None);

        let controller = session.controller();
        assert_eq!(controller.mode(), DisplayMode::Hidden);
        assert_eq!(controller.position(), 0);
        assert_eq!(controller.view().word, "cat");

        session.click();
        assert_eq!(session.controller().mode(), DisplayMode::Shown);
    }

    #[test]
    fn test_pump_is_pending_until_query_finishes() {
        let (provider, gate) = gated();
        let mut session = ReviewSession::start(
            provider,
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );

        assert!(wait_until(|| gate.query_entered()));
        assert_eq!(session.pump(), Some(FetchStatus::Pending));
        assert!(!session.controller().is_loaded());

        gate.open.send(()).unwrap();
        assert_eq!(session.wait(WAIT), Some(FetchStatus::Delivered));
        assert_eq!(session.controller().view().word, "cat");
    }

    #[test]
    fn test_teardown_while_query_runs_is_silent() {
        let (provider, gate) = gated();
        let mut session = ReviewSession::start(
            provider,
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );
        assert!(wait_until(|| gate.query_entered()));

        session.teardown();
        gate.open.send(()).unwrap();
        assert!(wait_until(|| gate.query_finished()));

        assert!(session.is_torn_down());
        assert_eq!(session.pump(), None);
        session.click();

        let controller = session.controller();
        assert!(controller.is_disposed());
        assert!(!controller.is_loaded());
        assert_eq!(controller.view(), &CardFace::default());

        // A second teardown and the eventual drop are both harmless
        session.teardown();
    }

    #[test]
    fn test_cancel_while_query_runs_drops_outcome() {
        let (provider, gate) = gated();
        let token = CancellationToken::new();
        let task = WordFetchTask::spawn(provider, TermsContract::default().content_uri(), token.clone());
        let mut controller = controller();
        assert!(wait_until(|| gate.query_entered()));

        token.cancel();
        gate.open.send(()).unwrap();
        assert!(wait_until(|| gate.query_finished()));
        assert!(wait_until(|| task.is_worker_finished()));

        // The worker saw the cancellation after the query and sent nothing
        assert!(matches!(task.receiver.try_recv(), Err(TryRecvError::Disconnected)));

        assert!(task.is_cancelled());
        assert_eq!(task.try_complete(&mut controller), FetchStatus::Cancelled);
        assert_eq!(task.wait_complete(&mut controller, WAIT), FetchStatus::Cancelled);
        assert!(!controller.is_loaded());
        assert_eq!(controller.view(), &CardFace::default());
    }

    #[test]
    fn test_cancel_after_outcome_queued_leaves_controller_untouched() {
        let token = CancellationToken::new();
        let task = WordFetchTask::spawn(
            memory_provider(vec![Term::new(1, "cat", "a feline")]),
            TermsContract::default().content_uri(),
            token.clone(),
        );
        let mut controller = controller();

        // Worker exits only after sending, so the outcome is sitting in the channel
        assert!(wait_until(|| task.is_worker_finished()));

        token.cancel();
        assert_eq!(task.try_complete(&mut controller), FetchStatus::Cancelled);
        assert_eq!(task.wait_complete(&mut controller, WAIT), FetchStatus::Cancelled);
        assert!(!controller.is_loaded());
        assert_eq!(controller.view(), &CardFace::default());
    }

    #[test]
    fn test_teardown_after_outcome_queued_is_silent() {
        let mut session = ReviewSession::start(
            memory_provider(vec![Term::new(1, "cat", "a feline")]),
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );
        assert!(wait_until(|| session
            .fetch
            .as_ref()
            .is_some_and(WordFetchTask::is_worker_finished)));

        session.teardown();
        assert_eq!(session.pump(), None);
        assert_eq!(session.wait(WAIT), None);

        let controller = session.controller();
        assert!(controller.is_disposed());
        assert!(!controller.is_loaded());
        assert_eq!(controller.view(), &CardFace::default());
    }

    #[test]
    fn test_disposed_controller_is_not_loaded() {
        let token = CancellationToken::new();
        let task = WordFetchTask::spawn(
            memory_provider(vec![Term::new(1, "cat", "a feline")]),
            TermsContract::default().content_uri(),
            token,
        );
        let mut controller = controller();
        controller.dispose();

        assert_eq!(task.wait_complete(&mut controller, WAIT), FetchStatus::Cancelled);
        assert_eq!(controller.view(), &CardFace::default());
    }

    #[test]
    fn test_failed_query_shows_empty_state() {
        let mut session = ReviewSession::start(
            Arc::new(FailingProvider),
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );

        assert_eq!(session.wait(WAIT), Some(FetchStatus::Failed));
        assert!(session.controller().is_empty());
        assert_eq!(session.controller().view().word, "No terms available");
    }

    #[test]
    fn test_empty_provider_shows_empty_state() {
        let mut session = ReviewSession::start(
            memory_provider(Vec::new()),
            TermsContract::default(),
            ReviewLabels::default(),
            CardFace::default(),
        );

        assert_eq!(session.wait(WAIT), Some(FetchStatus::Delivered));
        assert!(session.controller().is_empty());
        session.click();
        assert_eq!(session.controller().mode(), DisplayMode::Hidden);
    }
}
