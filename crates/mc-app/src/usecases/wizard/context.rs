use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use mc_core::wizard::WizardState;

/// State owned by one wizard page.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `state`,
/// then `cancel`.
/// - `dispatch_lock`: serializes transition + action execution.
/// - `state`: read by `get_state`, written during dispatch.
/// - `cancel`: token shared by every request this page starts; replaced
///   after each cancellation.
pub(crate) struct WizardContext {
    state: Mutex<WizardState>,
    dispatch_lock: Mutex<()>,
    cancel: Mutex<CancellationToken>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        *self.state.lock().await = state;
    }

    pub async fn cancellation_token(&self) -> CancellationToken {
        self.cancel.lock().await.clone()
    }

    /// Cancel every outstanding request and start a fresh generation.
    pub async fn cancel_in_flight(&self) {
        let mut guard = self.cancel.lock().await;
        guard.cancel();
        *guard = CancellationToken::new();
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardState::default())
    }
}
